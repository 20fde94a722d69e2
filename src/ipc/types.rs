use rand::rngs::StdRng;
use serde::Deserialize;

use crate::gen::Dataset;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything the request loop owns: the collections produced by the
/// startup generation and the random stream the view builders draw from.
pub struct AppState {
    pub dataset: Dataset,
    pub rng: StdRng,
}
