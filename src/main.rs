mod gen;
mod ipc;
mod model;
mod seed;
mod views;

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Logs go to stderr; stdout is reserved for IPC frames.
    env_logger::init();

    let seed = match std::env::var("PORTALD_SEED") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                log::error!("PORTALD_SEED must be an unsigned integer, got {raw:?}");
                std::process::exit(2);
            }
        },
        Err(_) => rand::random(),
    };

    // Generation is a strict barrier: the dataset is complete before the
    // first request line is read.
    let cfg = gen::GenConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let dataset = match gen::generate_with_rng(&cfg, &mut rng) {
        Ok(d) => d,
        Err(e) => {
            log::error!("dataset generation failed: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "dataset ready (seed {seed}): {} careers, {} subjects, {} professors, {} students, {} courses",
        dataset.careers.len(),
        dataset.curriculum.len(),
        dataset.professors.len(),
        dataset.students.len(),
        dataset.courses.len()
    );

    let mut state = ipc::AppState { dataset, rng };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply without id; send a best-effort error frame.
                let _ = writeln!(
                    stdout,
                    "{{\"ok\":false,\"error\":{{\"code\":\"bad_json\",\"message\":\"{}\"}}}}",
                    e
                );
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}
