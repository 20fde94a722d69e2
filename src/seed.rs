//! Fixed seed tables the generator draws from. The curriculum catalogue is
//! ordered by career, then term; row position feeds the generated subject
//! codes, so the order is load-bearing.

use crate::model::{CareerLevel, NotificationKind};

pub const EMAIL_DOMAIN: &str = "uppenjamo.edu.mx";

pub const GIVEN_NAMES: &[&str] = &[
    "Ana", "Luis", "Maria", "Carlos", "Sofia", "Jorge", "Fernanda", "Pedro", "Lucia", "Miguel",
    "Elena", "Roberto", "Patricia", "David", "Carmen", "Juan", "Isabel", "Jose", "Paula",
    "Alejandro", "Ricardo", "Gabriela", "Daniel", "Veronica", "Hector", "Beatriz", "Francisco",
    "Teresa", "Manuel",
];

pub const SURNAMES: &[&str] = &[
    "Garcia", "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Perez", "Sanchez",
    "Ramirez", "Torres", "Flores", "Rivera", "Gomez", "Diaz", "Reyes", "Morales", "Ortiz",
    "Castillo", "Chavez", "Vasquez", "Jimenez", "Moreno", "Alvarez", "Romero",
];

pub const DEPARTMENTS: &[&str] = &[
    "Ciencias Exactas",
    "Sistemas Computacionales",
    "Mecatrónica",
    "Salud y Terapia",
    "Idiomas",
    "Biotecnología",
    "Desarrollo Humano",
];

pub struct CareerSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub level: CareerLevel,
    pub coordinator: &'static str,
    pub color: &'static str,
}

pub const CAREERS: &[CareerSeed] = &[
    CareerSeed {
        id: "ISO",
        name: "Ingeniería en Software",
        level: CareerLevel::Ingenieria,
        coordinator: "M.C. Juan Pérez",
        color: "bg-blue-600",
    },
    CareerSeed {
        id: "IM",
        name: "Ingeniería Mecatrónica",
        level: CareerLevel::Ingenieria,
        coordinator: "Dr. Roberto Gomez",
        color: "bg-orange-500",
    },
    CareerSeed {
        id: "LTF",
        name: "Licenciatura en Terapia Física",
        level: CareerLevel::Licenciatura,
        coordinator: "Lic. Ana Suarez",
        color: "bg-emerald-500",
    },
    CareerSeed {
        id: "IBT",
        name: "Ingeniería en Biotecnología",
        level: CareerLevel::Ingenieria,
        coordinator: "Dra. Carmen Lopez",
        color: "bg-purple-500",
    },
];

pub struct CurriculumRow {
    pub career: &'static str,
    pub term: u8,
    pub name: &'static str,
    pub credits: u32,
}

const fn row(career: &'static str, term: u8, name: &'static str, credits: u32) -> CurriculumRow {
    CurriculumRow {
        career,
        term,
        name,
        credits,
    }
}

/// Full nine-term study plans for the four programs. Term 9 is the
/// professional internship ("Estadía") everywhere.
pub const RAW_CURRICULUM: &[CurriculumRow] = &[
    // ISO
    row("ISO", 1, "Fundamentos de Programación", 6),
    row("ISO", 1, "Álgebra Lineal", 6),
    row("ISO", 1, "Inglés I", 4),
    row("ISO", 1, "Desarrollo Humano", 4),
    row("ISO", 2, "Prog. Orientada a Objetos", 8),
    row("ISO", 2, "Cálculo Diferencial", 6),
    row("ISO", 2, "Inglés II", 4),
    row("ISO", 2, "Química Básica", 4),
    row("ISO", 3, "Estructura de Datos", 8),
    row("ISO", 3, "Cálculo Integral", 6),
    row("ISO", 3, "Inglés III", 4),
    row("ISO", 3, "Física para Ingeniería", 6),
    row("ISO", 4, "Bases de Datos", 8),
    row("ISO", 4, "Cálculo Vectorial", 6),
    row("ISO", 4, "Inglés IV", 4),
    row("ISO", 4, "Sistemas Operativos", 6),
    row("ISO", 5, "Programación Web", 8),
    row("ISO", 5, "Ecuaciones Diferenciales", 6),
    row("ISO", 5, "Inglés V", 4),
    row("ISO", 5, "Redes de Computadoras", 8),
    row("ISO", 6, "Ingeniería de Software", 8),
    row("ISO", 6, "Probabilidad y Estadística", 6),
    row("ISO", 6, "Inglés VI", 4),
    row("ISO", 6, "Interacción Humano-Comp", 6),
    row("ISO", 7, "Desarrollo Móvil", 8),
    row("ISO", 7, "Calidad de Software", 6),
    row("ISO", 7, "Inglés VII", 4),
    row("ISO", 7, "Gestión de Proyectos", 6),
    row("ISO", 8, "Seguridad Informática", 8),
    row("ISO", 8, "Inteligencia Artificial", 8),
    row("ISO", 8, "Inglés VIII", 4),
    row("ISO", 8, "Minería de Datos", 6),
    row("ISO", 9, "Estadía Profesional", 20),
    row("ISO", 9, "Ética Profesional", 4),
    // IM
    row("IM", 1, "Intro. a la Mecatrónica", 4),
    row("IM", 1, "Álgebra Superior", 6),
    row("IM", 1, "Química de Materiales", 6),
    row("IM", 1, "Inglés I", 4),
    row("IM", 2, "Cálculo Diferencial", 6),
    row("IM", 2, "Metrología", 4),
    row("IM", 2, "Dibujo Asistido (CAD)", 6),
    row("IM", 2, "Inglés II", 4),
    row("IM", 3, "Cálculo Integral", 6),
    row("IM", 3, "Física Clásica", 6),
    row("IM", 3, "Estática", 6),
    row("IM", 3, "Inglés III", 4),
    row("IM", 4, "Cálculo Vectorial", 6),
    row("IM", 4, "Electricidad y Mag.", 6),
    row("IM", 4, "Dinámica", 6),
    row("IM", 4, "Inglés IV", 4),
    row("IM", 5, "Ecuaciones Diferenciales", 6),
    row("IM", 5, "Circuitos Eléctricos", 8),
    row("IM", 5, "Termodinámica", 6),
    row("IM", 5, "Inglés V", 4),
    row("IM", 6, "Electrónica Analógica", 8),
    row("IM", 6, "Mecánica de Materiales", 6),
    row("IM", 6, "Programación C++", 6),
    row("IM", 6, "Inglés VI", 4),
    row("IM", 7, "Electrónica Digital", 8),
    row("IM", 7, "Máquinas Eléctricas", 6),
    row("IM", 7, "Instrumentación", 6),
    row("IM", 7, "Inglés VII", 4),
    row("IM", 8, "Control Automático", 8),
    row("IM", 8, "Robótica Industrial", 8),
    row("IM", 8, "PLC y Automatización", 8),
    row("IM", 8, "Inglés VIII", 4),
    row("IM", 9, "Estadía Profesional", 20),
    row("IM", 9, "Diseño Mecatrónico", 6),
    // LTF
    row("LTF", 1, "Anatomía Humana I", 8),
    row("LTF", 1, "Biología Celular", 6),
    row("LTF", 1, "Historia de la FT", 4),
    row("LTF", 1, "Inglés I", 4),
    row("LTF", 2, "Anatomía Humana II", 8),
    row("LTF", 2, "Fisiología I", 8),
    row("LTF", 2, "Bioquímica", 6),
    row("LTF", 2, "Inglés II", 4),
    row("LTF", 3, "Fisiología del Ejercicio", 8),
    row("LTF", 3, "Biomecánica I", 6),
    row("LTF", 3, "Patología General", 6),
    row("LTF", 3, "Inglés III", 4),
    row("LTF", 4, "Biomecánica II", 6),
    row("LTF", 4, "Kinesiología", 8),
    row("LTF", 4, "Agentes Físicos I", 6),
    row("LTF", 4, "Inglés IV", 4),
    row("LTF", 5, "Agentes Físicos II", 6),
    row("LTF", 5, "Valoración Muscular", 8),
    row("LTF", 5, "Hidroterapia", 4),
    row("LTF", 5, "Inglés V", 4),
    row("LTF", 6, "Rehab. Neurológica", 8),
    row("LTF", 6, "Rehab. Ortopédica", 8),
    row("LTF", 6, "Masoterapia", 4),
    row("LTF", 6, "Inglés VI", 4),
    row("LTF", 7, "Rehab. Pediátrica", 8),
    row("LTF", 7, "Rehab. Geriátrica", 8),
    row("LTF", 7, "Farmacología", 4),
    row("LTF", 7, "Inglés VII", 4),
    row("LTF", 8, "Práctica Clínica I", 12),
    row("LTF", 8, "Rehab. Deportiva", 6),
    row("LTF", 8, "Ética y Salud", 4),
    row("LTF", 8, "Inglés VIII", 4),
    row("LTF", 9, "Estadía Profesional", 20),
    row("LTF", 9, "Gestión en Salud", 4),
    // IBT
    row("IBT", 1, "Biología", 6),
    row("IBT", 1, "Química Inorgánica", 6),
    row("IBT", 1, "Álgebra Lineal", 6),
    row("IBT", 1, "Inglés I", 4),
    row("IBT", 2, "Química Orgánica I", 8),
    row("IBT", 2, "Cálculo Diferencial", 6),
    row("IBT", 2, "Mecánica Clásica", 6),
    row("IBT", 2, "Inglés II", 4),
    row("IBT", 3, "Química Orgánica II", 8),
    row("IBT", 3, "Cálculo Integral", 6),
    row("IBT", 3, "Termodinámica", 6),
    row("IBT", 3, "Inglés III", 4),
    row("IBT", 4, "Microbiología", 8),
    row("IBT", 4, "Bioquímica I", 8),
    row("IBT", 4, "Probabilidad y Est.", 6),
    row("IBT", 4, "Inglés IV", 4),
    row("IBT", 5, "Bioquímica II", 8),
    row("IBT", 5, "Biología Molecular", 8),
    row("IBT", 5, "Balance de Materia", 6),
    row("IBT", 5, "Inglés V", 4),
    row("IBT", 6, "Ingeniería Genética", 8),
    row("IBT", 6, "Fenómenos de Transp.", 6),
    row("IBT", 6, "Instrumentación", 6),
    row("IBT", 6, "Inglés VI", 4),
    row("IBT", 7, "Operaciones Unitarias", 8),
    row("IBT", 7, "Biotecnología Alim.", 8),
    row("IBT", 7, "Bioética", 4),
    row("IBT", 7, "Inglés VII", 4),
    row("IBT", 8, "Bioreactores", 8),
    row("IBT", 8, "Biotecnología Amb.", 8),
    row("IBT", 8, "Formulación Proyectos", 6),
    row("IBT", 8, "Inglés VIII", 4),
    row("IBT", 9, "Estadía Profesional", 20),
    row("IBT", 9, "Control de Calidad", 4),
];

pub struct NotificationSeed {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub date: Option<&'static str>,
}

pub const STUDENT_NOTIFICATIONS: &[NotificationSeed] = &[
    NotificationSeed {
        kind: NotificationKind::Danger,
        title: "Adeudo de Biblioteca",
        message: "Tienes un libro con retraso de entrega de 3 días.",
        date: Some("Hace 2 horas"),
    },
    NotificationSeed {
        kind: NotificationKind::Info,
        title: "Reinscripciones",
        message: "El proceso inicia el próximo lunes para regulares.",
        date: Some("Ayer"),
    },
    NotificationSeed {
        kind: NotificationKind::Success,
        title: "Pago Registrado",
        message: "Tu pago de colegiatura de Septiembre ha sido procesado.",
        date: Some("Hace 3 días"),
    },
    NotificationSeed {
        kind: NotificationKind::Warning,
        title: "Evaluación Docente",
        message: "Recuerda evaluar a tus profesores antes del viernes.",
        date: Some("Hace 4 días"),
    },
];

pub const PROFESSOR_NOTIFICATIONS: &[NotificationSeed] = &[
    NotificationSeed {
        kind: NotificationKind::Warning,
        title: "Cierre de Actas",
        message: "Faltan 2 días para el cierre del Parcial 1.",
        date: None,
    },
    NotificationSeed {
        kind: NotificationKind::Success,
        title: "Evaluación Docente",
        message: "Has recibido una calificación de 4.8/5.0.",
        date: None,
    },
];
