use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;

/// Runtime settings for the registrar tools, read from a `.env` file and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub courses_csv: String,
    pub semesters_csv: String,
    pub results_csv: String,
    /// How many students the cohort report lists as top performers.
    pub top_students: usize,
    /// GPA below which the cohort report flags a student as at risk.
    pub at_risk_gpa: f64,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

impl Config {
    /// Loads `env_path` (if present) into the environment and builds the global config once.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();
        CONFIG.get_or_init(Config::from_env)
    }

    /// Builds a config from the current environment without touching the global instance.
    pub fn from_env() -> Self {
        let top_students = env::var("TOP_STUDENTS")
            .ok()
            .and_then(|n| n.parse().ok())
            .unwrap_or(5);
        let at_risk_gpa = env::var("AT_RISK_GPA")
            .ok()
            .and_then(|g| g.parse::<f64>().ok())
            .filter(|g| g.is_finite())
            .unwrap_or(1.5);

        Config {
            project_name: var_or("PROJECT_NAME", "registrar"),
            log_level: var_or("LOG_LEVEL", "info"),
            log_file: var_or("LOG_FILE", "logs/registrar.log"),
            courses_csv: var_or("COURSES_CSV", "data/courses.csv"),
            semesters_csv: var_or("SEMESTERS_CSV", "data/semesters.csv"),
            results_csv: var_or("RESULTS_CSV", "data/results.csv"),
            top_students,
            at_risk_gpa,
        }
    }

    pub fn get() -> Option<&'static Self> {
        CONFIG.get()
    }
}
