use anyhow::{Result, bail};
use common::config::Config;
use common::logger::init_logger;
use log::{error, info};
use std::{env, process};

mod cohort;
mod commands;
mod render;
mod response;

const USAGE: &str = "usage: registrar <template | summary <reg_number> <semester> | transcript <reg_number> [--text] | cohort>";

fn run(config: &Config, args: &[String]) -> Result<()> {
    match args.get(1).map(|s| s.as_str()) {
        Some("template") => commands::template(),
        Some("summary") => match (args.get(2), args.get(3)) {
            (Some(reg_number), Some(semester)) => commands::summary(config, reg_number, semester),
            _ => bail!(USAGE),
        },
        Some("transcript") => match (args.get(2), args.get(3).map(|s| s.as_str())) {
            (Some(reg_number), None) => commands::transcript(config, reg_number, false),
            (Some(reg_number), Some("--text")) => commands::transcript(config, reg_number, true),
            _ => bail!(USAGE),
        },
        Some("cohort") => commands::cohort(config),
        _ => bail!(USAGE),
    }
}

fn main() {
    let config = Config::init(".env");
    if let Err(e) = init_logger(&config.log_level, &config.log_file) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let args: Vec<String> = env::args().collect();
    let command = args.get(1..).map(|a| a.join(" ")).unwrap_or_default();
    info!("{} starting: {}", config.project_name, command);

    if let Err(e) = run(config, &args) {
        error!("{e:#}");
        process::exit(1);
    }
}
