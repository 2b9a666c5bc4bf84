use anyhow::{Context, Result};
use common::config::Config;
use grading::{SemesterSummary, Transcript, summarize_semester};
use log::{info, warn};
use records::import::{import_courses, import_results, import_semesters, write_template};
use records::{Catalog, InMemoryStore, ResultStore, RowError};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};

use crate::cohort::CohortReport;
use crate::render::render_transcript;
use crate::response::Response;

fn open(path: &str, what: &str) -> Result<File> {
    File::open(path).with_context(|| format!("Failed to open {what} file {path}"))
}

fn log_rejections(source: &str, errors: &[RowError]) {
    if !errors.is_empty() {
        warn!("{source}: {} rows rejected", errors.len());
    }
}

/// Imports the catalogue and results named in `config` into a fresh store.
///
/// Rejected rows are skipped. Only unreadable files or an inconsistent catalogue abort the load.
pub fn load_store(config: &Config) -> Result<InMemoryStore> {
    let courses = import_courses(open(&config.courses_csv, "courses")?)?;
    log_rejections(&config.courses_csv, &courses.errors);

    let semesters = import_semesters(open(&config.semesters_csv, "semesters")?)?;
    log_rejections(&config.semesters_csv, &semesters.errors);

    let catalog = Catalog::new(courses.into_rows(), semesters.into_rows())?;

    let results = import_results(open(&config.results_csv, "results")?)?;
    log_rejections(&config.results_csv, &results.errors);

    let (store, rejected) = InMemoryStore::load(catalog, results.rows);
    log_rejections(&config.results_csv, &rejected);

    info!("Loaded results for {} students", store.students().len());
    Ok(store)
}

fn print_json<T: Serialize>(response: &Response<T>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, response)?;
    writeln!(out)?;
    Ok(())
}

pub fn template() -> Result<()> {
    write_template(io::stdout().lock())?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SemesterReport {
    pub student_id: String,
    pub semester: String,
    pub summary: SemesterSummary,
}

pub fn semester_report<S: ResultStore>(
    store: &S,
    reg_number: &str,
    semester: &str,
) -> Result<SemesterReport> {
    let results = store.results_for(reg_number, semester)?;
    if results.is_empty() {
        warn!("{reg_number} has no results in {semester}; reporting an empty semester");
    }
    Ok(SemesterReport {
        student_id: reg_number.to_string(),
        semester: semester.to_string(),
        summary: summarize_semester(&results),
    })
}

pub fn summary(config: &Config, reg_number: &str, semester: &str) -> Result<()> {
    let store = load_store(config)?;
    let report = semester_report(&store, reg_number, semester)?;
    print_json(&Response::success("Semester summary computed.", report))
}

/// Prints the student's transcript as JSON, or as a plain-text table when `as_text` is set.
pub fn transcript(config: &Config, reg_number: &str, as_text: bool) -> Result<()> {
    let store = load_store(config)?;
    let records = store.transcript_records(reg_number)?;
    let transcript = Transcript::build(reg_number, &records)?;
    if as_text {
        write!(io::stdout().lock(), "{}", render_transcript(&transcript))?;
        return Ok(());
    }
    print_json(&Response::success("Transcript generated.", transcript))
}

pub fn cohort(config: &Config) -> Result<()> {
    let store = load_store(config)?;
    let report = CohortReport::build(&store, config.top_students, config.at_risk_gpa)?;
    print_json(&Response::success("Cohort report computed.", report))
}
