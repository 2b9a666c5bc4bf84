use grading::GradingError;
use thiserror::Error;

/// Errors raised while importing records or answering queries against a store.
#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid row: {0}")]
    Validation(String),

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Unknown semester: {0}")]
    UnknownSemester(String),

    #[error("Unknown student: {0}")]
    UnknownStudent(String),

    #[error("Duplicate course code: {0}")]
    DuplicateCourse(String),

    #[error("Duplicate semester: {0}")]
    DuplicateSemester(String),

    #[error(transparent)]
    Grading(#[from] GradingError),
}

pub type RecordsResult<T> = Result<T, RecordsError>;
