//! Row types read from import files.
//!
//! Each type validates itself with `validator` before it is allowed into a
//! [`crate::catalog::Catalog`] or a [`crate::store::InMemoryStore`].

use common::format_validation_errors;
use grading::{CreditHours, Mark, SemesterKey};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{RecordsError, RecordsResult};

/// Column order of the results upload template.
pub const RESULTS_TEMPLATE_HEADER: [&str; 4] = ["reg_number", "course", "semester", "marks"];

fn validated<T: Validate>(row: &T) -> RecordsResult<()> {
    row.validate()
        .map_err(|e| RecordsError::Validation(format_validation_errors(&e)))
}

/// Validation applied to every imported row before it is accepted.
pub trait CheckedRow {
    fn check(&self) -> RecordsResult<()>;
}

/// One line of a results upload. `course` may hold either a course code or a course name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ResultRow {
    #[validate(length(min = 1, message = "reg_number is required"))]
    pub reg_number: String,
    #[validate(length(min = 1, message = "course is required"))]
    pub course: String,
    #[validate(length(min = 1, message = "semester is required"))]
    pub semester: String,
    #[validate(range(min = 0.0, max = 100.0, message = "marks must be between 0 and 100"))]
    pub marks: f64,
}

impl ResultRow {
    pub fn mark(&self) -> RecordsResult<Mark> {
        Ok(Mark::new(self.marks)?)
    }
}

impl CheckedRow for ResultRow {
    fn check(&self) -> RecordsResult<()> {
        validated(self)?;
        // Catches NaN, which passes the range check.
        self.mark().map(|_| ())
    }
}

/// One course of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CourseEntry {
    #[validate(length(min = 1, max = 20, message = "code must be 1-20 characters"))]
    pub code: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Signed so that a negative value in a catalogue file is reported as invalid credit hours
    /// rather than as a parse failure.
    #[validate(range(min = 1, message = "credit_hours must be at least 1"))]
    pub credit_hours: i64,
}

impl CourseEntry {
    pub fn credit_hours(&self) -> RecordsResult<CreditHours> {
        Ok(CreditHours::from_signed(self.credit_hours)?)
    }
}

impl CheckedRow for CourseEntry {
    fn check(&self) -> RecordsResult<()> {
        validated(self)?;
        self.credit_hours().map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SemesterEntry {
    #[validate(length(min = 1, max = 50, message = "semester name must be 1-50 characters"))]
    pub name: String,
    pub year: u32,
}

impl SemesterEntry {
    pub fn key(&self) -> SemesterKey {
        SemesterKey::new(self.year, self.name.clone())
    }
}

impl CheckedRow for SemesterEntry {
    fn check(&self) -> RecordsResult<()> {
        validated(self)
    }
}
