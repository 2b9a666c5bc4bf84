//! # Grading Library
//!
//! This crate is the grading engine of the academic records portal. It turns course marks into
//! letter grades and grade points, aggregates them into semester GPAs and cumulative GPAs, and
//! derives classifications and withdrawal standing from them.
//!
//! Every function is pure and synchronous: it takes plain values, returns plain values and keeps
//! no state between calls, so it can be called from any number of threads without coordination.
//! Input validation happens when [`types::Mark`] and [`types::CreditHours`] are constructed.
//!
//! ## Key Concepts
//! - **Grade mapping** ([`grade`]): mark to letter, points and course status.
//! - **Scoring** ([`scorer`]): credit-weighted GPA and mean-of-semesters CGPA.
//! - **Classification** ([`classification`]): GPA to a named tier.
//! - **Standing** ([`standing`]): withdrawal rule, semester summaries, academic standing.
//! - **Reports** ([`report`]): full transcripts.
//! - **Cohort analytics** ([`cohort`]): dashboards across many students.

pub mod classification;
pub mod cohort;
pub mod error;
pub mod grade;
pub mod report;
pub mod scorer;
pub mod standing;
pub mod types;

pub use classification::{Classification, classify};
pub use error::GradingError;
pub use grade::{CourseStatus, GradeOutcome, Letter, grade_for};
pub use report::{SemesterKey, Transcript, TranscriptRecord};
pub use scorer::{cgpa_for, gpa_for};
pub use standing::{
    AcademicStanding, ResultMessage, SemesterSummary, Standing, academic_standing, standing,
    summarize_semester,
};
pub use types::{CourseResult, CreditHours, Mark};
