//! Grading Error Types
//!
//! This module defines the [`GradingError`] enum, which covers every input the grading engine
//! refuses to work with. Validation happens when the engine's value types are constructed, so the
//! computations themselves never fail on bad numbers.
//!
//! # Example
//!
//! ```rust
//! use grading::error::GradingError;
//! use grading::types::Mark;
//!
//! let err = Mark::new(101.0).unwrap_err();
//! assert!(matches!(err, GradingError::InvalidMark(_)));
//! ```

use thiserror::Error;

/// Represents all error types that can occur in the grading engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradingError {
    /// A mark outside `[0, 100]`, or not a finite number.
    #[error("invalid mark {0}: marks must be between 0 and 100")]
    InvalidMark(f64),
    /// Credit hours of zero or below.
    #[error("invalid credit hours {0}: credit hours must be a positive integer")]
    InvalidCreditHours(i64),
    /// A GPA that is not finite or lies outside `[0, 4]`.
    #[error("invalid GPA {0}: a GPA must be between 0 and 4")]
    InvalidGpa(f64),
    /// The same course appears twice in one semester of a transcript.
    #[error("duplicate result for course {course} in semester {semester}")]
    DuplicateResult { course: String, semester: String },
}
