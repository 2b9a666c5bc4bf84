//! # Records
//!
//! The boundary between raw academic data and the grading engine. This crate reads CSV uploads
//! (results, course catalogue, semesters), validates every row, and serves the accepted data
//! through the [`store::ResultStore`] trait as plain engine inputs.
//!
//! Validation happens here, never inside the engine: a mark outside `[0, 100]` or a course with
//! zero credit hours is rejected as an import error before any GPA is computed.

pub mod catalog;
pub mod error;
pub mod import;
pub mod rows;
pub mod store;

pub use catalog::Catalog;
pub use error::{RecordsError, RecordsResult};
pub use import::{ImportReport, ImportedRow, RowError};
pub use rows::{CourseEntry, ResultRow, SemesterEntry};
pub use store::{InMemoryStore, ResultStore};
