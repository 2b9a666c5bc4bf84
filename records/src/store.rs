//! # Result Store
//!
//! The [`ResultStore`] trait is the data-access seam the grading engine's callers use: it hands
//! out plain [`CourseResult`] and [`TranscriptRecord`] values keyed by opaque student and semester
//! identifiers. [`InMemoryStore`] implements it over imported CSV rows.
//!
//! Loading follows update-or-create semantics: a later row for the same student, course and
//! semester replaces the earlier one.

use grading::{CourseResult, Mark, SemesterKey, TranscriptRecord};
use log::{debug, warn};
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::{RecordsError, RecordsResult};
use crate::import::{ImportedRow, RowError};
use crate::rows::{CheckedRow, ResultRow};

/// Read access to student results.
pub trait ResultStore {
    /// Every student with at least one result, in identifier order.
    fn students(&self) -> Vec<String>;

    /// Semesters in which `student` has results, chronologically.
    fn semesters_for(&self, student: &str) -> RecordsResult<Vec<SemesterKey>>;

    /// The student's results for one semester, identified by name.
    fn results_for(&self, student: &str, semester: &str) -> RecordsResult<Vec<CourseResult>>;

    /// Every result the student has, with course and semester attached.
    fn transcript_records(&self, student: &str) -> RecordsResult<Vec<TranscriptRecord>>;

    /// Codes of every course offered, with or without results.
    fn course_codes(&self) -> Vec<String>;
}

type ResultKey = (SemesterKey, String);

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    catalog: Catalog,
    results: BTreeMap<String, BTreeMap<ResultKey, Mark>>,
}

impl InMemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            results: BTreeMap::new(),
        }
    }

    /// Builds a store from imported rows. Rows that cannot be resolved against the catalogue are
    /// returned as errors with their original line numbers.
    pub fn load(
        catalog: Catalog,
        rows: impl IntoIterator<Item = ImportedRow<ResultRow>>,
    ) -> (Self, Vec<RowError>) {
        let mut store = InMemoryStore::new(catalog);
        let mut errors = Vec::new();
        for ImportedRow { line, row } in rows {
            if let Err(e) = store.upsert(&row) {
                warn!("Rejected line {}: {}", line, e);
                errors.push(RowError {
                    line,
                    reason: e.to_string(),
                });
            }
        }
        (store, errors)
    }

    /// Inserts or replaces one result. Returns `true` if an existing result was replaced.
    pub fn upsert(&mut self, row: &ResultRow) -> RecordsResult<bool> {
        row.check()?;
        let course = self
            .catalog
            .course(&row.course)
            .ok_or_else(|| RecordsError::UnknownCourse(row.course.clone()))?;
        let semester = self
            .catalog
            .semester(&row.semester)
            .ok_or_else(|| RecordsError::UnknownSemester(row.semester.clone()))?;

        let key = (semester.key(), course.code.clone());
        let replaced = self
            .results
            .entry(row.reg_number.clone())
            .or_default()
            .insert(key, row.mark()?)
            .is_some();
        if replaced {
            debug!(
                "Replaced result for {} in {} ({})",
                row.reg_number, course.code, row.semester
            );
        }
        Ok(replaced)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn student(&self, student: &str) -> RecordsResult<&BTreeMap<ResultKey, Mark>> {
        self.results
            .get(student)
            .ok_or_else(|| RecordsError::UnknownStudent(student.to_string()))
    }

    fn course_result(&self, course_code: &str, mark: Mark) -> RecordsResult<CourseResult> {
        let course = self
            .catalog
            .course(course_code)
            .ok_or_else(|| RecordsError::UnknownCourse(course_code.to_string()))?;
        Ok(CourseResult::new(mark, course.credit_hours()?))
    }
}

impl ResultStore for InMemoryStore {
    fn course_codes(&self) -> Vec<String> {
        self.catalog.courses().map(|c| c.code.clone()).collect()
    }

    fn students(&self) -> Vec<String> {
        self.results.keys().cloned().collect()
    }

    fn semesters_for(&self, student: &str) -> RecordsResult<Vec<SemesterKey>> {
        let mut keys: Vec<SemesterKey> = self
            .student(student)?
            .keys()
            .map(|(semester, _)| semester.clone())
            .collect();
        keys.dedup();
        Ok(keys)
    }

    fn results_for(&self, student: &str, semester: &str) -> RecordsResult<Vec<CourseResult>> {
        let results = self.student(student)?;
        let key = self
            .catalog
            .semester(semester)
            .ok_or_else(|| RecordsError::UnknownSemester(semester.to_string()))?
            .key();

        results
            .iter()
            .filter(|((sem, _), _)| *sem == key)
            .map(|((_, code), mark)| self.course_result(code, *mark))
            .collect()
    }

    fn transcript_records(&self, student: &str) -> RecordsResult<Vec<TranscriptRecord>> {
        self.student(student)?
            .iter()
            .map(|((semester, code), mark)| {
                let course_name = self
                    .catalog
                    .course(code)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                Ok(TranscriptRecord {
                    course_code: code.clone(),
                    course_name,
                    semester: semester.clone(),
                    result: self.course_result(code, *mark)?,
                })
            })
            .collect()
    }
}
