//! # Transcript Report Module
//!
//! This module assembles a student's full academic record into a [`Transcript`]: one table of
//! graded rows per semester, each with its [`SemesterSummary`], plus the cumulative figures and
//! the overall [`AcademicStanding`].
//!
//! ## Overview
//!
//! - Semesters are ordered by year, then by name.
//! - Rows inside a semester are ordered by course code.
//! - `cgpa` is the mean of the semester GPAs. `credit_weighted_gpa` is the GPA over every result
//!   the student has, which is what a single cumulative table of all courses would show. Both are
//!   reported so the presentation layer can print whichever the registry asks for.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "student_id": "CS/001/2023",
//!   "semesters": [
//!     {
//!       "semester": { "year": 2023, "name": "Semester 1" },
//!       "rows": [
//!         { "course_code": "CS101", "course_name": "Programming", "marks": 82.0,
//!           "grade": "A", "points": 4.0, "credit_hours": 3, "status": "PASS" }
//!       ],
//!       "summary": { "gpa": 4.0, "classification": "Distinction", "standing": "ACTIVE",
//!                    "total_credits": 3, "message": "passed" }
//!     }
//!   ],
//!   "cgpa": 4.0,
//!   "credit_weighted_gpa": 4.0,
//!   "total_credits": 3,
//!   "standing": { "gpa": 4.0, "classification": "Distinction", "withdrawn": false }
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::GradingError;
use crate::grade::{CourseStatus, Letter, grade_for};
use crate::scorer::{gpa_for, total_credits};
use crate::standing::{AcademicStanding, SemesterSummary, academic_standing, summarize_semester};
use crate::types::CourseResult;

/// Identifies a semester. Orders chronologically by year, then by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemesterKey {
    pub year: u32,
    pub name: String,
}

impl SemesterKey {
    pub fn new(year: u32, name: impl Into<String>) -> Self {
        Self {
            year,
            name: name.into(),
        }
    }
}

impl fmt::Display for SemesterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year)
    }
}

/// A course result together with the course and semester it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub course_code: String,
    pub course_name: String,
    pub semester: SemesterKey,
    pub result: CourseResult,
}

/// One printed line of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRow {
    pub course_code: String,
    pub course_name: String,
    pub marks: f64,
    pub grade: Letter,
    pub points: f64,
    pub credit_hours: u32,
    pub status: CourseStatus,
}

impl From<&TranscriptRecord> for TranscriptRow {
    fn from(record: &TranscriptRecord) -> Self {
        let outcome = grade_for(record.result.mark);
        TranscriptRow {
            course_code: record.course_code.clone(),
            course_name: record.course_name.clone(),
            marks: record.result.mark.value(),
            grade: outcome.letter,
            points: outcome.points,
            credit_hours: record.result.credit_hours.get(),
            status: outcome.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSemester {
    pub semester: SemesterKey,
    pub rows: Vec<TranscriptRow>,
    pub summary: SemesterSummary,
}

/// A student's complete graded record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub student_id: String,
    pub semesters: Vec<TranscriptSemester>,
    pub cgpa: f64,
    pub credit_weighted_gpa: f64,
    pub total_credits: u64,
    pub standing: AcademicStanding,
}

impl Transcript {
    /// Builds a transcript from every record a student has.
    ///
    /// # Arguments
    ///
    /// * `student_id` - Opaque identifier of the student (e.g. registration number).
    /// * `records` - The student's results, in any order.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::DuplicateResult`] if the same course appears twice in one semester.
    pub fn build(
        student_id: impl Into<String>,
        records: &[TranscriptRecord],
    ) -> Result<Self, GradingError> {
        let student_id = student_id.into();

        let mut seen: HashSet<(&str, &SemesterKey)> = HashSet::new();
        let mut by_semester: BTreeMap<&SemesterKey, Vec<&TranscriptRecord>> = BTreeMap::new();
        for record in records {
            if !seen.insert((record.course_code.as_str(), &record.semester)) {
                return Err(GradingError::DuplicateResult {
                    course: record.course_code.clone(),
                    semester: record.semester.to_string(),
                });
            }
            by_semester.entry(&record.semester).or_default().push(record);
        }

        let mut semesters = Vec::with_capacity(by_semester.len());
        let mut semester_results: Vec<Vec<CourseResult>> = Vec::with_capacity(by_semester.len());

        for (key, mut entries) in by_semester {
            entries.sort_by(|a, b| a.course_code.cmp(&b.course_code));
            let results: Vec<CourseResult> = entries.iter().map(|r| r.result).collect();

            semesters.push(TranscriptSemester {
                semester: key.clone(),
                rows: entries.into_iter().map(TranscriptRow::from).collect(),
                summary: summarize_semester(&results),
            });
            semester_results.push(results);
        }

        let all_results: Vec<CourseResult> = semester_results.iter().flatten().copied().collect();
        let standing = academic_standing(&semester_results);

        debug!(
            "Built transcript for {}: {} semesters, cgpa {}",
            student_id,
            semesters.len(),
            standing.gpa
        );

        Ok(Transcript {
            student_id,
            semesters,
            cgpa: standing.gpa,
            credit_weighted_gpa: gpa_for(&all_results),
            total_credits: total_credits(&all_results),
            standing,
        })
    }

    /// Semester GPAs in chronological order.
    pub fn semester_gpas(&self) -> Vec<f64> {
        self.semesters.iter().map(|s| s.summary.gpa).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Classification;
    use serde_json::Value;

    fn record(code: &str, year: u32, semester: &str, mark: f64, hours: u32) -> TranscriptRecord {
        TranscriptRecord {
            course_code: code.to_string(),
            course_name: format!("{code} name"),
            semester: SemesterKey::new(year, semester),
            result: CourseResult::from_raw(mark, hours).unwrap(),
        }
    }

    #[test]
    fn test_transcript_orders_semesters_and_rows() {
        let records = vec![
            record("MA201", 2024, "Semester 1", 55.0, 3),
            record("CS101", 2023, "Semester 2", 81.0, 3),
            record("CS100", 2023, "Semester 2", 71.0, 3),
            record("CS090", 2023, "Semester 1", 66.0, 2),
        ];
        let transcript = Transcript::build("REG/1", &records).unwrap();

        let keys: Vec<String> = transcript
            .semesters
            .iter()
            .map(|s| s.semester.to_string())
            .collect();
        assert_eq!(
            keys,
            vec!["Semester 1 (2023)", "Semester 2 (2023)", "Semester 1 (2024)"]
        );
        let codes: Vec<&str> = transcript.semesters[1]
            .rows
            .iter()
            .map(|r| r.course_code.as_str())
            .collect();
        assert_eq!(codes, vec!["CS100", "CS101"]);
    }

    #[test]
    fn test_transcript_cumulative_figures() {
        let records = vec![
            // Semester GPA 3.0 over 3 credits.
            record("CS101", 2023, "Semester 1", 66.0, 3),
            // Semester GPA 4.0 over 6 credits.
            record("CS201", 2023, "Semester 2", 90.0, 3),
            record("CS202", 2023, "Semester 2", 85.0, 3),
        ];
        let transcript = Transcript::build("REG/2", &records).unwrap();

        assert_eq!(transcript.semester_gpas(), vec![3.0, 4.0]);
        assert_eq!(transcript.cgpa, 3.5);
        // (3.0 * 3 + 4.0 * 6) / 9 = 3.666...
        assert_eq!(transcript.credit_weighted_gpa, 3.67);
        assert_eq!(transcript.total_credits, 9);
        assert_eq!(transcript.standing.classification, Classification::Distinction);
        assert!(!transcript.standing.withdrawn);
    }

    #[test]
    fn test_transcript_rejects_duplicates() {
        let records = vec![
            record("CS101", 2023, "Semester 1", 66.0, 3),
            record("CS101", 2023, "Semester 1", 70.0, 3),
        ];
        let err = Transcript::build("REG/3", &records).unwrap_err();
        assert_eq!(
            err,
            GradingError::DuplicateResult {
                course: "CS101".to_string(),
                semester: "Semester 1 (2023)".to_string(),
            }
        );
    }

    #[test]
    fn test_same_course_in_different_semesters_is_allowed() {
        let records = vec![
            record("CS101", 2023, "Semester 1", 35.0, 3),
            record("CS101", 2023, "Semester 2", 70.0, 3),
        ];
        let transcript = Transcript::build("REG/4", &records).unwrap();
        assert_eq!(transcript.semesters.len(), 2);
        assert_eq!(transcript.semesters[0].rows[0].status, CourseStatus::Repeat);
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::build("REG/5", &[]).unwrap();
        assert!(transcript.is_empty());
        assert_eq!(transcript.cgpa, 0.0);
        assert_eq!(transcript.total_credits, 0);
    }

    #[test]
    fn test_transcript_with_maximal_credit_hours() {
        let records = vec![
            record("CS101", 2023, "Semester 1", 85.0, u32::MAX),
            record("CS102", 2023, "Semester 1", 90.0, u32::MAX),
        ];
        let transcript = Transcript::build("REG/6", &records).unwrap();
        assert_eq!(transcript.total_credits, 2 * u32::MAX as u64);
        assert_eq!(transcript.cgpa, 4.0);
    }

    #[test]
    fn test_transcript_serialization() {
        let records = vec![record("CS101", 2023, "Semester 1", 82.0, 3)];
        let transcript = Transcript::build("CS/001/2023", &records).unwrap();
        let value: Value = serde_json::to_value(&transcript).unwrap();

        assert_eq!(value["student_id"], "CS/001/2023");
        assert_eq!(value["semesters"][0]["semester"]["year"], 2023);
        assert_eq!(value["semesters"][0]["rows"][0]["grade"], "A");
        assert_eq!(value["semesters"][0]["rows"][0]["points"], 4.0);
        assert_eq!(value["semesters"][0]["rows"][0]["status"], "PASS");
        assert_eq!(value["semesters"][0]["summary"]["classification"], "Distinction");
        assert_eq!(value["semesters"][0]["summary"]["standing"], "ACTIVE");
        assert_eq!(value["semesters"][0]["summary"]["message"], "passed");
        assert_eq!(value["standing"]["withdrawn"], false);
    }
}
