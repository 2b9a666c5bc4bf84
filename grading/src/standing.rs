//! # Standing Module
//!
//! Withdrawal rules and the per-semester and cross-semester summaries built on top of them.
//!
//! A student is withdrawn for a period when their GPA falls below 1.0, or when any course in the
//! period ends in an unsupplementable fail (mark below 30), whatever the GPA. Nothing here is
//! cached: every summary is recomputed from the results it is handed.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classification::{Classification, classify};
use crate::grade::{CourseStatus, grade_for};
use crate::scorer::{gpa_for, gpa_hundredths, mean_of_hundredths, total_credits};
use crate::types::CourseResult;

/// GPA below which a student is withdrawn.
pub const WITHDRAWAL_GPA: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Standing {
    Active,
    Withdrawn,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standing::Active => f.write_str("Active"),
            Standing::Withdrawn => f.write_str("Withdrawn"),
        }
    }
}

fn has_status(results: &[CourseResult], status: CourseStatus) -> bool {
    results.iter().any(|r| grade_for(r.mark).status == status)
}

/// Determines the standing for a period from its GPA and its results.
///
/// # Arguments
///
/// * `gpa` - The GPA of the period (semester GPA or CGPA).
/// * `results` - Every course result of the period.
///
/// # Returns
///
/// [`Standing::Withdrawn`] if `gpa < 1.0` or any result is an unsupplementable fail, otherwise
/// [`Standing::Active`].
pub fn standing(gpa: f64, results: &[CourseResult]) -> Standing {
    if gpa < WITHDRAWAL_GPA || has_status(results, CourseStatus::UnsupplementableFail) {
        Standing::Withdrawn
    } else {
        Standing::Active
    }
}

/// The message printed on a semester result slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultMessage {
    Withdrawn,
    WithdrawnUnsupplementable,
    RepeatRequired,
    Passed,
}

impl ResultMessage {
    pub fn text(self) -> &'static str {
        match self {
            ResultMessage::Withdrawn => "Withdrawn due to GPA below threshold.",
            ResultMessage::WithdrawnUnsupplementable => {
                "Withdrawn due to an unsupplementable fail."
            }
            ResultMessage::RepeatRequired => "You must repeat the course(s) listed.",
            ResultMessage::Passed => {
                "Congratulations, you have successfully passed this semester!"
            }
        }
    }
}

impl fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Picks the slip message for a period. Agrees with [`standing`] on every input.
pub fn result_message(gpa: f64, results: &[CourseResult]) -> ResultMessage {
    if gpa < WITHDRAWAL_GPA {
        ResultMessage::Withdrawn
    } else if has_status(results, CourseStatus::UnsupplementableFail) {
        ResultMessage::WithdrawnUnsupplementable
    } else if has_status(results, CourseStatus::Repeat) {
        ResultMessage::RepeatRequired
    } else {
        ResultMessage::Passed
    }
}

/// Everything derived from one student's results in one semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSummary {
    pub gpa: f64,
    pub classification: Classification,
    pub standing: Standing,
    pub total_credits: u64,
    pub message: ResultMessage,
}

/// Builds the [`SemesterSummary`] for one semester's results.
///
/// An empty semester has GPA `0.0` and therefore classifies as `Fail` and stands `Withdrawn`;
/// `total_credits == 0` is how callers recognise that case.
pub fn summarize_semester(results: &[CourseResult]) -> SemesterSummary {
    let gpa = gpa_for(results);
    let summary = SemesterSummary {
        gpa,
        classification: classify(gpa),
        standing: standing(gpa, results),
        total_credits: total_credits(results),
        message: result_message(gpa, results),
    };
    debug!(
        "Semester summary: {} courses, gpa {}, {}",
        results.len(),
        gpa,
        summary.standing
    );
    summary
}

/// Standing across several semesters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicStanding {
    /// The CGPA: mean of the per-semester GPAs.
    pub gpa: f64,
    pub classification: Classification,
    pub withdrawn: bool,
}

/// Aggregates several semesters into an [`AcademicStanding`].
///
/// The CGPA is the mean of each semester's GPA, as [`crate::scorer::cgpa_for`] computes it, but
/// taken from the exact semester hundredths so it cannot fail. The withdrawal rule is applied
/// to the CGPA and to every result from every semester.
pub fn academic_standing<S: AsRef<[CourseResult]>>(semesters: &[S]) -> AcademicStanding {
    let semester_gpas: Vec<i128> = semesters
        .iter()
        .map(|s| gpa_hundredths(s.as_ref()))
        .collect();
    let cgpa = mean_of_hundredths(&semester_gpas);

    let all_results: Vec<CourseResult> = semesters
        .iter()
        .flat_map(|s| s.as_ref().iter().copied())
        .collect();

    AcademicStanding {
        gpa: cgpa,
        classification: classify(cgpa),
        withdrawn: standing(cgpa, &all_results) == Standing::Withdrawn,
    }
}
