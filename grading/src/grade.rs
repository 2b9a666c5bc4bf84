//! # Grade Mapper
//!
//! Maps a single [`Mark`] to its letter grade, grade points and course status.
//!
//! | mark ≥ | letter | points | status                  |
//! |--------|--------|--------|-------------------------|
//! | 80     | A      | 4.0    | PASS                    |
//! | 70     | B+     | 3.5    | PASS                    |
//! | 65     | B      | 3.0    | PASS                    |
//! | 50     | C      | 2.0    | PASS                    |
//! | 40     | D      | 1.0    | PASS                    |
//! | 30     | E1     | 0.0    | REPEAT                  |
//! | 0      | E2     | 0.0    | UNSUPPLEMENTABLE_FAIL   |
//!
//! Lower bounds are inclusive. This table is the only place grade thresholds live; every other
//! part of the workspace derives letters, points and statuses from [`grade_for`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GradingError;
use crate::types::Mark;

/// Letter grades, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
    E1,
    E2,
}

impl Letter {
    /// Grade points expressed in half points. Every grade point value is a multiple of 0.5, so
    /// aggregation can stay in integers.
    pub(crate) fn half_points(self) -> u64 {
        match self {
            Letter::A => 8,
            Letter::BPlus => 7,
            Letter::B => 6,
            Letter::C => 4,
            Letter::D => 2,
            Letter::E1 | Letter::E2 => 0,
        }
    }

    pub fn points(self) -> f64 {
        self.half_points() as f64 / 2.0
    }

    pub fn status(self) -> CourseStatus {
        match self {
            Letter::E1 => CourseStatus::Repeat,
            Letter::E2 => CourseStatus::UnsupplementableFail,
            _ => CourseStatus::Pass,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::BPlus => "B+",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E1 => "E1",
            Letter::E2 => "E2",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    /// Passed; counts towards the semester.
    Pass,
    /// Failed with 30-39; the course may be repeated.
    Repeat,
    /// Failed below 30; forces withdrawal for the period.
    UnsupplementableFail,
}

impl CourseStatus {
    /// Human-readable label as shown on result slips.
    pub fn label(self) -> &'static str {
        match self {
            CourseStatus::Pass => "PASS",
            CourseStatus::Repeat => "REPEAT COURSE",
            CourseStatus::UnsupplementableFail => "UNSUPPLEMENTABLE FAIL",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The letter, points and status derived from one mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeOutcome {
    pub letter: Letter,
    pub points: f64,
    pub status: CourseStatus,
}

impl GradeOutcome {
    fn from_letter(letter: Letter) -> Self {
        Self {
            letter,
            points: letter.points(),
            status: letter.status(),
        }
    }

    /// Points rendered with one decimal place, e.g. `"3.5"` or `"0.0"`.
    pub fn points_label(&self) -> String {
        format!("{:.1}", self.points)
    }
}

impl From<Letter> for GradeOutcome {
    fn from(letter: Letter) -> Self {
        GradeOutcome::from_letter(letter)
    }
}

/// Inclusive lower bounds, highest first.
const BRACKETS: [(f64, Letter); 7] = [
    (80.0, Letter::A),
    (70.0, Letter::BPlus),
    (65.0, Letter::B),
    (50.0, Letter::C),
    (40.0, Letter::D),
    (30.0, Letter::E1),
    (0.0, Letter::E2),
];

/// Maps a validated mark to its [`GradeOutcome`].
///
/// Total over every [`Mark`]: the last bracket starts at zero, which is the smallest mark that
/// can be constructed.
///
/// # Example
///
/// ```
/// use grading::grade::{grade_for, Letter, CourseStatus};
/// use grading::types::Mark;
///
/// let outcome = grade_for(Mark::new(79.9).unwrap());
/// assert_eq!(outcome.letter, Letter::BPlus);
/// assert_eq!(outcome.points, 3.5);
/// assert_eq!(outcome.status, CourseStatus::Pass);
/// ```
pub fn grade_for(mark: Mark) -> GradeOutcome {
    let value = mark.value();
    let letter = BRACKETS
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, letter)| *letter)
        .unwrap_or(Letter::E2);
    GradeOutcome::from_letter(letter)
}

/// Validates a raw mark and grades it.
pub fn grade_for_value(mark: f64) -> Result<GradeOutcome, GradingError> {
    Ok(grade_for(Mark::new(mark)?))
}
