//! Cohort-level analytics for staff dashboards: top performers, students at risk, the spread of
//! classifications and per-course performance.
//!
//! Everything here works on already-computed GPAs or on validated marks; it never looks up data.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::classification::{Classification, classify};
use crate::grade::{CourseStatus, grade_for};
use crate::scorer::round2;
use crate::types::Mark;

/// Default GPA below which a student is flagged as at risk.
pub const DEFAULT_AT_RISK_GPA: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGpa {
    pub student_id: String,
    pub gpa: f64,
}

impl StudentGpa {
    pub fn new(student_id: impl Into<String>, gpa: f64) -> Self {
        Self {
            student_id: student_id.into(),
            gpa,
        }
    }
}

fn by_gpa_desc(a: &StudentGpa, b: &StudentGpa) -> Ordering {
    b.gpa
        .total_cmp(&a.gpa)
        .then_with(|| a.student_id.cmp(&b.student_id))
}

/// The `n` highest GPAs, best first. Ties are broken by student id.
pub fn top_students(gpas: &[StudentGpa], n: usize) -> Vec<StudentGpa> {
    let mut sorted = gpas.to_vec();
    sorted.sort_by(by_gpa_desc);
    sorted.truncate(n);
    sorted
}

/// Students strictly below `threshold`, lowest GPA first.
pub fn at_risk(gpas: &[StudentGpa], threshold: f64) -> Vec<StudentGpa> {
    let mut flagged: Vec<StudentGpa> = gpas.iter().filter(|s| s.gpa < threshold).cloned().collect();
    flagged.sort_by(|a, b| {
        a.gpa
            .total_cmp(&b.gpa)
            .then_with(|| a.student_id.cmp(&b.student_id))
    });
    flagged
}

/// Number of students per classification tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDistribution {
    pub distinction: usize,
    pub upper_credit: usize,
    pub lower_credit: usize,
    pub average: usize,
    pub pass: usize,
    pub fail: usize,
}

impl ClassificationDistribution {
    pub fn from_gpas(gpas: &[StudentGpa]) -> Self {
        let mut dist = Self::default();
        for student in gpas {
            dist.record(classify(student.gpa));
        }
        dist
    }

    fn record(&mut self, tier: Classification) {
        let slot = match tier {
            Classification::Distinction => &mut self.distinction,
            Classification::UpperCredit => &mut self.upper_credit,
            Classification::LowerCredit => &mut self.lower_credit,
            Classification::Average => &mut self.average,
            Classification::Pass => &mut self.pass,
            Classification::Fail => &mut self.fail,
        };
        *slot += 1;
    }

    pub fn count(&self, tier: Classification) -> usize {
        match tier {
            Classification::Distinction => self.distinction,
            Classification::UpperCredit => self.upper_credit,
            Classification::LowerCredit => self.lower_credit,
            Classification::Average => self.average,
            Classification::Pass => self.pass,
            Classification::Fail => self.fail,
        }
    }

    pub fn total(&self) -> usize {
        Classification::ALL.iter().map(|t| self.count(*t)).sum()
    }
}

/// A single mark attributed to a course, as fed to [`course_performance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMark {
    pub course_code: String,
    pub mark: Mark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseStats {
    pub course_code: String,
    pub total_students: usize,
    pub average_mark: f64,
    pub median_mark: f64,
    /// Percentage of results with a `PASS` outcome.
    pub pass_rate: f64,
}

impl CourseStats {
    /// Figures for a course nobody has a result in.
    pub fn empty(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            total_students: 0,
            average_mark: 0.0,
            median_mark: 0.0,
            pass_rate: 0.0,
        }
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn median(xs: &mut [f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(|a, b| a.total_cmp(b));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        (xs[n / 2 - 1] + xs[n / 2]) / 2.0
    }
}

/// Per-course statistics, ordered by course code.
///
/// Every code in `courses` is listed even without marks, with zero students and zero figures.
/// Codes that only appear in `marks` are listed too.
pub fn course_performance<S: AsRef<str>>(
    courses: &[S],
    marks: &[CourseMark],
) -> Vec<CourseStats> {
    let mut per_course: BTreeMap<&str, Vec<Mark>> = courses
        .iter()
        .map(|code| (code.as_ref(), Vec::new()))
        .collect();
    for entry in marks {
        per_course
            .entry(entry.course_code.as_str())
            .or_default()
            .push(entry.mark);
    }

    per_course
        .into_iter()
        .map(|(code, course_marks)| {
            if course_marks.is_empty() {
                return CourseStats::empty(code);
            }
            let mut values: Vec<f64> = course_marks.iter().map(|m| m.value()).collect();
            let passed = course_marks
                .iter()
                .filter(|m| grade_for(**m).status == CourseStatus::Pass)
                .count();
            CourseStats {
                course_code: code.to_string(),
                total_students: course_marks.len(),
                average_mark: round2(mean(&values)),
                median_mark: round2(median(&mut values)),
                pass_rate: round2(passed as f64 * 100.0 / course_marks.len() as f64),
            }
        })
        .collect()
}
