//! # Types Module
//!
//! This module defines the validated input types consumed by the grading engine.
//! A [`CourseResult`] is one student's performance in one course for one semester; it can only be
//! built from a [`Mark`] and [`CreditHours`] that already passed validation, so every function in
//! the engine can treat its inputs as well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GradingError;

/// Lowest mark accepted by the engine.
pub const MIN_MARK: f64 = 0.0;
/// Highest mark accepted by the engine.
pub const MAX_MARK: f64 = 100.0;

/// A raw course mark in `[0, 100]`.
///
/// Marks may carry decimals (`79.9` is a legal mark). Values outside the range, as well as `NaN`
/// and infinities, are rejected with [`GradingError::InvalidMark`]; the engine never clamps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Mark(f64);

impl Mark {
    /// Validates `value` and wraps it.
    pub fn new(value: f64) -> Result<Self, GradingError> {
        if value.is_finite() && (MIN_MARK..=MAX_MARK).contains(&value) {
            Ok(Mark(value))
        } else {
            Err(GradingError::InvalidMark(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Mark {
    type Error = GradingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Mark::new(value)
    }
}

impl From<Mark> for f64 {
    fn from(mark: Mark) -> Self {
        mark.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The weight of a course in GPA aggregation. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CreditHours(u32);

impl CreditHours {
    pub fn new(hours: u32) -> Result<Self, GradingError> {
        if hours == 0 {
            return Err(GradingError::InvalidCreditHours(0));
        }
        Ok(CreditHours(hours))
    }

    /// Validates a signed value, as delivered by loosely typed sources such as form fields.
    pub fn from_signed(hours: i64) -> Result<Self, GradingError> {
        match u32::try_from(hours) {
            Ok(h) if h > 0 => Ok(CreditHours(h)),
            _ => Err(GradingError::InvalidCreditHours(hours)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CreditHours {
    type Error = GradingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        CreditHours::new(value)
    }
}

impl From<CreditHours> for u32 {
    fn from(hours: CreditHours) -> Self {
        hours.0
    }
}

/// One student's result in one course for one semester.
///
/// This is the only input the aggregation functions accept. It carries no identity: callers that
/// need to know which course or semester a result belongs to keep that alongside it (see
/// [`crate::report::TranscriptRecord`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseResult {
    pub mark: Mark,
    pub credit_hours: CreditHours,
}

impl CourseResult {
    pub fn new(mark: Mark, credit_hours: CreditHours) -> Self {
        Self { mark, credit_hours }
    }

    /// Builds a result from unvalidated numbers, rejecting bad marks and credit hours.
    pub fn from_raw(mark: f64, credit_hours: u32) -> Result<Self, GradingError> {
        Ok(Self {
            mark: Mark::new(mark)?,
            credit_hours: CreditHours::new(credit_hours)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_accepts_range_bounds() {
        assert_eq!(Mark::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Mark::new(100.0).unwrap().value(), 100.0);
        assert_eq!(Mark::new(79.9).unwrap().value(), 79.9);
    }

    #[test]
    fn test_mark_rejects_out_of_range() {
        assert_eq!(Mark::new(-0.1), Err(GradingError::InvalidMark(-0.1)));
        assert_eq!(Mark::new(100.5), Err(GradingError::InvalidMark(100.5)));
    }

    #[test]
    fn test_mark_rejects_non_finite() {
        assert!(Mark::new(f64::NAN).is_err());
        assert!(Mark::new(f64::INFINITY).is_err());
        assert!(Mark::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_credit_hours_rejects_zero_and_negative() {
        assert_eq!(CreditHours::new(0), Err(GradingError::InvalidCreditHours(0)));
        assert_eq!(
            CreditHours::from_signed(-3),
            Err(GradingError::InvalidCreditHours(-3))
        );
        assert_eq!(CreditHours::from_signed(4).unwrap().get(), 4);
    }

    #[test]
    fn test_course_result_from_raw() {
        let result = CourseResult::from_raw(65.0, 3).unwrap();
        assert_eq!(result.mark.value(), 65.0);
        assert_eq!(result.credit_hours.get(), 3);
        assert!(CourseResult::from_raw(65.0, 0).is_err());
        assert!(CourseResult::from_raw(-1.0, 3).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CourseResult =
            serde_json::from_str(r#"{"mark": 55.5, "credit_hours": 2}"#).unwrap();
        assert_eq!(ok.mark.value(), 55.5);

        let bad_mark = serde_json::from_str::<CourseResult>(r#"{"mark": 120, "credit_hours": 2}"#);
        assert!(bad_mark.is_err());

        let bad_hours = serde_json::from_str::<CourseResult>(r#"{"mark": 50, "credit_hours": 0}"#);
        assert!(bad_hours.is_err());
    }
}
