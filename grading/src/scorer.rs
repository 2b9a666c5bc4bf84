//! # Scorer Module
//!
//! This module aggregates graded courses into a semester GPA and semester GPAs into a CGPA.
//!
//! Both aggregations round to two decimal places, half up. The GPA path never touches floating
//! point until the final division: grade points are whole half-points and credit hours are whole
//! numbers, so totals are summed as integers and rounded once. That keeps the GPA independent of
//! the order results are supplied in.

use crate::error::GradingError;
use crate::grade::grade_for;
use crate::types::CourseResult;

/// Highest GPA any set of results can produce.
pub const MAX_GPA: f64 = 4.0;

/// Rounds `numerator / denominator` to hundredths, half away from zero.
///
/// Returns 0 for a zero denominator.
fn ratio_to_hundredths(numerator: i128, denominator: i128) -> i128 {
    if denominator == 0 {
        return 0;
    }
    let (n, d) = if denominator < 0 {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };
    if n >= 0 {
        (n * 200 + d) / (d * 2)
    } else {
        -((-n * 200 + d) / (d * 2))
    }
}

fn from_hundredths(hundredths: i128) -> f64 {
    hundredths as f64 / 100.0
}

/// Round a float to two decimal places.
///
/// Used for averages of raw marks, where the inputs are already floating point.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Renders a GPA with exactly two decimals, e.g. `"2.50"`.
pub fn format_gpa(gpa: f64) -> String {
    format!("{:.2}", gpa)
}

/// Computes the credit-weighted GPA of a set of course results.
///
/// Each result contributes `points * credit_hours`; the sum is divided by the total credit hours
/// and rounded to two decimals.
///
/// # Returns
///
/// - The GPA in `[0.0, 4.0]`.
/// - `0.0` when `results` is empty. This is a defined degenerate case, not an error: callers that
///   need to tell "no results yet" apart from a failing GPA must check for emptiness themselves.
///
/// # Example
///
/// ```
/// use grading::scorer::gpa_for;
/// use grading::types::CourseResult;
///
/// let results = vec![
///     CourseResult::from_raw(80.0, 3).unwrap(), // A, 4.0
///     CourseResult::from_raw(40.0, 3).unwrap(), // D, 1.0
/// ];
/// assert_eq!(gpa_for(&results), 2.5);
/// assert_eq!(gpa_for(&[]), 0.0);
/// ```
pub fn gpa_for(results: &[CourseResult]) -> f64 {
    from_hundredths(gpa_hundredths(results))
}

/// The GPA of `results` in hundredths, exactly as [`gpa_for`] rounds it.
pub(crate) fn gpa_hundredths(results: &[CourseResult]) -> i128 {
    let (half_points, credits) = weighted_totals(results);
    ratio_to_hundredths(half_points as i128, 2 * credits as i128)
}

/// Sum of `half_points * credit_hours` and sum of credit hours.
pub(crate) fn weighted_totals(results: &[CourseResult]) -> (u64, u64) {
    results.iter().fold((0u64, 0u64), |(points, credits), r| {
        let hours = r.credit_hours.get() as u64;
        (
            points + grade_for(r.mark).letter.half_points() * hours,
            credits + hours,
        )
    })
}

/// Total credit hours of a set of results.
pub fn total_credits(results: &[CourseResult]) -> u64 {
    results.iter().map(|r| r.credit_hours.get() as u64).sum()
}

/// Mean of semester GPAs given in hundredths, rounded to two decimals. Empty yields `0.0`.
pub(crate) fn mean_of_hundredths(semester_hundredths: &[i128]) -> f64 {
    let total: i128 = semester_hundredths.iter().sum();
    from_hundredths(ratio_to_hundredths(
        total,
        100 * semester_hundredths.len() as i128,
    ))
}

/// Computes the CGPA as the plain mean of per-semester GPAs, rounded to two decimals.
///
/// Each semester GPA is taken at its two-decimal value (as produced by [`gpa_for`]) before
/// averaging. Semesters are not weighted by credit load. An empty slice yields `0.0`.
///
/// # Errors
///
/// Returns [`GradingError::InvalidGpa`] for a GPA that is not finite or lies outside
/// `[0.0, MAX_GPA]`.
///
/// # Example
///
/// ```
/// use grading::scorer::cgpa_for;
///
/// assert_eq!(cgpa_for(&[3.0, 4.0]), Ok(3.5));
/// assert_eq!(cgpa_for(&[]), Ok(0.0));
/// assert!(cgpa_for(&[f64::NAN]).is_err());
/// ```
pub fn cgpa_for(semester_gpas: &[f64]) -> Result<f64, GradingError> {
    let hundredths = semester_gpas
        .iter()
        .map(|&gpa| {
            if gpa.is_finite() && (0.0..=MAX_GPA).contains(&gpa) {
                Ok((gpa * 100.0).round() as i128)
            } else {
                Err(GradingError::InvalidGpa(gpa))
            }
        })
        .collect::<Result<Vec<i128>, GradingError>>()?;
    Ok(mean_of_hundredths(&hundredths))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(mark: f64, hours: u32) -> CourseResult {
        CourseResult::from_raw(mark, hours).unwrap()
    }

    #[test]
    fn test_gpa_empty_is_zero() {
        assert_eq!(gpa_for(&[]), 0.0);
    }

    #[test]
    fn test_gpa_basic_weighting() {
        let results = vec![result(80.0, 3), result(40.0, 3)];
        assert_eq!(gpa_for(&results), 2.5);
    }

    #[test]
    fn test_gpa_uneven_credits() {
        // (4.0 * 4 + 3.5 * 3 + 2.0 * 2) / 9 = 30.5 / 9 = 3.3888...
        let results = vec![result(90.0, 4), result(72.0, 3), result(55.0, 2)];
        assert_eq!(gpa_for(&results), 3.39);
    }

    #[test]
    fn test_gpa_rounds_half_up() {
        // (3.5 * 1 + 3.0 * 1 + 3.0 * 2) / 4 = 12.5 / 4 = 3.125 -> 3.13
        let results = vec![result(75.0, 1), result(66.0, 1), result(66.0, 2)];
        assert_eq!(gpa_for(&results), 3.13);
    }

    #[test]
    fn test_gpa_order_independent() {
        let forward = vec![
            result(81.0, 3),
            result(45.0, 2),
            result(67.0, 4),
            result(33.0, 1),
            result(71.0, 3),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(gpa_for(&forward), gpa_for(&reversed));
    }

    #[test]
    fn test_gpa_idempotent() {
        let results = vec![result(58.0, 3), result(77.0, 2)];
        let first = gpa_for(&results);
        let second = gpa_for(&results);
        assert_eq!(first, second);
    }

    #[test]
    fn test_gpa_all_failing() {
        let results = vec![result(10.0, 3), result(35.0, 3)];
        assert_eq!(gpa_for(&results), 0.0);
    }

    #[test]
    fn test_cgpa_mean() {
        assert_eq!(cgpa_for(&[3.0, 4.0]), Ok(3.5));
        assert_eq!(cgpa_for(&[2.5]), Ok(2.5));
        // (3.33 + 2.67 + 3.01) / 3 = 3.0033...
        assert_eq!(cgpa_for(&[3.33, 2.67, 3.01]), Ok(3.0));
    }

    #[test]
    fn test_cgpa_rounds_half_up() {
        // (3.01 + 3.0) / 2 = 3.005 -> 3.01
        assert_eq!(cgpa_for(&[3.01, 3.0]), Ok(3.01));
    }

    #[test]
    fn test_cgpa_empty_is_zero() {
        assert_eq!(cgpa_for(&[]), Ok(0.0));
    }

    #[test]
    fn test_cgpa_rejects_non_finite_gpas() {
        assert!(matches!(
            cgpa_for(&[f64::NAN, 4.0]),
            Err(GradingError::InvalidGpa(g)) if g.is_nan()
        ));
        assert_eq!(
            cgpa_for(&[f64::INFINITY]),
            Err(GradingError::InvalidGpa(f64::INFINITY))
        );
        assert_eq!(
            cgpa_for(&[3.0, f64::NEG_INFINITY]),
            Err(GradingError::InvalidGpa(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_cgpa_rejects_out_of_range_gpas() {
        assert_eq!(cgpa_for(&[4.01]), Err(GradingError::InvalidGpa(4.01)));
        assert_eq!(cgpa_for(&[-0.5]), Err(GradingError::InvalidGpa(-0.5)));
        assert_eq!(cgpa_for(&[0.0, 4.0]), Ok(2.0));
    }

    #[test]
    fn test_mean_of_hundredths_matches_cgpa() {
        let gpas: [f64; 3] = [3.33, 2.67, 3.01];
        let hundredths: Vec<i128> = gpas.iter().map(|g| (g * 100.0).round() as i128).collect();
        assert_eq!(Ok(mean_of_hundredths(&hundredths)), cgpa_for(&gpas));
        assert_eq!(mean_of_hundredths(&[]), 0.0);
    }

    #[test]
    fn test_ratio_to_hundredths() {
        assert_eq!(ratio_to_hundredths(1, 3), 33);
        assert_eq!(ratio_to_hundredths(2, 3), 67);
        assert_eq!(ratio_to_hundredths(1, 8), 13);
        assert_eq!(ratio_to_hundredths(-1, 8), -13);
        assert_eq!(ratio_to_hundredths(5, 0), 0);
    }

    #[test]
    fn test_round2_and_format() {
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(format_gpa(2.5), "2.50");
        assert_eq!(format_gpa(0.0), "0.00");
    }

    #[test]
    fn test_total_credits() {
        assert_eq!(total_credits(&[result(50.0, 3), result(60.0, 4)]), 7);
        assert_eq!(total_credits(&[]), 0);
    }

    #[test]
    fn test_large_credit_hours_do_not_overflow() {
        let big = result(85.0, u32::MAX);
        assert_eq!(total_credits(&[big, big]), 2 * u32::MAX as u64);
        assert_eq!(gpa_for(&[big, big]), 4.0);
    }
}
