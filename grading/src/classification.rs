//! GPA classification tiers.
//!
//! | gpa ≥ | classification |
//! |-------|----------------|
//! | 3.5   | Distinction    |
//! | 3.0   | Upper Credit   |
//! | 2.5   | Lower Credit   |
//! | 1.5   | Average        |
//! | 1.0   | Pass           |
//! | below | Fail           |

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    Distinction,
    #[serde(rename = "Upper Credit")]
    UpperCredit,
    #[serde(rename = "Lower Credit")]
    LowerCredit,
    Average,
    Pass,
    Fail,
}

impl Classification {
    /// All tiers, best first.
    pub const ALL: [Classification; 6] = [
        Classification::Distinction,
        Classification::UpperCredit,
        Classification::LowerCredit,
        Classification::Average,
        Classification::Pass,
        Classification::Fail,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Classification::Distinction => "Distinction",
            Classification::UpperCredit => "Upper Credit",
            Classification::LowerCredit => "Lower Credit",
            Classification::Average => "Average",
            Classification::Pass => "Pass",
            Classification::Fail => "Fail",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const TIERS: [(f64, Classification); 5] = [
    (3.5, Classification::Distinction),
    (3.0, Classification::UpperCredit),
    (2.5, Classification::LowerCredit),
    (1.5, Classification::Average),
    (1.0, Classification::Pass),
];

/// Classifies a GPA. Total over `f64`: anything below 1.0, including `NaN`, is [`Classification::Fail`].
///
/// A GPA of exactly 1.0 is a `Pass`.
pub fn classify(gpa: f64) -> Classification {
    TIERS
        .iter()
        .find(|(threshold, _)| gpa >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(Classification::Fail)
}
