//! Reference letter-frequency profiles used for shift scoring

use crate::alphabet::SIZE;
use crate::error::{AnalysisError, Result};

/// Expected percentage frequency of each letter in ordinary prose of one language.
///
/// Entries are index-aligned with [`crate::alphabet::LETTERS`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceProfile {
    name: &'static str,
    percentages: [f64; SIZE],
}

impl ReferenceProfile {
    /// English letter frequencies in percent.
    pub const ENGLISH: ReferenceProfile = ReferenceProfile {
        name: "english",
        percentages: [
            8.15, 1.44, 2.76, 3.79, 13.11, 2.92, 1.99, 5.26, 6.35, 0.13, 0.42, 3.39, 2.54,
            7.10, 8.00, 1.98, 0.12, 6.83, 6.10, 10.47, 2.46, 0.92, 1.54, 0.17, 1.98, 0.08,
        ],
    };

    /// German letter frequencies in percent.
    pub const GERMAN: ReferenceProfile = ReferenceProfile {
        name: "german",
        percentages: [
            5.58, 1.96, 3.16, 4.98, 16.93, 1.49, 3.02, 4.98, 8.02, 0.24, 1.32, 3.60, 2.55,
            10.53, 2.24, 0.67, 0.02, 6.89, 6.42, 5.79, 3.83, 0.84, 1.78, 0.05, 0.05, 1.21,
        ],
    };

    /// Builds a custom profile.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidArgument`] if any entry is negative or not finite.
    pub fn new(name: &'static str, percentages: [f64; SIZE]) -> Result<Self> {
        if let Some(bad) = percentages.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(AnalysisError::InvalidArgument(format!(
                "profile '{}' contains invalid frequency {}",
                name, bad
            )));
        }

        Ok(Self { name, percentages })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Expected percentage of the letter with index `letter`.
    pub fn percentage(&self, letter: usize) -> f64 {
        self.percentages[letter % SIZE]
    }

    pub fn percentages(&self) -> &[f64; SIZE] {
        &self.percentages
    }
}

impl Default for ReferenceProfile {
    fn default() -> Self {
        Self::ENGLISH
    }
}
