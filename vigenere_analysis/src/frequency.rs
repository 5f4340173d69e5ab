//! Letter frequency analysis
//!
//! All functions here accept letters only. Any other character, including
//! whitespace and punctuation, fails with [`AnalysisError::DomainViolation`];
//! callers that want to analyse free text must strip it first.

use crate::alphabet::{self, LETTERS, SIZE};
use crate::error::{AnalysisError, Result};

/// Relative frequency of each letter within a text fragment.
///
/// Entries sum to 1.0 (up to floating point error).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyVector([f64; SIZE]);

impl FrequencyVector {
    /// Frequency of the letter with index `letter`, wrapping past `z`.
    pub fn get(&self, letter: usize) -> f64 {
        self.0[letter % SIZE]
    }

    pub fn as_array(&self) -> &[f64; SIZE] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Percentage of each letter in a text, for judging by eye whether a
/// distribution is peaked (monoalphabetic) or flat (polyalphabetic).
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageReport {
    percentages: [f64; SIZE],
}

impl PercentageReport {
    /// Percentage for `letter` (either case), `None` for non-letters.
    pub fn get(&self, letter: char) -> Option<f64> {
        alphabet::index_of(letter).map(|i| self.percentages[i])
    }

    /// `(letter, percentage)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        LETTERS.iter().copied().zip(self.percentages.iter().copied())
    }
}

/// Counts occurrences of each letter, case-insensitively.
///
/// # Errors
///
/// Returns [`AnalysisError::DomainViolation`] for the first non-letter found.
pub fn letter_counts(text: &str) -> Result<[usize; SIZE]> {
    let mut counts = [0usize; SIZE];

    for (position, character) in text.chars().enumerate() {
        let index = alphabet::index_of(character)
            .ok_or(AnalysisError::DomainViolation { character, position })?;
        counts[index] += 1;
    }

    Ok(counts)
}

/// Computes the relative frequency vector of `text`.
///
/// # Errors
///
/// * [`AnalysisError::InvalidArgument`] if `text` is empty.
/// * [`AnalysisError::DomainViolation`] if `text` contains a non-letter.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::frequency::relative_frequency;
///
/// let freq = relative_frequency("abba").unwrap();
/// assert_eq!(freq.get(0), 0.5);
/// assert_eq!(freq.get(1), 0.5);
/// ```
pub fn relative_frequency(text: &str) -> Result<FrequencyVector> {
    let counts = letter_counts(text)?;
    let total: usize = counts.iter().sum();

    if total == 0 {
        return Err(AnalysisError::InvalidArgument(
            "cannot compute frequencies of an empty text".to_string(),
        ));
    }

    let mut frequencies = [0.0; SIZE];
    for (freq, &count) in frequencies.iter_mut().zip(counts.iter()) {
        *freq = count as f64 / total as f64;
    }

    Ok(FrequencyVector(frequencies))
}

/// Computes the percentage of each letter in `text`.
///
/// Same rules as [`relative_frequency`], scaled by 100.
pub fn percentage_report(text: &str) -> Result<PercentageReport> {
    let frequencies = relative_frequency(text)?;

    let mut percentages = [0.0; SIZE];
    for (pct, freq) in percentages.iter_mut().zip(frequencies.iter()) {
        *pct = freq * 100.0;
    }

    Ok(PercentageReport { percentages })
}

/// Friedman index of coincidence of a text: the probability that two letters
/// drawn without replacement are equal.
///
/// English prose under a monoalphabetic cipher stays near 0.066, a
/// polyalphabetic cipher pushes it towards 0.038.
///
/// # Errors
///
/// * [`AnalysisError::InvalidArgument`] if `text` has fewer than two letters.
/// * [`AnalysisError::DomainViolation`] if `text` contains a non-letter.
pub fn index_of_coincidence(text: &str) -> Result<f64> {
    let counts = letter_counts(text)?;
    let total: usize = counts.iter().sum();

    if total < 2 {
        return Err(AnalysisError::InvalidArgument(format!(
            "index of coincidence needs at least 2 letters, got {}",
            total
        )));
    }

    let numerator: usize = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    let denominator = total * (total - 1);

    Ok(numerator as f64 / denominator as f64)
}
