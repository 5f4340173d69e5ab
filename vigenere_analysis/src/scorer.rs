//! Shift scoring against a reference language profile
//!
//! For every subsequence of a decomposition and every candidate shift `j`,
//! the subsequence's frequency vector rotated by `j` is correlated with the
//! reference profile:
//!
//! ```text
//! score(i, j) = Σ_k f_i[(k + j) mod 26] * reference[k]
//! ```
//!
//! If column `i` was enciphered with shift `j`, undoing `j` lines its letter
//! distribution up with the language again and the score peaks. Scores are
//! not normalised and carry no calibrated confidence.

use log::{debug, trace};

use crate::alphabet::SIZE;
use crate::cipher::Key;
use crate::decompose::decompose;
use crate::error::{AnalysisError, Result};
use crate::frequency::{relative_frequency, FrequencyVector};
use crate::profile::ReferenceProfile;

/// Best shift for one subsequence and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftScore {
    pub shift: usize,
    pub score: f64,
}

/// Scores indexed by (subsequence, shift), one row of 26 per subsequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CoincidenceTable {
    rows: Vec<[f64; SIZE]>,
}

impl CoincidenceTable {
    pub fn rows(&self) -> &[[f64; SIZE]] {
        &self.rows
    }

    pub fn row(&self, subsequence: usize) -> Option<&[f64; SIZE]> {
        self.rows.get(subsequence)
    }

    pub fn score(&self, subsequence: usize, shift: usize) -> Option<f64> {
        self.row(subsequence).and_then(|row| row.get(shift).copied())
    }

    /// Number of subsequences scored.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest-scoring shift of a row; the lowest shift wins a tie.
    pub fn best_shift(&self, subsequence: usize) -> Option<ShiftScore> {
        self.row(subsequence).map(best_in_row)
    }

    pub fn best_shifts(&self) -> Vec<ShiftScore> {
        self.rows.iter().map(best_in_row).collect()
    }

    /// Key made of the best shift of every row.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidArgument`] if the table has no rows.
    pub fn key(&self) -> Result<Key> {
        let shifts: Vec<usize> = self.best_shifts().iter().map(|best| best.shift).collect();
        Key::from_shifts(&shifts)
    }
}

fn best_in_row(row: &[f64; SIZE]) -> ShiftScore {
    let mut best = ShiftScore { shift: 0, score: row[0] };

    for (shift, &score) in row.iter().enumerate().skip(1) {
        if score > best.score {
            best = ShiftScore { shift, score };
        }
    }

    best
}

/// Scores all 26 shifts of one frequency vector against `profile`.
pub fn score_vector(frequencies: &FrequencyVector, profile: &ReferenceProfile) -> [f64; SIZE] {
    let mut row = [0.0; SIZE];

    for (shift, score) in row.iter_mut().enumerate() {
        *score = (0..SIZE)
            .map(|k| frequencies.get(k + shift) * profile.percentage(k))
            .sum();
        trace!("Shift {}: {}", shift, score);
    }

    row
}

/// Builds the coincidence table for a decomposition.
///
/// # Errors
///
/// * [`AnalysisError::InvalidArgument`] if `subsequences` is empty or one of
///   them is empty (its frequencies are undefined).
/// * [`AnalysisError::DomainViolation`] if a subsequence contains a non-letter.
pub fn score_shifts<S: AsRef<str>>(
    subsequences: &[S],
    profile: &ReferenceProfile,
) -> Result<CoincidenceTable> {
    if subsequences.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "no subsequences to score".to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(subsequences.len());

    for (i, subsequence) in subsequences.iter().enumerate() {
        let subsequence = subsequence.as_ref();
        if subsequence.is_empty() {
            return Err(AnalysisError::InvalidArgument(format!(
                "subsequence {} is empty, key length exceeds the text",
                i
            )));
        }

        let frequencies = relative_frequency(subsequence)?;
        let row = score_vector(&frequencies, profile);

        let best = best_in_row(&row);
        debug!(
            "Max shift for substring {} is shift {} with coincidence {}",
            i, best.shift, best.score
        );

        rows.push(row);
    }

    Ok(CoincidenceTable { rows })
}

/// A key recovered from a ciphertext together with the table it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyRecovery {
    pub key: Key,
    pub subsequences: Vec<String>,
    pub table: CoincidenceTable,
}

/// Decomposes `ciphertext` by `key_length` and picks the best shift of
/// every column.
///
/// # Errors
///
/// Fails like [`decompose`] and [`score_shifts`].
pub fn recover_key(
    ciphertext: &str,
    key_length: usize,
    profile: &ReferenceProfile,
) -> Result<KeyRecovery> {
    let subsequences = decompose(ciphertext, key_length)?;
    let table = score_shifts(&subsequences, profile)?;
    let key = table.key()?;

    debug!("Recovered key '{}' for key length {}", key, key_length);

    Ok(KeyRecovery {
        key,
        subsequences,
        table,
    })
}
