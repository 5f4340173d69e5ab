//! Splitting a ciphertext into the interleaved columns of a repeating key

use crate::error::{AnalysisError, Result};

/// Splits `text` into `key_length` subsequences; the character at position
/// `i` goes to subsequence `i % key_length`, keeping relative order.
///
/// A `key_length` larger than the text is allowed and leaves the trailing
/// subsequences empty.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if `key_length` is 0.
pub fn decompose(text: &str, key_length: usize) -> Result<Vec<String>> {
    if key_length == 0 {
        return Err(AnalysisError::InvalidArgument(
            "key length must be > 0".to_string(),
        ));
    }

    let mut subsequences = vec![String::new(); key_length];

    for (i, c) in text.chars().enumerate() {
        subsequences[i % key_length].push(c);
    }

    Ok(subsequences)
}

/// Reassembles subsequences round-robin, undoing [`decompose`].
pub fn interleave<S: AsRef<str>>(subsequences: &[S]) -> String {
    let mut columns: Vec<std::str::Chars<'_>> =
        subsequences.iter().map(|s| s.as_ref().chars()).collect();
    let mut result = String::new();

    loop {
        let mut progressed = false;
        for column in columns.iter_mut() {
            if let Some(c) = column.next() {
                result.push(c);
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    result
}
