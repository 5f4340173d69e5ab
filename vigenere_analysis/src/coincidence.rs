//! Key length estimation by self-coincidence over cyclic shifts
//!
//! Comparing the ciphertext with a rotated copy of itself yields more equal
//! positions when the rotation is a multiple of the key length. The peak is a
//! candidate key length only: harmonics of the true length and repeated
//! structure in the plaintext produce peaks of their own.

use log::{debug, trace};

/// Number of coincidences found for one cyclic shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCoincidence {
    pub shift: usize,
    pub count: usize,
}

/// Coincidence counts for every shift in `1..len`, in increasing shift order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoincidenceScan {
    entries: Vec<ShiftCoincidence>,
}

impl CoincidenceScan {
    pub fn entries(&self) -> &[ShiftCoincidence] {
        &self.entries
    }

    /// Coincidence count for `shift`, if it was scanned.
    pub fn count_for(&self, shift: usize) -> Option<usize> {
        shift
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.count)
    }

    /// Shift with the highest count. On ties the smallest shift wins.
    ///
    /// `None` when the text was too short to be shifted.
    pub fn best(&self) -> Option<ShiftCoincidence> {
        let mut best: Option<ShiftCoincidence> = None;

        for &entry in &self.entries {
            if best.map_or(true, |current| entry.count > current.count) {
                best = Some(entry);
            }
        }

        best
    }

    /// The `n` highest-count shifts, by count descending then shift ascending.
    pub fn ranked(&self, n: usize) -> Vec<ShiftCoincidence> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.shift.cmp(&b.shift)));
        ranked.truncate(n);
        ranked
    }
}

/// Counts, for each shift `s` in `1..len`, the positions `j` where
/// `text[j] == text[(j + s) % len]`.
///
/// Characters are compared exactly as given (case-sensitive, any character).
/// Runs in O(n²) over the number of characters.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::coincidence::scan;
///
/// let result = scan("abcabcabc");
/// assert_eq!(result.best().unwrap().shift, 3);
/// ```
pub fn scan(text: &str) -> CoincidenceScan {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let entries: Vec<ShiftCoincidence> = (1..len)
        .map(|shift| {
            let count = (0..len)
                .filter(|&j| chars[j] == chars[(j + shift) % len])
                .count();
            trace!("Shift {}: {} coincidences", shift, count);
            ShiftCoincidence { shift, count }
        })
        .collect();

    let result = CoincidenceScan { entries };

    if let Some(best) = result.best() {
        debug!(
            "Best coincidence is shift {} at {} coincidences",
            best.shift, best.count
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_block_peaks_at_block_length() {
        let text = "qwxzk".repeat(10);
        let result = scan(&text);

        assert_eq!(result.entries().len(), 49);
        assert_eq!(result.count_for(5), Some(50));
        assert_eq!(result.best(), Some(ShiftCoincidence { shift: 5, count: 50 }));

        // every multiple of the block length matches everywhere
        let top = result.ranked(9);
        assert!(top.iter().all(|entry| entry.shift % 5 == 0 && entry.count == 50));
        assert_eq!(top[0].shift, 5);
    }

    #[test]
    fn test_shift_counts_are_cyclic() {
        // "abab": shift 2 wraps around and matches all 4 positions
        let result = scan("abab");
        assert_eq!(result.count_for(1), Some(0));
        assert_eq!(result.count_for(2), Some(4));
        assert_eq!(result.count_for(3), Some(0));
        assert_eq!(result.count_for(0), None);
        assert_eq!(result.count_for(4), None);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let result = scan("aA");
        assert_eq!(result.count_for(1), Some(0));
    }

    #[test]
    fn test_ties_keep_smallest_shift() {
        // no coincidences at all: first shift wins
        let result = scan("abcd");
        assert_eq!(result.best(), Some(ShiftCoincidence { shift: 1, count: 0 }));
    }

    #[test]
    fn test_short_texts_have_no_best_shift() {
        assert_eq!(scan("").best(), None);
        assert_eq!(scan("x").best(), None);
        assert!(scan("x").entries().is_empty());
    }

    #[test]
    fn test_ranked_truncates() {
        let result = scan("abcabcabc");
        let top = result.ranked(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ShiftCoincidence { shift: 3, count: 9 });
        assert_eq!(top[1], ShiftCoincidence { shift: 6, count: 9 });
        assert_eq!(result.ranked(100).len(), 8);
    }
}
