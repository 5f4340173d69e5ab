//! The 26-letter Latin alphabet and its index mapping

/// Number of letters in the alphabet.
pub const SIZE: usize = 26;

/// Letters in index order, `LETTERS[i]` is the letter with index `i`.
pub const LETTERS: [char; SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Maps a letter to its index (a=0, b=1, ..., z=25), ignoring case.
///
/// Returns `None` for anything that is not an ASCII letter.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Returns the lowercase letter at `index`, wrapping around past `z`.
pub fn letter_at(index: usize) -> char {
    LETTERS[index % SIZE]
}
