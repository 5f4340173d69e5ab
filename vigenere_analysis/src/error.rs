//! Error types for the analysis engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A character outside a-z/A-Z was found where only letters are accepted.
    #[error("Character {character:?} at position {position} is not a letter of the alphabet")]
    DomainViolation { character: char, position: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
