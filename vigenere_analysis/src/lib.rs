//! # Vigenère Analysis Library
//!
//! Statistical cryptanalysis of text enciphered with a repeating-key
//! polyalphabetic substitution (the Vigenère cipher).
//!
//! ## Components
//!
//! - **alphabet** - the 26-letter alphabet and its index mapping
//! - **profile** - reference letter frequencies (English, German, custom)
//! - **frequency** - relative frequencies, percentage reports, index of coincidence
//! - **coincidence** - self-coincidence scan over cyclic shifts to estimate key length
//! - **decompose** - splitting a ciphertext into key-length interleaved columns
//! - **scorer** - per-column shift scoring against a reference profile
//! - **cipher** - keys, encryption and decryption
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{decrypt, encrypt, recover_key, scan, Key, ReferenceProfile};
//!
//! let key = Key::parse("key")?;
//! let plaintext = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdom\
//!     itwastheageoffoolishnessitwastheepochofbeliefitwastheepochofincredulity\
//!     itwastheseasonoflightitwastheseasonofdarknessitwasthespringofhope";
//! let ciphertext = encrypt(plaintext, &key)?;
//!
//! // Candidate key lengths, strongest first
//! let candidates = scan(&ciphertext).ranked(5);
//! assert!(!candidates.is_empty());
//!
//! // Recover the key for a chosen length and decrypt
//! let recovery = recover_key(&ciphertext, 3, &ReferenceProfile::ENGLISH)?;
//! assert_eq!(recovery.key, key);
//! assert_eq!(decrypt(&ciphertext, &recovery.key)?, plaintext);
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! ## Input policy
//!
//! Frequency analysis, encryption and decryption accept letters only and
//! reject anything else with [`AnalysisError::DomainViolation`]. The scan and
//! the decomposition work on any characters.

pub mod alphabet;
pub mod cipher;
pub mod coincidence;
pub mod decompose;
pub mod error;
pub mod frequency;
pub mod profile;
pub mod scorer;

pub use cipher::{decrypt, encrypt, group, Key};
pub use coincidence::{scan, CoincidenceScan, ShiftCoincidence};
pub use decompose::{decompose, interleave};
pub use error::{AnalysisError, Result};
pub use frequency::{
    index_of_coincidence, percentage_report, relative_frequency, FrequencyVector,
    PercentageReport,
};
pub use profile::ReferenceProfile;
pub use scorer::{recover_key, score_shifts, CoincidenceTable, KeyRecovery, ShiftScore};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
