//! # Error Types
//!
//! This module defines all error types for the chordal library.
//!
//! ## Error Types
//! - `InvalidNote` - A note spelling that does not name a letter A-G with an
//!   optional accidental
//! - `InvalidChord` - A chord symbol the parser cannot understand
//! - `NegativeSemitones` - A transposition request with a negative interval
//! - `NoteNotFound` - A note missing from a pitch map (internal consistency
//!   failure, not a user input error)
//!
//! ## Usage
//! ```rust
//! use chordal::{transpose_up, Chord, ChordalError};
//!
//! let chord: Chord = "Cm7".parse()?;
//! match transpose_up(&chord, -3) {
//!     Err(ChordalError::NegativeSemitones(n)) => {
//!         eprintln!("bad interval: {}", n);
//!     }
//!     other => { other?; }
//! }
//! # Ok::<(), chordal::ChordalError>(())
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordalError {
    /// A note spelling that does not parse.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordalError;
    /// let err = ChordalError::InvalidNote { input: "H".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note 'H'");
    /// ```
    #[error("Invalid note '{input}'")]
    InvalidNote { input: String },

    /// A chord symbol the parser cannot understand.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordalError;
    /// let err = ChordalError::InvalidChord {
    ///     input: "C$".to_string(),
    ///     reason: "unexpected character '$'".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid chord 'C$': unexpected character '$'");
    /// ```
    #[error("Invalid chord '{input}': {reason}")]
    InvalidChord { input: String, reason: String },

    /// A transposition interval below zero.
    ///
    /// Negative counts are rejected before normalization; transpose down
    /// instead of passing a negative interval up.
    #[error("Semitone count must be non-negative, got {0}")]
    NegativeSemitones(i32),

    /// A note that could not be located in the selected pitch map.
    ///
    /// The maps contain every spelling the [`crate::Note`] type can express,
    /// so this indicates an internal consistency failure rather than bad
    /// user input.
    #[error("Note '{note}' not present in the {map} map")]
    NoteNotFound { note: String, map: &'static str },
}
