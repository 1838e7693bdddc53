//! # chordal
//!
//! Parse musical chord names and transpose them up or down by semitones,
//! with correct enharmonic spelling (sharps vs. flats, double accidentals,
//! wraparound across the twelve-tone scale).
//!
//! ```rust
//! use chordal::{is_chord, transpose_up, Chord};
//!
//! let chord: Chord = "C#m7/G".parse()?;
//! let up = transpose_up(&chord, 3)?;
//! assert_eq!(up.to_string(), "Em7/G");
//!
//! assert!(is_chord("Bbmaj9"));
//! assert!(!is_chord("H"));
//! # Ok::<(), chordal::ChordalError>(())
//! ```

pub mod chord;
pub mod error;
mod lattice;
pub mod note;
pub mod transpose;

pub use chord::{is_chord, Chord, Tonality};
pub use error::ChordalError;
pub use note::{Accidental, Note, NoteName};
pub use transpose::{
    transpose_all_down, transpose_all_up, transpose_down, transpose_note_down, transpose_note_up,
    transpose_up,
};
