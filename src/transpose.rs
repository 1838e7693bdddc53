//! # Transposition
//!
//! Move notes and chords up or down by a number of semitones, keeping the
//! spelling musically sensible.
//!
//! The interval is taken modulo 12 (transposing by an octave is the
//! identity) and must be non-negative; use the `_down` functions instead
//! of negative counts. Which pitch map answers a request follows the
//! input spelling: flat spellings stay in the flat map, sharp spellings
//! in the sharp map, and naturals default to the sharp map going up and
//! the flat map going down.
//!
//! Chord transposition rewrites only the root; tonality, complement, and
//! inversion are carried through unchanged.
//!
//! ## Example
//! ```rust
//! use chordal::{transpose_up, Chord};
//!
//! let chord: Chord = "C#m7/G".parse()?;
//! let up = transpose_up(&chord, 3)?;
//! assert_eq!(up.to_string(), "Em7/G");
//! # Ok::<(), chordal::ChordalError>(())
//! ```

use crate::chord::Chord;
use crate::error::ChordalError;
use crate::lattice::{flat_map, sharp_map, PitchMap};
use crate::note::Note;

/// Reject negative intervals, wrap the rest around the octave
fn normalize_semitones(semitones: i32) -> Result<u32, ChordalError> {
    if semitones < 0 {
        return Err(ChordalError::NegativeSemitones(semitones));
    }
    Ok(semitones as u32 % 12)
}

fn locate(map: &PitchMap, note: Note) -> Result<usize, ChordalError> {
    map.find(note).ok_or_else(|| ChordalError::NoteNotFound {
        note: note.to_string(),
        map: map.label(),
    })
}

/// Transpose a note up by `semitones`
///
/// # Example
/// ```
/// use chordal::{transpose_note_up, Note};
///
/// let note: Note = "C".parse()?;
/// assert_eq!(transpose_note_up(note, 3)?.to_string(), "D#");
/// # Ok::<(), chordal::ChordalError>(())
/// ```
pub fn transpose_note_up(note: Note, semitones: i32) -> Result<Note, ChordalError> {
    let steps = normalize_semitones(semitones)?;
    if steps == 0 {
        return Ok(note);
    }
    let map = if note.is_flat_family() {
        flat_map()
    } else {
        sharp_map()
    };
    let start = locate(map, note)?;
    Ok(map.note_at(map.walk_up(start, steps)))
}

/// Transpose a note down by `semitones`
///
/// # Example
/// ```
/// use chordal::{transpose_note_down, Note};
///
/// let note: Note = "C".parse()?;
/// assert_eq!(transpose_note_down(note, 1)?.to_string(), "B");
/// # Ok::<(), chordal::ChordalError>(())
/// ```
pub fn transpose_note_down(note: Note, semitones: i32) -> Result<Note, ChordalError> {
    let steps = normalize_semitones(semitones)?;
    if steps == 0 {
        return Ok(note);
    }
    let map = if note.is_sharp_family() {
        sharp_map()
    } else {
        flat_map()
    };
    let start = locate(map, note)?;
    Ok(map.note_at(map.walk_down(start, steps)))
}

/// Transpose a chord up by `semitones`, keeping tonality, complement, and
/// inversion unchanged
pub fn transpose_up(chord: &Chord, semitones: i32) -> Result<Chord, ChordalError> {
    let steps = normalize_semitones(semitones)?;
    if steps == 0 {
        return Ok(chord.clone());
    }
    Ok(Chord {
        root: transpose_note_up(chord.root, semitones)?,
        tonality: chord.tonality,
        complement: chord.complement.clone(),
        inversion: chord.inversion,
    })
}

/// Transpose a chord down by `semitones`, keeping tonality, complement,
/// and inversion unchanged
pub fn transpose_down(chord: &Chord, semitones: i32) -> Result<Chord, ChordalError> {
    let steps = normalize_semitones(semitones)?;
    if steps == 0 {
        return Ok(chord.clone());
    }
    Ok(Chord {
        root: transpose_note_down(chord.root, semitones)?,
        tonality: chord.tonality,
        complement: chord.complement.clone(),
        inversion: chord.inversion,
    })
}

/// Transpose a slice of chords up, preserving order
///
/// The interval is validated before any element is touched, so an invalid
/// call fails as a whole.
pub fn transpose_all_up(chords: &[Chord], semitones: i32) -> Result<Vec<Chord>, ChordalError> {
    normalize_semitones(semitones)?;
    chords.iter().map(|c| transpose_up(c, semitones)).collect()
}

/// Transpose a slice of chords down, preserving order
pub fn transpose_all_down(chords: &[Chord], semitones: i32) -> Result<Vec<Chord>, ChordalError> {
    normalize_semitones(semitones)?;
    chords.iter().map(|c| transpose_down(c, semitones)).collect()
}
