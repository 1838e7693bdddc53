//! # Note Types
//!
//! Spelled musical notes: a letter A-G plus an accidental.
//!
//! Two notes are equal iff letter and accidental match exactly. This is
//! name equality, not pitch equality: `C#` and `Db` are different [`Note`]
//! values even though they share pitch class 1. Enharmonic questions are
//! answered by [`Note::pitch_class`], spelling questions by the note itself.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChordalError;

/// Note letter name (A-G)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteName {
    /// Semitone offset from C for the natural letter
    pub fn base_semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    /// The next letter upward, wrapping G back to A
    pub fn next(self) -> NoteName {
        match self {
            NoteName::A => NoteName::B,
            NoteName::B => NoteName::C,
            NoteName::C => NoteName::D,
            NoteName::D => NoteName::E,
            NoteName::E => NoteName::F,
            NoteName::F => NoteName::G,
            NoteName::G => NoteName::A,
        }
    }

    /// The previous letter downward, wrapping A back to G
    pub fn prev(self) -> NoteName {
        match self {
            NoteName::A => NoteName::G,
            NoteName::B => NoteName::A,
            NoteName::C => NoteName::B,
            NoteName::D => NoteName::C,
            NoteName::E => NoteName::D,
            NoteName::F => NoteName::E,
            NoteName::G => NoteName::F,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::A => 'A',
            NoteName::B => 'B',
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
        }
    }

    pub fn from_char(c: char) -> Option<NoteName> {
        match c {
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            _ => None,
        }
    }

    /// All seven letters in A-first order (the order the pitch maps are
    /// laid out in, natural A being the head)
    pub const ALL: [NoteName; 7] = [
        NoteName::A,
        NoteName::B,
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
    ];
}

/// Accidental on a note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Natural,
    Flat,
    DoubleFlat,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone adjustment relative to the natural letter
    pub fn offset(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Printed suffix ("" / "b" / "bb" / "#" / "##")
    pub fn suffix(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }
}

/// A spelled note: letter plus accidental
///
/// # Example
/// ```
/// use chordal::Note;
///
/// let cs: Note = "C#".parse()?;
/// let db: Note = "Db".parse()?;
/// assert_ne!(cs, db); // name equality
/// assert_eq!(cs.pitch_class(), db.pitch_class()); // same pitch
/// # Ok::<(), chordal::ChordalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(name: NoteName, accidental: Accidental) -> Note {
        Note { name, accidental }
    }

    pub fn natural(name: NoteName) -> Note {
        Note::new(name, Accidental::Natural)
    }

    /// Pitch class 0-11 (C = 0), wrapping double accidentals across the
    /// octave boundary (Cb = 11, B# = 0)
    pub fn pitch_class(self) -> u8 {
        (self.name.base_semitone() as i8 + self.accidental.offset()).rem_euclid(12) as u8
    }

    /// True for flat and double-flat spellings
    pub fn is_flat_family(self) -> bool {
        matches!(self.accidental, Accidental::Flat | Accidental::DoubleFlat)
    }

    /// True for sharp and double-sharp spellings
    pub fn is_sharp_family(self) -> bool {
        matches!(self.accidental, Accidental::Sharp | Accidental::DoubleSharp)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name.as_char(), self.accidental.suffix())
    }
}

impl FromStr for Note {
    type Err = ChordalError;

    /// Parse a spelled note: an uppercase letter A-G followed by at most two
    /// sharps or flats (`"C"`, `"F#"`, `"Bb"`, `"G##"`, `"Ebb"`)
    fn from_str(s: &str) -> Result<Note, ChordalError> {
        let invalid = || ChordalError::InvalidNote {
            input: s.to_string(),
        };

        let mut chars = s.chars();
        let name = chars
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(invalid)?;

        let accidental = match chars.as_str() {
            "" => Accidental::Natural,
            "b" => Accidental::Flat,
            "bb" => Accidental::DoubleFlat,
            "#" => Accidental::Sharp,
            "##" => Accidental::DoubleSharp,
            _ => return Err(invalid()),
        };

        Ok(Note::new(name, accidental))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for spelling in ["C", "C#", "C##", "Cb", "Cbb", "A", "F#", "Bb", "G##", "Ebb"] {
            let note: Note = spelling.parse().unwrap();
            assert_eq!(note.to_string(), spelling);
        }
    }

    #[test]
    fn test_parse_rejects_bad_spellings() {
        for bad in ["", "H", "c", "7", "C###", "Cbbb", "C#b", "B b", "Db9"] {
            assert!(bad.parse::<Note>().is_err(), "should reject {:?}", bad);
        }
    }

    #[test]
    fn test_pitch_classes() {
        let cases = [
            ("C", 0),
            ("C#", 1),
            ("Db", 1),
            ("D", 2),
            ("D#", 3),
            ("Eb", 3),
            ("E", 4),
            ("Fb", 4),
            ("E#", 5),
            ("F", 5),
            ("F#", 6),
            ("Gb", 6),
            ("G", 7),
            ("Ab", 8),
            ("A", 9),
            ("Bb", 10),
            ("B", 11),
            ("Cb", 11),
            ("B#", 0),
            ("B##", 1),
            ("Cbb", 10),
            ("Fbb", 3),
            ("E##", 6),
        ];
        for (spelling, pc) in cases {
            let note: Note = spelling.parse().unwrap();
            assert_eq!(note.pitch_class(), pc, "pitch class of {}", spelling);
        }
    }

    #[test]
    fn test_family_predicates() {
        let flat: Note = "Bb".parse().unwrap();
        let double_flat: Note = "Abb".parse().unwrap();
        let sharp: Note = "F#".parse().unwrap();
        let double_sharp: Note = "C##".parse().unwrap();
        let natural: Note = "G".parse().unwrap();

        assert!(flat.is_flat_family());
        assert!(double_flat.is_flat_family());
        assert!(!flat.is_sharp_family());

        assert!(sharp.is_sharp_family());
        assert!(double_sharp.is_sharp_family());
        assert!(!sharp.is_flat_family());

        assert!(!natural.is_flat_family());
        assert!(!natural.is_sharp_family());
    }

    #[test]
    fn test_name_equality_not_pitch_equality() {
        let cs: Note = "C#".parse().unwrap();
        let db: Note = "Db".parse().unwrap();
        assert_ne!(cs, db);
        assert_eq!(cs.pitch_class(), db.pitch_class());
    }
}
