//! # Chord Symbols
//!
//! Parsing and formatting of chord names (C, Am, G7, C#m7/G, Bbmaj9, ...).
//!
//! A chord symbol breaks down into four parts:
//! - **root** - the spelled root note (`C#`, `Bb`, ...)
//! - **tonality** - major (empty), minor (`m`), diminished (`dim`),
//!   augmented (`aug`)
//! - **complement** - the remaining quality text (`7`, `maj9`, `sus4`,
//!   `7b5`, ...), kept opaque
//! - **inversion** - an optional slash bass note (`/G`)
//!
//! The transposition engine only ever rewrites the root; tonality,
//! complement, and inversion are carried through unchanged.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChordalError;
use crate::note::{Note, NoteName};

/// Chord tonality parsed from the suffix directly after the root
///
/// Accepted input tokens: `m`, `min`, `-` (minor), `dim`, `°` (diminished),
/// `aug`, `+` (augmented); anything else is major. `maj`-prefixed suffixes
/// (`maj7`, `maj9`) are major-tonality complements, not tonality tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tonality {
    #[default]
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl Tonality {
    /// Canonical printed form ("" / "m" / "dim" / "aug")
    pub fn as_str(self) -> &'static str {
        match self {
            Tonality::Major => "",
            Tonality::Minor => "m",
            Tonality::Diminished => "dim",
            Tonality::Augmented => "aug",
        }
    }
}

/// A parsed chord symbol
///
/// # Example
/// ```
/// use chordal::{Chord, Tonality};
///
/// let chord: Chord = "C#m7/G".parse()?;
/// assert_eq!(chord.root.to_string(), "C#");
/// assert_eq!(chord.tonality, Tonality::Minor);
/// assert_eq!(chord.complement, "7");
/// assert_eq!(chord.inversion.unwrap().to_string(), "G");
/// assert_eq!(chord.to_string(), "C#m7/G");
/// # Ok::<(), chordal::ChordalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub root: Note,
    pub tonality: Tonality,
    pub complement: String,
    pub inversion: Option<Note>,
}

impl Chord {
    pub fn new(
        root: Note,
        tonality: Tonality,
        complement: impl Into<String>,
        inversion: Option<Note>,
    ) -> Chord {
        Chord {
            root,
            tonality,
            complement: complement.into(),
            inversion,
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.root, self.tonality.as_str(), self.complement)?;
        if let Some(bass) = &self.inversion {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Split the leading note spelling off a chord body: the letter plus as many
/// accidental characters as [`Note`] accepts (greedy, at most two)
fn split_root(body: &str) -> Option<(Note, &str)> {
    let first = body.chars().next()?;
    NoteName::from_char(first)?;

    // the letter is ASCII, so byte indexing over the accidental run is safe
    let bytes = body.as_bytes();
    let mut end = 1;
    while end < bytes.len() && end <= 2 && (bytes[end] == b'#' || bytes[end] == b'b') {
        // stop at mixed accidentals; "Cb" and "C##" are roots, "C#b" is not
        if bytes[end] != bytes[1] {
            break;
        }
        end += 1;
    }
    // a third accidental (or the mixed half of a pair) is not a complement
    if end < bytes.len() && (bytes[end] == b'#' || bytes[end] == b'b') {
        return None;
    }

    let root: Note = body[..end].parse().ok()?;
    Some((root, &body[end..]))
}

/// Split a quality suffix into tonality token and opaque complement
fn split_tonality(quality: &str) -> (Tonality, &str) {
    // "maj7"/"maj9" keep their prefix: major tonality, whole-text complement
    if quality.starts_with("maj") {
        return (Tonality::Major, quality);
    }
    if let Some(rest) = quality.strip_prefix("min") {
        return (Tonality::Minor, rest);
    }
    if let Some(rest) = quality.strip_prefix('m') {
        return (Tonality::Minor, rest);
    }
    if let Some(rest) = quality.strip_prefix('-') {
        return (Tonality::Minor, rest);
    }
    if let Some(rest) = quality.strip_prefix("dim") {
        return (Tonality::Diminished, rest);
    }
    if let Some(rest) = quality.strip_prefix('°') {
        return (Tonality::Diminished, rest);
    }
    if let Some(rest) = quality.strip_prefix("aug") {
        return (Tonality::Augmented, rest);
    }
    if let Some(rest) = quality.strip_prefix('+') {
        return (Tonality::Augmented, rest);
    }
    (Tonality::Major, quality)
}

fn complement_char_ok(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '#' | 'b' | '+' | '-' | '(' | ')')
}

impl FromStr for Chord {
    type Err = ChordalError;

    fn from_str(s: &str) -> Result<Chord, ChordalError> {
        let fail = |reason: &str| ChordalError::InvalidChord {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(fail("empty input"));
        }

        let (body, inversion) = match trimmed.split_once('/') {
            Some((body, bass)) => {
                let bass: Note = bass
                    .parse()
                    .map_err(|_| fail("inversion is not a valid note"))?;
                (body, Some(bass))
            }
            None => (trimmed, None),
        };

        let (root, quality) =
            split_root(body).ok_or_else(|| fail("expected a root note letter A-G"))?;

        let (tonality, complement) = split_tonality(quality);

        if let Some(c) = complement.chars().find(|&c| !complement_char_ok(c)) {
            return Err(fail(&format!("unexpected character '{}'", c)));
        }

        Ok(Chord::new(root, tonality, complement, inversion))
    }
}

/// Check whether a string is a well-formed chord name
///
/// Wraps chord parsing and reports `false` for any failure instead of
/// propagating the error. Intended as a filter over candidate strings, not
/// as a validator with diagnostics.
///
/// # Example
/// ```
/// use chordal::is_chord;
///
/// assert!(is_chord("C#m7/G"));
/// assert!(is_chord("Bbmaj9"));
/// assert!(!is_chord("H"));
/// assert!(!is_chord("7"));
/// assert!(!is_chord(""));
/// ```
pub fn is_chord(input: &str) -> bool {
    input.parse::<Chord>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Accidental, NoteName};

    #[test]
    fn test_parse_plain_major() {
        let chord: Chord = "C".parse().unwrap();
        assert_eq!(chord.root, Note::natural(NoteName::C));
        assert_eq!(chord.tonality, Tonality::Major);
        assert_eq!(chord.complement, "");
        assert_eq!(chord.inversion, None);
    }

    #[test]
    fn test_parse_minor_seventh_with_inversion() {
        let chord: Chord = "C#m7/G".parse().unwrap();
        assert_eq!(chord.root, Note::new(NoteName::C, Accidental::Sharp));
        assert_eq!(chord.tonality, Tonality::Minor);
        assert_eq!(chord.complement, "7");
        assert_eq!(chord.inversion, Some(Note::natural(NoteName::G)));
    }

    #[test]
    fn test_parse_maj_prefix_is_complement() {
        let chord: Chord = "Bbmaj9".parse().unwrap();
        assert_eq!(chord.root, Note::new(NoteName::B, Accidental::Flat));
        assert_eq!(chord.tonality, Tonality::Major);
        assert_eq!(chord.complement, "maj9");
    }

    #[test]
    fn test_parse_tonality_aliases() {
        let m: Chord = "Dmin7".parse().unwrap();
        assert_eq!(m.tonality, Tonality::Minor);
        assert_eq!(m.complement, "7");

        let dash: Chord = "D-7".parse().unwrap();
        assert_eq!(dash.tonality, Tonality::Minor);
        assert_eq!(dash.complement, "7");

        let dim: Chord = "Bdim7".parse().unwrap();
        assert_eq!(dim.tonality, Tonality::Diminished);
        assert_eq!(dim.complement, "7");

        let aug: Chord = "F+".parse().unwrap();
        assert_eq!(aug.tonality, Tonality::Augmented);
        assert_eq!(aug.complement, "");
    }

    #[test]
    fn test_parse_flat_root_vs_flat_complement() {
        // greedy root: "Cb" is C-flat major, not C with a "b" tail
        let cb: Chord = "Cb".parse().unwrap();
        assert_eq!(cb.root, Note::new(NoteName::C, Accidental::Flat));

        // but the "b" in "7b5" stays in the complement
        let altered: Chord = "Am7b5".parse().unwrap();
        assert_eq!(altered.root, Note::natural(NoteName::A));
        assert_eq!(altered.tonality, Tonality::Minor);
        assert_eq!(altered.complement, "7b5");
    }

    #[test]
    fn test_display_canonical_forms() {
        let cases = [
            ("C", "C"),
            ("Cmin7", "Cm7"),
            ("D-7", "Dm7"),
            ("Bbmaj9", "Bbmaj9"),
            ("F#dim", "F#dim"),
            ("G+7", "Gaug7"),
            ("C#m7/G", "C#m7/G"),
            ("Dsus4", "Dsus4"),
        ];
        for (input, canonical) in cases {
            let chord: Chord = input.parse().unwrap();
            assert_eq!(chord.to_string(), canonical, "canonical form of {}", input);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "  ", "H", "7", "c", "C$", "C/", "C/H", "C/7", "C###"] {
            assert!(bad.parse::<Chord>().is_err(), "should reject {:?}", bad);
        }
    }

    #[test]
    fn test_is_chord_filter() {
        assert!(is_chord("C"));
        assert!(is_chord("Am"));
        assert!(is_chord("G7"));
        assert!(is_chord("C#m7/G"));
        assert!(is_chord("Bbmaj9"));
        assert!(is_chord("Ebm7b5"));

        assert!(!is_chord(""));
        assert!(!is_chord("H"));
        assert!(!is_chord("7"));
        assert!(!is_chord("C/"));
    }
}
