//! # Pitch Maps
//!
//! The dual pitch-lattice engine behind transposition.
//!
//! Two fixed maps cover the twelve pitch classes with every spelling of
//! one accidental family:
//! - **flat map** - naturals plus flat and double-flat spellings
//! - **sharp map** - naturals plus sharp and double-sharp spellings
//!
//! Both are immutable process-lifetime singletons, built lazily on first
//! use and shared by every transposition afterwards. Moving `right` in a
//! map ascends one semitone, moving `down` crosses to an equal-pitch
//! spelling in the adjacent letter column; transposition is a lookup for
//! the start note followed by a counted walk.
//!
//! ## Sub-modules
//! - `builder` - declarative map construction and invariant validation
//! - `navigator` - note lookup (DFS) and the semitone walk

mod builder;
mod navigator;


pub(crate) use builder::{MapFamily, PitchMap};

use once_cell::sync::Lazy;

static FLAT_MAP: Lazy<PitchMap> = Lazy::new(|| PitchMap::build(MapFamily::Flat));
static SHARP_MAP: Lazy<PitchMap> = Lazy::new(|| PitchMap::build(MapFamily::Sharp));

/// The flat-preference map singleton
pub(crate) fn flat_map() -> &'static PitchMap {
    &FLAT_MAP
}

/// The sharp-preference map singleton
pub(crate) fn sharp_map() -> &'static PitchMap {
    &SHARP_MAP
}
