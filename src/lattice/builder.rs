//! Pitch map construction.
//!
//! Each map is a closed grid of 21 nodes: seven letter columns, three
//! spellings per column (double-flat/flat/natural for the flat map,
//! natural/sharp/double-sharp for the sharp map). Within a column, `right`
//! ascends one semitone per step. Between columns, `down` jumps to the
//! node of equal pitch class in the next letter's column, where one exists
//! (Cb down to B's column, B# down to C's column, A down to Bbb, and so
//! on). `left` and `up` mirror `right` and `down`.
//!
//! The wiring is computed from pitch classes rather than linked node by
//! node, so the connectivity invariant - every node reachable from the
//! head by `right`/`down` alone, all 12 pitch classes present - can be
//! checked exhaustively after construction. `validate` does exactly that
//! and runs once per map, at build time.

use log::debug;

use crate::note::{Accidental, Note, NoteName};

/// Which accidental family a pitch map spells its notes with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapFamily {
    Flat,
    Sharp,
}

impl MapFamily {
    pub(crate) fn label(self) -> &'static str {
        match self {
            MapFamily::Flat => "flat",
            MapFamily::Sharp => "sharp",
        }
    }

    /// Spellings of one letter column, in ascending chromatic order
    fn variants(self) -> [Accidental; 3] {
        match self {
            MapFamily::Flat => [Accidental::DoubleFlat, Accidental::Flat, Accidental::Natural],
            MapFamily::Sharp => [Accidental::Natural, Accidental::Sharp, Accidental::DoubleSharp],
        }
    }
}

/// One spelled note inside a pitch map, with its neighbor indices
#[derive(Debug, Clone)]
pub(crate) struct MapNode {
    pub(crate) note: Note,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
    pub(crate) up: Option<usize>,
    pub(crate) down: Option<usize>,
}

/// A fixed, immutable pitch map for one accidental family
///
/// Built once per process and shared read-only; lookups and walks never
/// mutate it (visited state lives on the caller's stack).
#[derive(Debug)]
pub(crate) struct PitchMap {
    family: MapFamily,
    nodes: Vec<MapNode>,
    head: usize,
}

/// Spellings per letter column
const VARIANTS_PER_LETTER: usize = 3;

impl PitchMap {
    pub(crate) fn build(family: MapFamily) -> PitchMap {
        let variants = family.variants();

        let mut nodes: Vec<MapNode> = Vec::with_capacity(NoteName::ALL.len() * VARIANTS_PER_LETTER);
        for letter in NoteName::ALL {
            for accidental in variants {
                nodes.push(MapNode {
                    note: Note::new(letter, accidental),
                    left: None,
                    right: None,
                    up: None,
                    down: None,
                });
            }
        }

        // Chromatic chain within each letter column
        for letter_idx in 0..NoteName::ALL.len() {
            for variant_idx in 0..VARIANTS_PER_LETTER - 1 {
                let a = letter_idx * VARIANTS_PER_LETTER + variant_idx;
                let b = a + 1;
                nodes[a].right = Some(b);
                nodes[b].left = Some(a);
            }
        }

        // Enharmonic jumps into the adjacent letter column. Each column
        // spans three consecutive pitch classes, so a node has at most one
        // equal-pitch partner in the next column.
        for letter_idx in 0..NoteName::ALL.len() {
            let next_idx = (letter_idx + 1) % NoteName::ALL.len();
            for variant_idx in 0..VARIANTS_PER_LETTER {
                let i = letter_idx * VARIANTS_PER_LETTER + variant_idx;
                let pc = nodes[i].note.pitch_class();
                for next_variant in 0..VARIANTS_PER_LETTER {
                    let j = next_idx * VARIANTS_PER_LETTER + next_variant;
                    if nodes[j].note.pitch_class() == pc {
                        nodes[i].down = Some(j);
                        nodes[j].up = Some(i);
                    }
                }
            }
        }

        let natural_variant = variants
            .iter()
            .position(|&a| a == Accidental::Natural)
            .unwrap_or(0);
        let head = natural_variant; // letter A is column 0

        let map = PitchMap {
            family,
            nodes,
            head,
        };
        map.validate();
        debug!("built {} map: {} nodes", family.label(), map.nodes.len());
        map
    }

    pub(crate) fn label(&self) -> &'static str {
        self.family.label()
    }

    pub(crate) fn head(&self) -> usize {
        self.head
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, idx: usize) -> &MapNode {
        &self.nodes[idx]
    }

    pub(crate) fn note_at(&self, idx: usize) -> Note {
        self.nodes[idx].note
    }

    /// Exhaustive check of the map invariants:
    /// - the head is natural A
    /// - `right` ascends exactly one semitone, `left` descends one
    /// - `up`/`down` connect equal pitch classes and mirror each other
    /// - every node is reachable from the head via `right`/`down` alone
    /// - every node can consume a step in both directions (a `right` or a
    ///   `down` leading to one, and the mirror for walking down)
    /// - all 12 pitch classes are present
    fn validate(&self) {
        assert_eq!(self.nodes[self.head].note, Note::natural(NoteName::A));

        for (i, node) in self.nodes.iter().enumerate() {
            let pc = node.note.pitch_class();
            if let Some(r) = node.right {
                assert_eq!(
                    self.nodes[r].note.pitch_class(),
                    (pc + 1) % 12,
                    "{} map: right of {} must ascend one semitone",
                    self.label(),
                    node.note
                );
                assert_eq!(self.nodes[r].left, Some(i));
            }
            if let Some(d) = node.down {
                assert_eq!(
                    self.nodes[d].note.pitch_class(),
                    pc,
                    "{} map: down of {} must keep the pitch class",
                    self.label(),
                    node.note
                );
                assert_eq!(self.nodes[d].up, Some(i));
            }
            assert!(
                node.right.is_some() || node.down.is_some(),
                "{} map: {} cannot continue an upward walk",
                self.label(),
                node.note
            );
            assert!(
                node.left.is_some() || node.up.is_some(),
                "{} map: {} cannot continue a downward walk",
                self.label(),
                node.note
            );
        }

        // reachability sweep, the same moves the lookup search uses
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![self.head];
        while let Some(i) = stack.pop() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            if let Some(r) = self.nodes[i].right {
                stack.push(r);
            }
            if let Some(d) = self.nodes[i].down {
                stack.push(d);
            }
        }
        assert!(
            visited.iter().all(|&v| v),
            "{} map: not fully connected via right/down",
            self.label()
        );

        let mut classes = [false; 12];
        for node in &self.nodes {
            classes[node.note.pitch_class() as usize] = true;
        }
        assert!(
            classes.iter().all(|&c| c),
            "{} map: missing pitch classes",
            self.label()
        );
    }
}
