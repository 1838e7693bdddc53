//! Pitch map traversal: note lookup and semitone walks.
//!
//! Lookup is a depth-first search from the head, trying `right` before
//! `down`. The maps are cyclic, so the search carries its own visited set
//! on the stack; the shared map is never marked, which keeps concurrent
//! lookups safe.
//!
//! Walks count semitones along `right` (or `left`): a step between letter
//! columns via `down` (or `up`) is an enharmonic jump and consumes
//! nothing. After the walk, a landing on an alternate spelling that has a
//! plainer equal-pitch neighbor is normalized one row over, so an upward
//! walk does not hand back sharp-heavy spellings (B# + 1 lands on B## and
//! comes out C#), and a downward walk does the same for flats (C - 1 lands
//! on Cb and comes out B).

use log::trace;

use crate::note::Note;

use super::builder::PitchMap;

impl PitchMap {
    /// Locate the node spelled exactly as `target`, or `None` if the map
    /// does not contain that spelling
    pub(crate) fn find(&self, target: Note) -> Option<usize> {
        let mut visited = vec![false; self.len()];
        let mut stack = vec![self.head()];

        while let Some(idx) = stack.pop() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            let node = self.node(idx);
            if node.note == target {
                return Some(idx);
            }

            // push down first so right is explored first
            if let Some(d) = node.down {
                if !visited[d] {
                    stack.push(d);
                }
            }
            if let Some(r) = node.right {
                if !visited[r] {
                    stack.push(r);
                }
            }
        }

        None
    }

    /// Walk `semitones` steps upward from `start`, returning the landing
    /// node after spelling normalization
    pub(crate) fn walk_up(&self, start: usize, semitones: u32) -> usize {
        let mut current = start;
        let mut remaining = semitones;

        while remaining > 0 {
            let node = self.node(current);
            if let Some(r) = node.right {
                current = r;
                remaining -= 1;
            } else if let Some(d) = node.down {
                current = d;
            } else {
                // validate() guarantees every node continues upward
                unreachable!("{} map: dead end at {}", self.label(), node.note);
            }
        }

        // a sharp landing with an equal-pitch row below is respelled
        let landed = self.node(current);
        if landed.note.is_sharp_family() {
            if let Some(d) = landed.down {
                current = d;
            }
        }

        trace!(
            "{} map: walked {} up {} to {}",
            self.label(),
            self.note_at(start),
            semitones,
            self.note_at(current)
        );
        current
    }

    /// Walk `semitones` steps downward from `start`, returning the landing
    /// node after spelling normalization
    pub(crate) fn walk_down(&self, start: usize, semitones: u32) -> usize {
        let mut current = start;
        let mut remaining = semitones;

        while remaining > 0 {
            let node = self.node(current);
            if let Some(l) = node.left {
                current = l;
                remaining -= 1;
            } else if let Some(u) = node.up {
                current = u;
            } else {
                unreachable!("{} map: dead end at {}", self.label(), node.note);
            }
        }

        // a flat landing with an equal-pitch row above is respelled
        let landed = self.node(current);
        if landed.note.is_flat_family() {
            if let Some(u) = landed.up {
                current = u;
            }
        }

        trace!(
            "{} map: walked {} down {} to {}",
            self.label(),
            self.note_at(start),
            semitones,
            self.note_at(current)
        );
        current
    }
}
