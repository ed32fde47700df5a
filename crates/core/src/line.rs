//! Line compactor - slides and merges a single row or column
//!
//! Every push direction reduces to the same 1-D problem: slide the non-empty
//! levels of a line toward index 0 and merge equal pairs once. The grid engine
//! feeds rows or columns through [`compact`] (reversing them first for
//! Down/Right pushes) and maps the local events back to grid coordinates.
//!
//! Scan rules (left to right):
//! - empty cells are skipped
//! - a held level meeting an equal level merges into `level + 1`; the merged
//!   tile is written out immediately and never merges again in this pass
//! - tiles at `MAX_LEVEL` never merge
//! - a held level meeting a different level is written out unchanged
//!
//! So `[1, 1, 1, 0]` becomes `[2, 1, 0, 0]` and `[2, 1, 1, 0]` becomes `[2, 2, 0, 0]`.
//!
//! Buffers are stack-allocated (no heap traffic per line).

use arrayvec::ArrayVec;

use crate::types::{Coord, Event, Level, EMPTY, MAX_GRID_SIZE, MAX_LEVEL};

/// Upper bound on events from one line: a merge emits three events for two tiles.
pub const MAX_LINE_EVENTS: usize = MAX_GRID_SIZE * 3 / 2;

/// A compacted line, at most `MAX_GRID_SIZE` levels.
pub type LineBuf = ArrayVec<Level, MAX_GRID_SIZE>;

/// Event in 1-D line index space, before the engine knows which row or column it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEvent {
    Move { from: usize, to: usize },
    Merge { at: usize, level: Level },
}

impl LineEvent {
    /// Mirror indices for a line of length `len` (`idx -> len - 1 - idx`).
    pub fn flipped(self, len: usize) -> Self {
        let flip = |idx: usize| len - 1 - idx;
        match self {
            LineEvent::Move { from, to } => LineEvent::Move {
                from: flip(from),
                to: flip(to),
            },
            LineEvent::Merge { at, level } => LineEvent::Merge { at: flip(at), level },
        }
    }

    /// Lift into grid coordinates.
    ///
    /// `fixed` is the row index of a horizontal line or the column index of a
    /// vertical one. The local index becomes the column, then vertical lines
    /// are transposed so it lands in the row.
    pub fn place(self, fixed: usize, vertical: bool) -> Event {
        let coord = |idx: usize| {
            let c = Coord::new(fixed, idx);
            if vertical {
                c.transposed()
            } else {
                c
            }
        };
        match self {
            LineEvent::Move { from, to } => Event::Move {
                from: coord(from),
                to: coord(to),
            },
            LineEvent::Merge { at, level } => Event::Merge {
                at: coord(at),
                level,
            },
        }
    }
}

/// Result of compacting one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compacted {
    /// New line, same length as the input
    pub line: LineBuf,
    /// Local events in emission order
    pub events: ArrayVec<LineEvent, MAX_LINE_EVENTS>,
}

impl Compacted {
    /// Number of merges performed
    pub fn merges(&self) -> usize {
        self.events
            .iter()
            .filter(|ev| matches!(ev, LineEvent::Merge { .. }))
            .count()
    }
}

/// Compact a line toward index 0.
///
/// Pure and deterministic. Emits `Move` for every surviving tile, including
/// tiles that stay put (`from == to`), and `Move, Move, Merge` for each merged pair.
///
/// # Panics
///
/// If `line` is longer than `MAX_GRID_SIZE`.
pub fn compact(line: &[Level]) -> Compacted {
    let mut out = Compacted {
        line: ArrayVec::new(),
        events: ArrayVec::new(),
    };

    // (level, source index) of the tile waiting for a partner
    let mut held: Option<(Level, usize)> = None;

    for (i, &level) in line.iter().enumerate() {
        if level == EMPTY {
            continue;
        }

        match held {
            None => held = Some((level, i)),
            Some((buffered, src)) if buffered == level && buffered < MAX_LEVEL => {
                let to = out.line.len();
                let merged = buffered + 1;
                out.events.push(LineEvent::Move { from: src, to });
                out.events.push(LineEvent::Move { from: i, to });
                out.events.push(LineEvent::Merge { at: to, level: merged });
                out.line.push(merged);
                held = None;
            }
            Some((buffered, src)) => {
                let to = out.line.len();
                out.events.push(LineEvent::Move { from: src, to });
                out.line.push(buffered);
                held = Some((level, i));
            }
        }
    }

    if let Some((buffered, src)) = held {
        let to = out.line.len();
        out.events.push(LineEvent::Move { from: src, to });
        out.line.push(buffered);
    }

    while out.line.len() < line.len() {
        out.line.push(EMPTY);
    }

    out
}

/// Compact a line toward its last index.
///
/// Reverses, runs [`compact`], reverses the result back and flips every event
/// index so coordinates refer to the original orientation.
pub fn compact_toward_last(line: &[Level]) -> Compacted {
    let reversed: LineBuf = line.iter().rev().copied().collect();
    let mut out = compact(&reversed);
    out.line.reverse();
    for ev in out.events.iter_mut() {
        *ev = ev.flipped(line.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: usize, to: usize) -> LineEvent {
        LineEvent::Move { from, to }
    }

    fn merge(at: usize, level: Level) -> LineEvent {
        LineEvent::Merge { at, level }
    }

    #[test]
    fn test_pair_then_single() {
        let out = compact(&[1, 1, 0, 2]);
        assert_eq!(out.line.as_slice(), &[2, 2, 0, 0]);
        assert_eq!(
            out.events.as_slice(),
            &[mv(0, 0), mv(1, 0), merge(0, 2), mv(3, 1)]
        );
    }

    #[test]
    fn test_empty_line_has_no_events() {
        let out = compact(&[0, 0, 0, 0]);
        assert_eq!(out.line.as_slice(), &[0, 0, 0, 0]);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_triple_merges_first_pair_only() {
        let out = compact(&[1, 1, 1, 0]);
        assert_eq!(out.line.as_slice(), &[2, 1, 0, 0]);
        assert_eq!(
            out.events.as_slice(),
            &[mv(0, 0), mv(1, 0), merge(0, 2), mv(2, 1)]
        );
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let out = compact(&[2, 1, 1, 0]);
        assert_eq!(out.line.as_slice(), &[2, 2, 0, 0]);
        assert_eq!(out.merges(), 1);
    }

    #[test]
    fn test_four_equal_make_two_pairs() {
        let out = compact(&[3, 3, 3, 3]);
        assert_eq!(out.line.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(out.merges(), 2);
        assert_eq!(out.events.len(), 6);
    }

    #[test]
    fn test_gap_between_equal_levels_still_merges() {
        let out = compact(&[0, 2, 0, 2]);
        assert_eq!(out.line.as_slice(), &[3, 0, 0, 0]);
        assert_eq!(out.events.as_slice(), &[mv(1, 0), mv(3, 0), merge(0, 3)]);
    }

    #[test]
    fn test_different_levels_only_slide() {
        let out = compact(&[0, 1, 0, 2]);
        assert_eq!(out.line.as_slice(), &[1, 2, 0, 0]);
        assert_eq!(out.events.as_slice(), &[mv(1, 0), mv(3, 1)]);
    }

    #[test]
    fn test_compacted_line_only_emits_stationary_moves() {
        let out = compact(&[1, 2, 3, 0]);
        assert_eq!(out.line.as_slice(), &[1, 2, 3, 0]);
        assert!(out
            .events
            .iter()
            .all(|ev| matches!(ev, LineEvent::Move { from, to } if from == to)));
    }

    #[test]
    fn test_toward_last_mirrors_indices() {
        let out = compact_toward_last(&[2, 0, 1, 1]);
        assert_eq!(out.line.as_slice(), &[0, 0, 2, 2]);
        assert_eq!(
            out.events.as_slice(),
            &[mv(3, 3), mv(2, 3), merge(3, 2), mv(0, 2)]
        );
    }

    #[test]
    fn test_flipped_is_an_involution() {
        let ev = merge(1, 4);
        assert_eq!(ev.flipped(4), merge(2, 4));
        assert_eq!(ev.flipped(4).flipped(4), ev);
    }

    #[test]
    fn test_place_horizontal_and_vertical() {
        let ev = mv(3, 0);
        assert_eq!(
            ev.place(2, false),
            Event::Move {
                from: Coord::new(2, 3),
                to: Coord::new(2, 0)
            }
        );
        assert_eq!(
            ev.place(2, true),
            Event::Move {
                from: Coord::new(3, 2),
                to: Coord::new(0, 2)
            }
        );
    }

    #[test]
    fn test_max_level_tiles_slide_without_merging() {
        let out = compact(&[0, MAX_LEVEL, MAX_LEVEL, 0]);
        assert_eq!(out.line.as_slice(), &[MAX_LEVEL, MAX_LEVEL, 0, 0]);
        assert_eq!(out.merges(), 0);

        let out = compact(&[MAX_LEVEL - 1, MAX_LEVEL - 1, 0, 0]);
        assert_eq!(out.line.as_slice(), &[MAX_LEVEL, 0, 0, 0]);
    }

    #[test]
    fn test_max_size_line_fits_event_buffer() {
        let out = compact(&[1; MAX_GRID_SIZE]);
        assert_eq!(out.events.len(), MAX_LINE_EVENTS);
        assert_eq!(out.line.as_slice(), &[2, 2, 2, 2, 0, 0, 0, 0]);
    }
}
