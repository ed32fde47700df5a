//! Line compactor tests - slide and merge semantics of a single line

use tui_2048::core::line::{compact, compact_toward_last, LineEvent};
use tui_2048::core::SimpleRng;
use tui_2048::core::RandomSource;
use tui_2048::types::{Level, EMPTY};

fn non_zero(line: &[Level]) -> usize {
    line.iter().filter(|l| **l != EMPTY).count()
}

/// Random line of length `n` with levels 0..=3, so equal neighbours are common
fn random_line(rng: &mut SimpleRng, n: usize) -> Vec<Level> {
    (0..n).map(|_| rng.next_int(4) as Level).collect()
}

#[test]
fn test_pair_then_single_scenario() {
    let out = compact(&[1, 1, 0, 2]);
    assert_eq!(out.line.as_slice(), &[2, 2, 0, 0]);
    assert_eq!(
        out.events.as_slice(),
        &[
            LineEvent::Move { from: 0, to: 0 },
            LineEvent::Move { from: 1, to: 0 },
            LineEvent::Merge { at: 0, level: 2 },
            LineEvent::Move { from: 3, to: 1 },
        ]
    );
}

#[test]
fn test_run_of_three_merges_first_pair() {
    let out = compact(&[1, 1, 1, 0]);
    assert_eq!(out.line.as_slice(), &[2, 1, 0, 0]);

    let out = compact(&[0, 1, 1, 1]);
    assert_eq!(out.line.as_slice(), &[2, 1, 0, 0]);

    // Toward the last index the pair nearest that end merges.
    let out = compact_toward_last(&[1, 1, 1, 0]);
    assert_eq!(out.line.as_slice(), &[0, 0, 1, 2]);
}

#[test]
fn test_merged_result_is_not_merged_again() {
    assert_eq!(compact(&[1, 1, 2, 0]).line.as_slice(), &[2, 2, 0, 0]);
    assert_eq!(compact(&[2, 2, 2, 2]).line.as_slice(), &[3, 3, 0, 0]);
}

#[test]
fn test_output_length_is_always_input_length() {
    for n in 2..=8 {
        let line = vec![1; n];
        assert_eq!(compact(&line).line.len(), n);
        assert_eq!(compact_toward_last(&line).line.len(), n);
    }
}

#[test]
fn test_non_zero_count_drops_iff_merged() {
    let mut rng = SimpleRng::new(7);
    for _ in 0..500 {
        let n = 2 + rng.next_int(7);
        let line = random_line(&mut rng, n);
        let out = compact(&line);

        let before = non_zero(&line);
        let after = non_zero(&out.line);
        assert!(after <= before, "{line:?} -> {:?}", out.line);
        assert_eq!(after < before, out.merges() > 0, "{line:?}");
        assert_eq!(before - after, out.merges());
    }
}

#[test]
fn test_compacted_line_without_pairs_is_unchanged() {
    for line in [[1, 2, 3, 4], [3, 1, 0, 0], [0, 0, 0, 0], [5, 0, 0, 0]] {
        let out = compact(&line);
        assert_eq!(out.line.as_slice(), &line);
        assert_eq!(out.merges(), 0);
        assert!(out
            .events
            .iter()
            .all(|ev| matches!(ev, LineEvent::Move { from, to } if from == to)));
    }
}

#[test]
fn test_toward_last_is_mirror_of_toward_first() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..200 {
        let line = random_line(&mut rng, 6);
        let reversed: Vec<Level> = line.iter().rev().copied().collect();

        let forward = compact(&reversed);
        let backward = compact_toward_last(&line);

        let mirrored: Vec<Level> = forward.line.iter().rev().copied().collect();
        assert_eq!(backward.line.as_slice(), mirrored.as_slice());

        let flipped: Vec<LineEvent> = forward.events.iter().map(|ev| ev.flipped(6)).collect();
        assert_eq!(backward.events.as_slice(), flipped.as_slice());
    }
}

#[test]
fn test_every_surviving_tile_has_one_move() {
    let line = [0, 3, 3, 0, 1, 2, 2, 0];
    let out = compact(&line);
    let moves = out
        .events
        .iter()
        .filter(|ev| matches!(ev, LineEvent::Move { .. }))
        .count();
    assert_eq!(moves, non_zero(&line));
    assert_eq!(out.line.as_slice(), &[4, 1, 3, 0, 0, 0, 0, 0]);
}
