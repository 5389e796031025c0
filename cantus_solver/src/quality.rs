// Whole-line quality filter.
//
// The hard rules upstream only keep a line legal; this filter keeps it
// worth singing. Every full-length candidate must clear four heuristics,
// each a strict majority or cap, so a line that merely ties is out.

use cantus_theory::{Interval, Pitch};
use std::collections::BTreeMap;

/// Accept a full-length candidate line against its cantus.
pub fn is_good(candidate: &[Pitch], cantus: &[Pitch]) -> bool {
    has_imperfect_majority(candidate, cantus)
        && is_mostly_stepwise(candidate)
        && is_varied(candidate)
        && is_mostly_contrary(candidate, cantus)
}

/// Strictly more imperfect consonances (3rds, 6ths) than perfect ones
/// (unisons, 5ths, 8ves), counted by semi-simple interval class. The
/// cadential seconds, fourths, and sevenths count for neither side.
fn has_imperfect_majority(candidate: &[Pitch], cantus: &[Pitch]) -> bool {
    let mut imperfect = 0;
    let mut perfect = 0;
    for (&pitch, &cantus_pitch) in candidate.iter().zip(cantus) {
        match Interval::between(cantus_pitch, pitch).semi_simple() {
            3 | 6 => imperfect += 1,
            1 | 5 | 8 => perfect += 1,
            _ => {}
        }
    }
    imperfect > perfect
}

/// Strictly more steps than leaps.
fn is_mostly_stepwise(candidate: &[Pitch]) -> bool {
    let mut steps = 0;
    let mut leaps = 0;
    for pair in candidate.windows(2) {
        if Interval::between(pair[0], pair[1]).is_step() {
            steps += 1;
        } else {
            leaps += 1;
        }
    }
    steps > leaps
}

/// No pitch overworked, no figure repeated.
fn is_varied(candidate: &[Pitch]) -> bool {
    let mut counts: BTreeMap<Pitch, usize> = BTreeMap::new();
    for &pitch in candidate {
        *counts.entry(pitch).or_insert(0) += 1;
    }
    if counts.values().any(|&n| n > 3) {
        return false;
    }
    if counts.values().filter(|&&n| n == 3).count() >= 2 {
        return false;
    }

    // See-sawing on one pitch: x y x z x.
    if candidate.windows(5).any(|w| w[0] == w[2] && w[2] == w[4]) {
        return false;
    }

    // The same two-note figure twice in a row: x y x y.
    !candidate
        .windows(4)
        .any(|w| (w[0], w[1]) == (w[2], w[3]))
}

/// Strictly more contrary motion than similar. Oblique motion, where one
/// voice holds still, lands on the contrary side.
fn is_mostly_contrary(candidate: &[Pitch], cantus: &[Pitch]) -> bool {
    let mut contrary = 0;
    let mut similar = 0;
    for (pair, cantus_pair) in candidate.windows(2).zip(cantus.windows(2)) {
        let voice = Interval::between(pair[0], pair[1]).direction();
        let held = Interval::between(cantus_pair[0], cantus_pair[1]).direction();
        if voice == held {
            similar += 1;
        } else {
            contrary += 1;
        }
    }
    contrary > similar
}
