// Fragment merging.
//
// The middle stages of the pipeline all run the same engine: adjacent
// buckets of k-note fragments merge into (k+1)-note fragments wherever a
// left fragment's tail overlaps a right fragment's head, and a window
// predicate decides which merges survive. Triplets get the arpeggio,
// static-harmony, and leap-closing rules; quadruplets get the jumpiness
// rule; the remaining rounds merge unconditionally until one bucket of
// full-length lines is left.

use crate::rules::is_arpeggio;
use cantus_theory::{Interval, Pitch};

/// A run of candidate pitches aligned with consecutive cantus positions.
pub type Fragment = Vec<Pitch>;

/// Merge adjacent buckets of fragments, keeping merges that `keep`
/// accepts together with the cantus window they span. Always returns one
/// bucket fewer than it was given.
pub fn expand(
    buckets: &[Vec<Fragment>],
    cantus: &[Pitch],
    keep: impl Fn(&[Pitch], &[Pitch]) -> bool,
) -> Vec<Vec<Fragment>> {
    let mut out = Vec::with_capacity(buckets.len().saturating_sub(1));
    for (offset, pair) in buckets.windows(2).enumerate() {
        let mut merged_bucket = Vec::new();
        for left in &pair[0] {
            for right in &pair[1] {
                let Some((&next, head)) = right.split_last() else {
                    continue;
                };
                if left[1..] != *head {
                    continue;
                }
                let mut merged = left.clone();
                merged.push(next);
                if keep(&merged, &cantus[offset..offset + merged.len()]) {
                    merged_bucket.push(merged);
                }
            }
        }
        out.push(merged_bucket);
    }
    out
}

/// Three-note window rules, applied when pairs merge into triplets.
pub fn is_valid_triplet(fragment: &[Pitch], cantus: &[Pitch]) -> bool {
    let first = Interval::between(fragment[0], fragment[1]);
    let second = Interval::between(fragment[1], fragment[2]);
    if is_arpeggio(first, second) {
        return false;
    }

    // Three identical vertical classes in a row read as standing still.
    let digits: Vec<i32> = fragment
        .iter()
        .zip(cantus)
        .map(|(&pitch, &cantus_pitch)| Interval::between(cantus_pitch, pitch).semi_simple())
        .collect();
    if digits.windows(2).all(|w| w[0] == w[1]) {
        return false;
    }

    closes_leap(first.semitones, second.semitones)
}

/// A leap of five or more semitones must close with a one- or
/// two-semitone step back the other way. Repetitions never reach this
/// check, so the first span is nonzero.
fn closes_leap(first: i32, second: i32) -> bool {
    debug_assert!(first != 0, "pair validation removes repeated pitches");
    if first.abs() < 5 {
        return true;
    }
    second == -first.signum() || second == -2 * first.signum()
}

/// Four-note window rule: at least one of the three melodic moves must
/// stay within three semitones.
pub fn is_valid_quadruplet(fragment: &[Pitch]) -> bool {
    fragment
        .windows(2)
        .any(|pair| Interval::between(pair[0], pair[1]).semitones.abs() <= 3)
}
