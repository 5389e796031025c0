// Adjacent-pair validation.
//
// The second stage: every ordered pair drawn from two neighbouring harmony
// sets is checked against the two-voice motion rules. Survivors become the
// two-note fragments that the expansion stages merge into longer runs.

use crate::expand::Fragment;
use crate::rules::{RuleSet, is_melodic};
use cantus_theory::{Interval, Pitch};

/// Check one candidate pair against one cantus pair, cheapest rule first.
pub fn is_valid_pair(cf0: Pitch, cf1: Pitch, p0: Pitch, p1: Pitch, rules: &RuleSet) -> bool {
    let melodic = Interval::between(p0, p1);
    if !is_melodic(melodic) {
        return false;
    }
    if p0 == p1 {
        return false;
    }

    let vertical0 = Interval::between(cf0, p0);
    let vertical1 = Interval::between(cf1, p1);
    if rules.is_fifth(vertical0) && rules.is_fifth(vertical1) {
        return false;
    }
    if rules.is_octave(vertical0) && rules.is_octave(vertical1) {
        return false;
    }

    // A perfect consonance may only be reached in contrary or oblique
    // motion.
    let cantus_motion = Interval::between(cf0, cf1);
    if rules.is_perfect(vertical1) && cantus_motion.direction() == melodic.direction() {
        return false;
    }

    // Voice exchange: the lines swap letter names, octaves ignored.
    !(p0.same_name(cf1) && p1.same_name(cf0))
}

/// One bucket of validated two-note fragments per adjacent position slot.
pub fn valid_pairs(
    cantus: &[Pitch],
    harmonies: &[Vec<Pitch>],
    rules: &RuleSet,
) -> Vec<Vec<Fragment>> {
    let mut buckets = Vec::with_capacity(harmonies.len().saturating_sub(1));
    for (offset, window) in harmonies.windows(2).enumerate() {
        let mut bucket = Vec::new();
        for &p0 in &window[0] {
            for &p1 in &window[1] {
                if is_valid_pair(cantus[offset], cantus[offset + 1], p0, p1, rules) {
                    bucket.push(vec![p0, p1]);
                }
            }
        }
        buckets.push(bucket);
    }
    buckets
}
