// Per-position harmony sets.
//
// The first stage of the pipeline: for every cantus position, collect the
// register pitches whose vertical interval is allowed there. Interior
// positions take the consonance table, the outer positions take stricter
// tables, and both cadential positions measure against the final cantus
// pitch rather than the local one.

use crate::rules::RuleSet;
use cantus_theory::{Interval, Pitch};

/// One allowed-pitch set per cantus position, in register order.
///
/// The caller guarantees at least four cantus notes.
pub fn harmonies(
    cantus: &[Pitch],
    register: &[Pitch],
    rules: &RuleSet,
    wide: bool,
) -> Vec<Vec<Pitch>> {
    let n = cantus.len();
    let last = cantus[n - 1];
    let mut sets = Vec::with_capacity(n);

    sets.push(matching(register, cantus[0], |iv| rules.is_opening(iv)));
    for &pitch in &cantus[1..n - 2] {
        sets.push(matching(register, pitch, |iv| rules.is_vertical(iv, wide)));
    }

    let rises = cantus[n - 2].height() < last.height();
    sets.push(matching(register, last, |iv| rules.is_cadential(iv, rises)));
    sets.push(matching(register, last, |iv| rules.is_closing(iv)));

    sets
}

fn matching(
    register: &[Pitch],
    cantus_pitch: Pitch,
    allowed: impl Fn(Interval) -> bool,
) -> Vec<Pitch> {
    register
        .iter()
        .copied()
        .filter(|&candidate| allowed(Interval::between(cantus_pitch, candidate)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantus_theory::name::parse_pitch;
    use cantus_theory::{Scale, ScaleKind};

    fn pitches(names: &str) -> Vec<Pitch> {
        names
            .split_whitespace()
            .map(|n| parse_pitch(n).unwrap())
            .collect()
    }

    fn c_major(low: i32, high: i32) -> Vec<Pitch> {
        Scale::new(ScaleKind::Major, 0).pitches_between(low, high)
    }

    #[test]
    fn test_voice_above_position_sets() {
        let cantus = pitches("c4 d4 e4 d4 c4");
        let register = c_major(48, 72); // C3 ..= C5
        let rules = RuleSet::for_direction(true);
        let sets = harmonies(&cantus, &register, rules, false);
        assert_eq!(sets.len(), 5);
        assert_eq!(sets[0], pitches("c4 g4 c5"));
        assert_eq!(sets[1], pitches("f4 a4 b4"));
        assert_eq!(sets[2], pitches("g4 b4 c5"));
        assert_eq!(sets[3], pitches("b4"), "falling cantus wants the leading tone");
        assert_eq!(sets[4], pitches("c4 c5"));
    }

    #[test]
    fn test_voice_below_position_sets() {
        let cantus = pitches("e4 d4 c4 b3 c4");
        let register = c_major(36, 60); // C2 ..= C4
        let rules = RuleSet::for_direction(false);
        let sets = harmonies(&cantus, &register, rules, false);
        assert_eq!(sets[0], pitches("e2 e3"), "below, the opening admits only octaves");
        assert_eq!(sets[1], pitches("b2 d3 f3 g3 b3"));
        assert_eq!(sets[2], pitches("a2 c3 e3 f3 a3"));
        assert_eq!(sets[3], pitches("d2 d3"), "rising cantus wants the upper neighbour");
        assert_eq!(sets[4], pitches("c2 c3 c4"));
    }

    #[test]
    fn test_wide_flag_reaches_further() {
        let cantus = pitches("c3 d3 e3 d3 c3");
        let register = c_major(48, 84); // C3 ..= C6
        let rules = RuleSet::for_direction(true);
        let narrow = harmonies(&cantus, &register, rules, false);
        let wide = harmonies(&cantus, &register, rules, true);
        assert_eq!(narrow[1], pitches("f3 a3 b3 d4 f4"));
        assert_eq!(wide[1], pitches("f3 a3 b3 d4 f4 a4 b4 d5 f5"));
    }

    #[test]
    fn test_unreachable_register_yields_empty_sets() {
        let cantus = pitches("c4 d4 e4 d4 c4");
        let register = pitches("c7 d7 e7");
        let rules = RuleSet::for_direction(true);
        let sets = harmonies(&cantus, &register, rules, true);
        assert_eq!(sets.len(), 5);
        assert!(sets.iter().all(|set| set.is_empty()));
    }
}
