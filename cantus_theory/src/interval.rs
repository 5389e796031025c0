// Directed intervals between spelled pitches.
//
// An interval stores just the signed letter-step distance and the signed
// semitone distance; the conventional 1-based size ("a fifth"), the quality
// (perfect, major, minor, augmented, diminished), the direction, and the
// octave-reduced class are all derived from those two numbers.
//
// The rule tables in the solver match intervals by (quality, size), so the
// same six semitones classify differently depending on spelling: B3-F4 is a
// diminished fifth, F4-B4 an augmented fourth. Only the first would match a
// table entry for fifths.

use crate::pitch::{LETTER_SEMITONES, Pitch};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interval quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Diminished,
    Minor,
    Perfect,
    Major,
    Augmented,
}

impl Quality {
    /// Conventional one-letter label: "P5", "M3", "m6", "A4", "d5".
    pub fn label(self) -> &'static str {
        match self {
            Quality::Diminished => "d",
            Quality::Minor => "m",
            Quality::Perfect => "P",
            Quality::Major => "M",
            Quality::Augmented => "A",
        }
    }
}

/// A directed interval: signed letter steps plus signed semitones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Signed diatonic step count (letter distance on the staff).
    pub steps: i32,
    /// Signed chromatic distance in semitones.
    pub semitones: i32,
}

impl Interval {
    /// Measure the interval from `a` to `b`; positive when `b` is higher.
    pub fn between(a: Pitch, b: Pitch) -> Interval {
        Interval {
            steps: b.diatonic_position() - a.diatonic_position(),
            semitones: b.height() - a.height(),
        }
    }

    /// Conventional 1-based signed size: unison 1, third up 3, fifth down -5.
    pub fn size(self) -> i32 {
        if self.steps >= 0 {
            self.steps + 1
        } else {
            self.steps - 1
        }
    }

    /// Melodic direction: 1 ascending, -1 descending, 0 static.
    pub fn direction(self) -> i32 {
        self.semitones.signum()
    }

    /// Quality derived by comparing the semitone span against the natural
    /// span of the letter distance. Unisons, fourths, fifths and their
    /// compounds are the perfect type; the rest are major/minor.
    pub fn quality(self) -> Quality {
        let steps = self.steps.abs();
        let semitones = self.semitones.abs();
        let simple = (steps % 7) as usize;
        let natural = LETTER_SEMITONES[simple] + (steps / 7) * 12;
        let offset = semitones - natural;
        let perfect_type = matches!(simple, 0 | 3 | 4);
        match (perfect_type, offset) {
            (true, 0) => Quality::Perfect,
            (false, 0) => Quality::Major,
            (false, -1) => Quality::Minor,
            (_, o) if o > 0 => Quality::Augmented,
            _ => Quality::Diminished,
        }
    }

    /// Octave-reduced generic size that keeps octaves distinct from unisons:
    /// unison 1, seconds through sevenths 2-7, octaves and their compounds 8.
    /// Tenths reduce to 3, twelfths to 5, thirteenths to 6.
    pub fn semi_simple(self) -> i32 {
        let n = self.size().abs();
        if n == 1 {
            return 1;
        }
        let r = (n - 1) % 7;
        if r == 0 { 8 } else { r + 1 }
    }

    /// Stepwise melodic motion: generic size at most a second.
    pub fn is_step(self) -> bool {
        self.size().abs() <= 2
    }

    /// Melodic leap: generic size of a third or more.
    pub fn is_leap(self) -> bool {
        self.size().abs() >= 3
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality().label(), self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(step: i32, class: i32, octave: i32) -> Pitch {
        Pitch::new(step, class, octave)
    }

    #[test]
    fn test_simple_ascending_intervals() {
        let c4 = p(0, 0, 4);

        let fifth = Interval::between(c4, p(4, 7, 4)); // C4 -> G4
        assert_eq!(fifth.size(), 5);
        assert_eq!(fifth.quality(), Quality::Perfect);
        assert_eq!(fifth.direction(), 1);

        let third = Interval::between(c4, p(2, 4, 4)); // C4 -> E4
        assert_eq!(third.size(), 3);
        assert_eq!(third.quality(), Quality::Major);

        let second = Interval::between(p(6, 11, 3), c4); // B3 -> C4
        assert_eq!(second.size(), 2);
        assert_eq!(second.quality(), Quality::Minor);
    }

    #[test]
    fn test_descending_intervals_are_negative() {
        let e4 = p(2, 4, 4);
        let c4 = p(0, 0, 4);
        let down = Interval::between(e4, c4);
        assert_eq!(down.size(), -3);
        assert_eq!(down.quality(), Quality::Major);
        assert_eq!(down.direction(), -1);
    }

    #[test]
    fn test_spelling_distinguishes_tritones() {
        let b3 = p(6, 11, 3);
        let f4 = p(3, 5, 4);
        // Same six semitones both ways, different letter spans.
        let dim5 = Interval::between(b3, f4);
        assert_eq!(dim5.size(), 5);
        assert_eq!(dim5.quality(), Quality::Diminished);

        let aug4 = Interval::between(f4, p(6, 11, 4));
        assert_eq!(aug4.size(), 4);
        assert_eq!(aug4.quality(), Quality::Augmented);

        // Descending B -> F spans four letters, so it is the augmented
        // fourth, not the diminished fifth.
        let down = Interval::between(b3, p(3, 5, 3));
        assert_eq!(down.size(), -4);
        assert_eq!(down.quality(), Quality::Augmented);
    }

    #[test]
    fn test_unison_and_octaves() {
        let c4 = p(0, 0, 4);
        let unison = Interval::between(c4, c4);
        assert_eq!(unison.size(), 1);
        assert_eq!(unison.quality(), Quality::Perfect);
        assert_eq!(unison.direction(), 0);

        let octave = Interval::between(c4, p(0, 0, 5));
        assert_eq!(octave.size(), 8);
        assert_eq!(octave.quality(), Quality::Perfect);

        let double = Interval::between(c4, p(0, 0, 6));
        assert_eq!(double.size(), 15);
        assert_eq!(double.quality(), Quality::Perfect);
    }

    #[test]
    fn test_compound_qualities() {
        let c3 = p(0, 0, 3);
        let tenth = Interval::between(c3, p(2, 4, 4)); // C3 -> E4
        assert_eq!(tenth.size(), 10);
        assert_eq!(tenth.quality(), Quality::Major);

        let twelfth = Interval::between(c3, p(4, 7, 4)); // C3 -> G4
        assert_eq!(twelfth.size(), 12);
        assert_eq!(twelfth.quality(), Quality::Perfect);

        let seventeenth = Interval::between(c3, p(2, 4, 5)); // C3 -> E5
        assert_eq!(seventeenth.size(), 17);
        assert_eq!(seventeenth.quality(), Quality::Major);
    }

    #[test]
    fn test_semi_simple_reduction() {
        let c4 = p(0, 0, 4);
        let cases = [
            (p(0, 0, 4), 1),  // unison stays 1
            (p(1, 2, 4), 2),  // second
            (p(2, 4, 4), 3),  // third
            (p(0, 0, 5), 8),  // octave maps to 8, not back to 1
            (p(1, 2, 5), 2),  // ninth -> 2
            (p(2, 4, 5), 3),  // tenth -> 3
            (p(4, 7, 5), 5),  // twelfth -> 5
            (p(5, 9, 5), 6),  // thirteenth -> 6
            (p(0, 0, 6), 8),  // double octave -> 8
            (p(2, 4, 6), 3),  // seventeenth -> 3
        ];
        for (other, expected) in cases {
            let iv = Interval::between(c4, other);
            assert_eq!(
                iv.semi_simple(),
                expected,
                "semi-simple class of {} should be {}",
                iv,
                expected
            );
        }

        // Direction does not matter.
        let down = Interval::between(p(2, 4, 5), c4);
        assert_eq!(down.semi_simple(), 3);
    }

    #[test]
    fn test_steps_and_leaps() {
        let d4 = p(1, 2, 4);
        assert!(Interval::between(d4, p(2, 4, 4)).is_step()); // D4 -> E4
        assert!(Interval::between(d4, p(0, 0, 4)).is_step()); // D4 -> C4
        assert!(Interval::between(d4, p(3, 5, 4)).is_leap()); // D4 -> F4
        assert!(Interval::between(d4, p(1, 2, 5)).is_leap()); // D4 -> D5
    }

    #[test]
    fn test_display_format() {
        let c4 = p(0, 0, 4);
        assert_eq!(Interval::between(c4, p(4, 7, 4)).to_string(), "P5");
        assert_eq!(Interval::between(c4, p(2, 3, 4)).to_string(), "m3");
        assert_eq!(Interval::between(p(4, 7, 4), c4).to_string(), "P-5");
        assert_eq!(Interval::between(c4, p(4, 7, 5)).to_string(), "P12");
    }
}
