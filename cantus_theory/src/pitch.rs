// Spelled pitch representation.
//
// A pitch is a diatonic letter step (C=0 .. B=6), a chromatic pitch class
// (0-11), and a scientific octave. Keeping the letter separate from the
// class preserves spelling: F#4 and Gb4 sound the same but sit on different
// staff positions, and the counterpoint rules care about the difference.
//
// `height` (octave * 12 + class) gives the total chromatic ordering used for
// all semitone arithmetic; the MIDI number is height + 12, so middle C
// (C4, height 48) is MIDI 60.

use crate::name;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Semitone offset of each natural letter within the octave, C D E F G A B.
pub const LETTER_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Lowercase letter name for each diatonic step.
pub const LETTERS: [char; 7] = ['c', 'd', 'e', 'f', 'g', 'a', 'b'];

/// A spelled pitch: letter step, chromatic class, octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    /// Diatonic letter step, 0 = C .. 6 = B.
    pub step: u8,
    /// Chromatic pitch class, 0 = C .. 11 = B.
    pub class: u8,
    /// Octave of the sounding height (octave 4 starts at middle C). For
    /// wrapped spellings like Cb and B# this differs from the letter's
    /// octave; see [`Pitch::letter_octave`].
    pub octave: i16,
}

impl Pitch {
    /// Build a pitch, normalizing the step mod 7 and folding chromatic
    /// overflow into the octave (class 12 becomes class 0 an octave up).
    pub fn new(step: i32, class: i32, octave: i32) -> Self {
        Pitch {
            step: step.rem_euclid(7) as u8,
            class: class.rem_euclid(12) as u8,
            octave: (octave + class.div_euclid(12)) as i16,
        }
    }

    /// Total chromatic height: octave * 12 + class. C4 is 48.
    pub fn height(self) -> i32 {
        self.octave as i32 * 12 + self.class as i32
    }

    /// MIDI note number (middle C = 60).
    pub fn midi(self) -> i32 {
        self.height() + 12
    }

    /// Letter name of the step, 'c' .. 'b'.
    pub fn letter(self) -> char {
        LETTERS[self.step as usize]
    }

    /// Spelled name without the octave: "c", "fs", "bf".
    pub fn spelled_name(self) -> String {
        name::spelling(self.step, self.class)
    }

    /// True when both pitches carry the same spelled name (letter and
    /// accidental), octave ignored.
    pub fn same_name(self, other: Pitch) -> bool {
        self.step == other.step && self.class == other.class
    }

    /// Position on the diatonic letter staff, 7 per octave. Derived from the
    /// height so that wrapped spellings (Cb, B#) land next to their letter
    /// neighbours rather than an octave off.
    pub fn diatonic_position(self) -> i32 {
        let natural = LETTER_SEMITONES[self.step as usize];
        let octave = (self.height() - natural + 6).div_euclid(12);
        octave * 7 + self.step as i32
    }

    /// Octave number of the letter name, the one a pitch name carries.
    /// Cb4 sounds at height 47 (octave 3) but its letter sits in octave 4;
    /// B#3 sounds at height 48 but names octave 3.
    pub fn letter_octave(self) -> i32 {
        let natural = LETTER_SEMITONES[self.step as usize];
        let alteration = (self.class as i32 - natural + 6).rem_euclid(12) - 6;
        self.octave as i32 - (natural + alteration).div_euclid(12)
    }
}

impl Add for Pitch {
    type Output = Pitch;

    /// Transpose: letter steps compose mod 7, heights add, and the result's
    /// class/octave are re-derived from the summed height.
    fn add(self, other: Pitch) -> Pitch {
        let height = self.height() + other.height();
        Pitch::new(
            self.step as i32 + other.step as i32,
            height.rem_euclid(12),
            height.div_euclid(12),
        )
    }
}

impl Sub for Pitch {
    type Output = Pitch;

    fn sub(self, other: Pitch) -> Pitch {
        let height = self.height() - other.height();
        Pitch::new(
            self.step as i32 - other.step as i32,
            height.rem_euclid(12),
            height.div_euclid(12),
        )
    }
}

impl Neg for Pitch {
    type Output = Pitch;

    /// Invert a transposition offset: `p + offset + (-offset) == p`.
    fn neg(self) -> Pitch {
        let height = -self.height();
        Pitch::new(
            -(self.step as i32),
            height.rem_euclid(12),
            height.div_euclid(12),
        )
    }
}

impl Ord for Pitch {
    /// Chromatic ordering; enharmonic ties break by letter so sorting is
    /// total and deterministic.
    fn cmp(&self, other: &Self) -> Ordering {
        self.height()
            .cmp(&other.height())
            .then(self.step.cmp(&other.step))
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelled_name(), self.letter_octave())
    }
}
