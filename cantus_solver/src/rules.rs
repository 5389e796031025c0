// Interval rule tables.
//
// Every melodic and vertical judgement in the solver is a membership test
// against one of these tables. An interval matches an entry when both its
// quality and its signed size agree, so a diminished fifth never slips in
// where a perfect fifth is wanted, and a compound interval never matches a
// simple entry.
//
// The tables come in two mirrored sets: one for a counter-voice above the
// cantus firmus (positive sizes) and one for a voice below (negative
// sizes). The unison is shared between both octave tables.

use cantus_theory::Quality::{Major, Minor, Perfect};
use cantus_theory::{Interval, Quality};

const FIFTHS_ABOVE: &[(Quality, i32)] = &[(Perfect, 5), (Perfect, 12)];

const OCTAVES_ABOVE: &[(Quality, i32)] = &[(Perfect, 1), (Perfect, 8), (Perfect, 15)];

const VERTICALS_ABOVE: &[(Quality, i32)] = &[
    (Minor, 3),
    (Major, 3),
    (Perfect, 5),
    (Minor, 6),
    (Major, 6),
    (Perfect, 8),
    (Minor, 10),
    (Major, 10),
];

const WIDE_VERTICALS_ABOVE: &[(Quality, i32)] = &[
    (Perfect, 12),
    (Minor, 13),
    (Major, 13),
    (Perfect, 15),
    (Minor, 17),
    (Major, 17),
];

const CANTIZANS_ABOVE: &[(Quality, i32)] = &[(Major, 7), (Major, 14)];

const TENORIZANS_ABOVE: &[(Quality, i32)] = &[(Major, 2), (Major, 9), (Major, 16)];

const FIFTHS_BELOW: &[(Quality, i32)] = &[(Perfect, -5), (Perfect, -12)];

const OCTAVES_BELOW: &[(Quality, i32)] = &[(Perfect, 1), (Perfect, -8), (Perfect, -15)];

const VERTICALS_BELOW: &[(Quality, i32)] = &[
    (Minor, -3),
    (Major, -3),
    (Perfect, -5),
    (Minor, -6),
    (Major, -6),
    (Perfect, -8),
    (Minor, -10),
    (Major, -10),
];

const WIDE_VERTICALS_BELOW: &[(Quality, i32)] = &[
    (Perfect, -12),
    (Minor, -13),
    (Major, -13),
    (Perfect, -15),
    (Minor, -17),
    (Major, -17),
];

const CANTIZANS_BELOW: &[(Quality, i32)] = &[(Minor, -2), (Minor, -9), (Minor, -16)];

const TENORIZANS_BELOW: &[(Quality, i32)] = &[(Minor, -7), (Minor, -14)];

/// Melodic intervals a voice may move by, matched on absolute size so each
/// entry covers both directions.
const MELODIC: &[(Quality, i32)] = &[
    (Minor, 2),
    (Major, 2),
    (Minor, 3),
    (Major, 3),
    (Perfect, 4),
    (Perfect, 5),
    (Minor, 6),
    (Perfect, 8),
];

/// Consecutive interval pairs that outline a triad. Directed: both moves
/// point the same way, and a change of direction breaks the chord.
const ARPEGGIOS: &[((Quality, i32), (Quality, i32))] = &[
    ((Major, 3), (Minor, 3)),
    ((Minor, 3), (Major, 3)),
    ((Minor, 3), (Minor, 3)),
    ((Major, 3), (Major, 3)),
    ((Minor, 3), (Perfect, 4)),
    ((Major, 3), (Perfect, 4)),
    ((Perfect, 4), (Minor, 3)),
    ((Perfect, 4), (Major, 3)),
    ((Major, -3), (Minor, -3)),
    ((Minor, -3), (Major, -3)),
    ((Minor, -3), (Minor, -3)),
    ((Major, -3), (Major, -3)),
    ((Minor, -3), (Perfect, -4)),
    ((Major, -3), (Perfect, -4)),
    ((Perfect, -4), (Minor, -3)),
    ((Perfect, -4), (Major, -3)),
];

/// The vertical tables for one voice direction.
pub struct RuleSet {
    pub voice_above: bool,
    fifths: &'static [(Quality, i32)],
    octaves: &'static [(Quality, i32)],
    verticals: &'static [(Quality, i32)],
    wide_verticals: &'static [(Quality, i32)],
    cantizans: &'static [(Quality, i32)],
    tenorizans: &'static [(Quality, i32)],
}

const ABOVE: RuleSet = RuleSet {
    voice_above: true,
    fifths: FIFTHS_ABOVE,
    octaves: OCTAVES_ABOVE,
    verticals: VERTICALS_ABOVE,
    wide_verticals: WIDE_VERTICALS_ABOVE,
    cantizans: CANTIZANS_ABOVE,
    tenorizans: TENORIZANS_ABOVE,
};

const BELOW: RuleSet = RuleSet {
    voice_above: false,
    fifths: FIFTHS_BELOW,
    octaves: OCTAVES_BELOW,
    verticals: VERTICALS_BELOW,
    wide_verticals: WIDE_VERTICALS_BELOW,
    cantizans: CANTIZANS_BELOW,
    tenorizans: TENORIZANS_BELOW,
};

impl RuleSet {
    pub fn for_direction(voice_above: bool) -> &'static RuleSet {
        if voice_above { &ABOVE } else { &BELOW }
    }

    /// Perfect fifth or twelfth on this side of the cantus.
    pub fn is_fifth(&self, interval: Interval) -> bool {
        in_table(self.fifths, interval)
    }

    /// Unison, octave, or fifteenth on this side of the cantus.
    pub fn is_octave(&self, interval: Interval) -> bool {
        in_table(self.octaves, interval)
    }

    pub fn is_perfect(&self, interval: Interval) -> bool {
        self.is_fifth(interval) || self.is_octave(interval)
    }

    /// Consonance usable at an interior position. The wide set adds the
    /// compound intervals beyond the tenth.
    pub fn is_vertical(&self, interval: Interval, wide: bool) -> bool {
        in_table(self.verticals, interval) || (wide && in_table(self.wide_verticals, interval))
    }

    /// Opening consonance. The two directions are uneven: above may open
    /// at any perfect consonance, below only at a unison or octave so the
    /// cantus keeps the lowest-sounding final degree.
    pub fn is_opening(&self, interval: Interval) -> bool {
        if self.voice_above {
            self.is_perfect(interval)
        } else {
            self.is_octave(interval)
        }
    }

    /// Penultimate-position cadence tone, measured against the final
    /// cantus pitch. A falling cantus calls for the cantizans (leading
    /// tone), a rising one for the tenorizans (upper neighbour).
    pub fn is_cadential(&self, interval: Interval, cantus_rises: bool) -> bool {
        let table = if cantus_rises {
            self.tenorizans
        } else {
            self.cantizans
        };
        in_table(table, interval)
    }

    /// Closing consonance: the line must end on the final's unison or
    /// octave.
    pub fn is_closing(&self, interval: Interval) -> bool {
        self.is_octave(interval)
    }
}

/// Legal melodic motion between two consecutive voice pitches, direction
/// ignored.
pub fn is_melodic(interval: Interval) -> bool {
    MELODIC.contains(&(interval.quality(), interval.size().abs()))
}

/// True when two consecutive melodic moves outline a triad.
pub fn is_arpeggio(first: Interval, second: Interval) -> bool {
    ARPEGGIOS.contains(&(
        (first.quality(), first.size()),
        (second.quality(), second.size()),
    ))
}

fn in_table(table: &[(Quality, i32)], interval: Interval) -> bool {
    table.contains(&(interval.quality(), interval.size()))
}
