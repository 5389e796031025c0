// Diatonic modes, scale instances, and voice registers.
//
// The seven modes are rotations of the major step pattern, named the
// old-fashioned way (major, dorian, .., locrian). A Scale pins a mode to a
// tonic pitch class and can spell any of its members at a given MIDI note,
// which is how registers (the pitch supply for a generated voice) are built.
//
// Voice ranges are the usual SATB working compasses, expressed as half-open
// MIDI spans.

use crate::name;
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// The seven diatonic modes, each a rotation of the major step pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Major,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 7] = [
        ScaleKind::Major,
        ScaleKind::Dorian,
        ScaleKind::Phrygian,
        ScaleKind::Lydian,
        ScaleKind::Mixolydian,
        ScaleKind::Aeolian,
        ScaleKind::Locrian,
    ];

    /// Whole/half step pattern from the tonic.
    pub fn steps(self) -> [u8; 7] {
        match self {
            ScaleKind::Major => [2, 2, 1, 2, 2, 2, 1],
            ScaleKind::Dorian => [2, 1, 2, 2, 2, 1, 2],
            ScaleKind::Phrygian => [1, 2, 2, 2, 1, 2, 2],
            ScaleKind::Lydian => [2, 2, 2, 1, 2, 2, 1],
            ScaleKind::Mixolydian => [2, 2, 1, 2, 2, 1, 2],
            ScaleKind::Aeolian => [2, 1, 2, 2, 1, 2, 2],
            ScaleKind::Locrian => [1, 2, 2, 1, 2, 2, 2],
        }
    }

    /// Parse a lowercase mode name.
    pub fn parse(text: &str) -> Option<ScaleKind> {
        match text {
            "major" => Some(ScaleKind::Major),
            "dorian" => Some(ScaleKind::Dorian),
            "phrygian" => Some(ScaleKind::Phrygian),
            "lydian" => Some(ScaleKind::Lydian),
            "mixolydian" => Some(ScaleKind::Mixolydian),
            "aeolian" => Some(ScaleKind::Aeolian),
            "locrian" => Some(ScaleKind::Locrian),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::Dorian => "dorian",
            ScaleKind::Phrygian => "phrygian",
            ScaleKind::Lydian => "lydian",
            ScaleKind::Mixolydian => "mixolydian",
            ScaleKind::Aeolian => "aeolian",
            ScaleKind::Locrian => "locrian",
        }
    }
}

/// A scale instance: a mode plus its tonic pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub kind: ScaleKind,
    /// Pitch class of the tonic, 0 = C .. 11 = B.
    pub tonic: u8,
}

impl Scale {
    pub fn new(kind: ScaleKind, tonic: u8) -> Self {
        Scale {
            kind,
            tonic: tonic % 12,
        }
    }

    /// The seven member pitch classes, tonic first.
    pub fn classes(self) -> [u8; 7] {
        let mut out = [0u8; 7];
        let mut pc = self.tonic;
        for (slot, step) in out.iter_mut().zip(self.kind.steps()) {
            *slot = pc;
            pc = (pc + step) % 12;
        }
        out
    }

    pub fn contains(self, class: u8) -> bool {
        self.classes().contains(&(class % 12))
    }

    /// Scale degree (0-6) of a pitch class, or None when out of scale.
    pub fn degree_of(self, class: u8) -> Option<usize> {
        self.classes().iter().position(|&pc| pc == class % 12)
    }

    /// Spell the scale member at a MIDI note number. The tonic takes its
    /// default letter and each degree advances one letter, so every scale
    /// gets seven distinct letters. None when the class is out of scale.
    pub fn pitch_from_midi(self, midi: i32) -> Option<Pitch> {
        let class = midi.rem_euclid(12) as u8;
        let degree = self.degree_of(class)?;
        let tonic_step = name::default_step(self.tonic) as usize;
        let step = (tonic_step + degree) % 7;
        Some(Pitch::new(step as i32, class as i32, midi.div_euclid(12) - 1))
    }

    /// Ascending scale members within an inclusive MIDI range.
    pub fn pitches_between(self, low: i32, high: i32) -> Vec<Pitch> {
        (low..=high).filter_map(|m| self.pitch_from_midi(m)).collect()
    }

    /// The register for a voice: ascending scale members over its span.
    pub fn register(self, voice: VoiceRange) -> Vec<Pitch> {
        let (low, high) = voice.midi_span();
        (low..high).filter_map(|m| self.pitch_from_midi(m)).collect()
    }
}

/// The four standard voice ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceRange {
    Soprano,
    Alto,
    Tenor,
    Bass,
}

impl VoiceRange {
    pub const ALL: [VoiceRange; 4] = [
        VoiceRange::Soprano,
        VoiceRange::Alto,
        VoiceRange::Tenor,
        VoiceRange::Bass,
    ];

    /// Half-open MIDI span [low, high) of the working compass.
    pub fn midi_span(self) -> (i32, i32) {
        match self {
            VoiceRange::Soprano => (60, 82), // C4-A5
            VoiceRange::Alto => (53, 75),    // F3-D5
            VoiceRange::Tenor => (48, 70),   // C3-A4
            VoiceRange::Bass => (41, 63),    // F2-D4
        }
    }

    /// Parse a lowercase voice name.
    pub fn parse(text: &str) -> Option<VoiceRange> {
        match text {
            "soprano" => Some(VoiceRange::Soprano),
            "alto" => Some(VoiceRange::Alto),
            "tenor" => Some(VoiceRange::Tenor),
            "bass" => Some(VoiceRange::Bass),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VoiceRange::Soprano => "soprano",
            VoiceRange::Alto => "alto",
            VoiceRange::Tenor => "tenor",
            VoiceRange::Bass => "bass",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_scale_classes() {
        let c_major = Scale::new(ScaleKind::Major, 0);
        assert_eq!(c_major.classes(), [0, 2, 4, 5, 7, 9, 11]);
        assert!(c_major.contains(7));
        assert!(!c_major.contains(6), "F# is not in C major");
    }

    #[test]
    fn test_dorian_rotation() {
        let d_dorian = Scale::new(ScaleKind::Dorian, 2);
        // D E F G A B C: the white keys from D.
        assert_eq!(d_dorian.classes(), [2, 4, 5, 7, 9, 11, 0]);
        assert_eq!(d_dorian.degree_of(9), Some(4));
        assert_eq!(d_dorian.degree_of(1), None);
    }

    #[test]
    fn test_all_modes_span_an_octave() {
        for kind in ScaleKind::ALL {
            let total: u8 = kind.steps().iter().sum();
            assert_eq!(total, 12, "{} steps must sum to an octave", kind.name());
        }
    }

    #[test]
    fn test_pitch_from_midi_spells_members() {
        let c_major = Scale::new(ScaleKind::Major, 0);
        let c4 = c_major.pitch_from_midi(60).unwrap();
        assert_eq!((c4.step, c4.class, c4.octave), (0, 0, 4));

        assert!(c_major.pitch_from_midi(66).is_none(), "F#4 is out of C major");

        // E major spells its second degree on F (as F#).
        let e_major = Scale::new(ScaleKind::Major, 4);
        let fs4 = e_major.pitch_from_midi(66).unwrap();
        assert_eq!(fs4.spelled_name(), "fs");
        assert_eq!(fs4.octave, 4);
    }

    #[test]
    fn test_flat_side_spelling() {
        // Eb major: Eb F G Ab Bb C D.
        let ef_major = Scale::new(ScaleKind::Major, 3);
        let af3 = ef_major.pitch_from_midi(56).unwrap();
        assert_eq!(af3.spelled_name(), "af");
        let bf3 = ef_major.pitch_from_midi(58).unwrap();
        assert_eq!(bf3.spelled_name(), "bf");
    }

    #[test]
    fn test_bass_register_in_c_major() {
        let c_major = Scale::new(ScaleKind::Major, 0);
        let register = c_major.register(VoiceRange::Bass);
        // F2 G2 A2 B2 C3 D3 E3 F3 G3 A3 B3 C4 D4.
        assert_eq!(register.len(), 13);
        assert_eq!(register.first().map(|p| p.midi()), Some(41));
        assert_eq!(register.last().map(|p| p.midi()), Some(62));
        assert!(
            register.windows(2).all(|w| w[0].height() < w[1].height()),
            "register must ascend"
        );
    }

    #[test]
    fn test_pitches_between_is_inclusive() {
        let c_major = Scale::new(ScaleKind::Major, 0);
        let octave = c_major.pitches_between(48, 72);
        assert_eq!(octave.len(), 15); // C3 up to C5, both ends in
        assert_eq!(octave.first().map(|p| p.midi()), Some(48));
        assert_eq!(octave.last().map(|p| p.midi()), Some(72));
    }

    #[test]
    fn test_voice_parse_round_trip() {
        for voice in VoiceRange::ALL {
            assert_eq!(VoiceRange::parse(voice.name()), Some(voice));
        }
        assert_eq!(VoiceRange::parse("baritone"), None);

        for kind in ScaleKind::ALL {
            assert_eq!(ScaleKind::parse(kind.name()), Some(kind));
        }
    }
}
