// Note-name parsing and formatting.
//
// Names are lowercase: a letter (c d e f g a b) followed by accidental
// suffixes, 's' for sharp and 'f' for flat, stackable ("css" is C double
// sharp). A pitch name appends the scientific octave: "c4" is middle C,
// "fs3" the F sharp below it.
//
// Spelling from a class alone uses one fixed table (sharps for C/F, flats
// for E/A/B neighbours), matching the letters the scale module assigns to
// tonics.

use crate::pitch::{LETTER_SEMITONES, LETTERS, Pitch};

/// Default letter step for each chromatic class: C C# D Eb E F F# G Ab A Bb B.
const DEFAULT_STEPS: [u8; 12] = [0, 0, 1, 2, 2, 3, 3, 4, 5, 5, 6, 6];

/// The letter step a bare chromatic class is spelled with by default.
pub fn default_step(class: u8) -> u8 {
    DEFAULT_STEPS[(class % 12) as usize]
}

/// Split a name into its letter step and signed accidental alteration.
fn parse_spelling(name: &str) -> Option<(usize, i32)> {
    let mut chars = name.chars();
    let letter = chars.next()?;
    let step = LETTERS.iter().position(|&l| l == letter)?;
    let mut alteration = 0i32;
    for c in chars {
        match c {
            's' => alteration += 1,
            'f' => alteration -= 1,
            _ => return None,
        }
    }
    Some((step, alteration))
}

/// Parse a note name ("c", "fs", "bf") into its chromatic pitch class.
pub fn parse_class(name: &str) -> Option<u8> {
    let (step, alteration) = parse_spelling(name)?;
    Some((LETTER_SEMITONES[step] + alteration).rem_euclid(12) as u8)
}

/// Parse a note name with a scientific octave ("c4", "fs3", "bf2").
/// Wrapped spellings keep their letter: "cf4" sounds at B3's height but
/// stays a C on the staff.
pub fn parse_pitch(name: &str) -> Option<Pitch> {
    let split = name.find(|c: char| c.is_ascii_digit() || c == '-')?;
    let (head, tail) = name.split_at(split);
    let (step, alteration) = parse_spelling(head)?;
    let octave: i32 = tail.parse().ok()?;
    let class = LETTER_SEMITONES[step] + alteration;
    Some(Pitch::new(step as i32, class, octave))
}

/// Spell a (letter step, chromatic class) pair as a note name: the letter
/// plus however many sharps or flats separate the class from the letter's
/// natural class. Round-trips with `parse_class`.
pub fn spelling(step: u8, class: u8) -> String {
    let natural = LETTER_SEMITONES[(step % 7) as usize];
    let delta = (class as i32 - natural + 6).rem_euclid(12) - 6;
    let mark = if delta < 0 { 'f' } else { 's' };
    let mut out = String::with_capacity(1 + delta.unsigned_abs() as usize);
    out.push(LETTERS[(step % 7) as usize]);
    for _ in 0..delta.abs() {
        out.push(mark);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_naturals() {
        assert_eq!(parse_class("c"), Some(0));
        assert_eq!(parse_class("d"), Some(2));
        assert_eq!(parse_class("e"), Some(4));
        assert_eq!(parse_class("f"), Some(5));
        assert_eq!(parse_class("g"), Some(7));
        assert_eq!(parse_class("a"), Some(9));
        assert_eq!(parse_class("b"), Some(11));
    }

    #[test]
    fn test_parse_class_accidentals() {
        assert_eq!(parse_class("cs"), Some(1));
        assert_eq!(parse_class("df"), Some(1));
        assert_eq!(parse_class("fs"), Some(6));
        assert_eq!(parse_class("bf"), Some(10));
        assert_eq!(parse_class("css"), Some(2), "double sharp");
        assert_eq!(parse_class("cf"), Some(11), "flat wraps below C");
    }

    #[test]
    fn test_parse_class_rejects_garbage() {
        assert_eq!(parse_class(""), None);
        assert_eq!(parse_class("h"), None);
        assert_eq!(parse_class("c#"), None);
        assert_eq!(parse_class("cs4"), None, "octave digits belong to parse_pitch");
    }

    #[test]
    fn test_parse_pitch() {
        let c4 = parse_pitch("c4").unwrap();
        assert_eq!(c4.midi(), 60);

        let fs3 = parse_pitch("fs3").unwrap();
        assert_eq!((fs3.step, fs3.class, fs3.octave), (3, 6, 3));

        let bf2 = parse_pitch("bf2").unwrap();
        assert_eq!(bf2.midi(), 46);

        assert_eq!(parse_pitch("c"), None, "octave is required");
        assert_eq!(parse_pitch("x4"), None);
    }

    #[test]
    fn test_parse_pitch_wrapped_spellings() {
        // Cb4 keeps the letter C but sounds a semitone below C4.
        let cf4 = parse_pitch("cf4").unwrap();
        assert_eq!(cf4.step, 0);
        assert_eq!(cf4.height(), 47);

        // B#3 keeps the letter B but sounds at C4's height.
        let bs3 = parse_pitch("bs3").unwrap();
        assert_eq!(bs3.step, 6);
        assert_eq!(bs3.height(), 48);
    }

    #[test]
    fn test_spelling_round_trips() {
        for (step, class, expected) in [
            (0u8, 0u8, "c"),
            (0, 1, "cs"),
            (1, 1, "df"),
            (3, 6, "fs"),
            (6, 10, "bf"),
            (0, 11, "cf"),
            (6, 0, "bs"),
        ] {
            let name = spelling(step, class);
            assert_eq!(name, expected);
            assert_eq!(
                parse_class(&name),
                Some(class),
                "{} should parse back to class {}",
                name,
                class
            );
        }
    }

    #[test]
    fn test_default_step_table() {
        assert_eq!(default_step(0), 0); // C
        assert_eq!(default_step(1), 0); // C# spelled on C
        assert_eq!(default_step(3), 2); // Eb spelled on E
        assert_eq!(default_step(6), 3); // F# spelled on F
        assert_eq!(default_step(8), 5); // Ab spelled on A
        assert_eq!(default_step(10), 6); // Bb spelled on B
    }
}
