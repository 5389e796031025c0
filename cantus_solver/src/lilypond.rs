// LilyPond sheet music output.
//
// Renders a cantus firmus and one solved counter-voice as a two-staff
// score of whole notes (.ly files for engraving). Pitches use LilyPond's
// Dutch note names: "is" sharps, "es" flats, quote and comma octave
// marks around the small octave.

use cantus_theory::Pitch;
use cantus_theory::pitch::LETTER_SEMITONES;
use std::fmt::Write;
use std::path::Path;

/// One pitch in LilyPond absolute notation: C4 is "c'", Bb2 is "bes,".
pub fn ly_pitch(pitch: Pitch) -> String {
    let natural = LETTER_SEMITONES[pitch.step as usize];
    let alteration = (pitch.class as i32 - natural + 6).rem_euclid(12) - 6;

    let mut out = String::new();
    out.push(pitch.letter());
    for _ in 0..alteration.abs() {
        out.push_str(if alteration < 0 { "es" } else { "is" });
    }
    let marks = pitch.letter_octave() - 3;
    for _ in 0..marks.abs() {
        out.push(if marks < 0 { ',' } else { '\'' });
    }
    out
}

/// A line of whole notes; the first note carries the duration.
pub fn ly_line(pitches: &[Pitch]) -> String {
    let mut out = String::new();
    for (i, &pitch) in pitches.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&ly_pitch(pitch));
        if i == 0 {
            out.push('1');
        }
    }
    out
}

/// The complete .ly document for one solution.
pub fn score_document(
    cantus: &[Pitch],
    candidate: &[Pitch],
    voice_above: bool,
    title: &str,
) -> String {
    let (upper, lower) = if voice_above {
        (candidate, cantus)
    } else {
        (cantus, candidate)
    };
    let (upper_name, lower_name) = if voice_above {
        ("Counterpoint", "Cantus firmus")
    } else {
        ("Cantus firmus", "Counterpoint")
    };

    let mut ly = String::new();
    ly.push_str("\\version \"2.24.0\"\n\n");
    let _ = write!(
        ly,
        "\\header {{\n  title = \"{}\"\n  tagline = ##f\n}}\n\n",
        title
    );
    ly.push_str("global = {\n  \\time 4/4\n}\n\n");
    let _ = write!(
        ly,
        "upper = \\absolute {{\n  \\global\n  \\clef treble\n  {}\n}}\n\n",
        ly_line(upper)
    );
    let _ = write!(
        ly,
        "lower = \\absolute {{\n  \\global\n  \\clef bass\n  {}\n}}\n\n",
        ly_line(lower)
    );
    ly.push_str("\\score {\n  \\new StaffGroup <<\n");
    let _ = writeln!(
        ly,
        "    \\new Staff \\with {{ instrumentName = \"{}\" }} \\upper",
        upper_name
    );
    let _ = writeln!(
        ly,
        "    \\new Staff \\with {{ instrumentName = \"{}\" }} \\lower",
        lower_name
    );
    ly.push_str("  >>\n");
    ly.push_str("  \\layout { }\n");
    ly.push_str("  \\midi { }\n");
    ly.push_str("}\n");
    ly
}

/// Write one solution as a .ly file.
pub fn write_score(
    path: &Path,
    cantus: &[Pitch],
    candidate: &[Pitch],
    voice_above: bool,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, score_document(cantus, candidate, voice_above, title))?;
    Ok(())
}
