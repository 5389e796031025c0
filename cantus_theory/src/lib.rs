// Cantus Theory
//
// The pitch substrate for the counterpoint solver. Pitches are spelled
// diatonically (letter step + chromatic class + octave) rather than as bare
// MIDI numbers, so interval sizes and qualities come out the way they read
// on a staff: B3 up to F4 is a diminished fifth, not just "six semitones".
//
// Modules:
// - pitch.rs: spelled pitches, total chromatic ordering, transposition algebra
// - interval.rs: directed intervals with quality and octave-reduced class
// - scale.rs: the seven diatonic modes, voice ranges, register generation
// - name.rs: note-name parsing and formatting ("c4", "fs3", "bf2")
//
// The solver crate builds entirely on these types; nothing here knows about
// counterpoint rules.

pub mod interval;
pub mod name;
pub mod pitch;
pub mod scale;

pub use interval::{Interval, Quality};
pub use pitch::Pitch;
pub use scale::{Scale, ScaleKind, VoiceRange};
