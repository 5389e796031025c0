// MIDI output for solved lines.
//
// Writes the cantus firmus and one solved counter-voice as a Standard
// MIDI File (SMF): a tempo track plus one track per voice, upper voice
// first, every position a whole note.
//
// Uses the `midly` crate for MIDI writing. Output is SMF Format 1
// (multi-track).

use cantus_theory::Pitch;
use midly::{
    Format, Header, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

/// Ticks per whole note, one first-species position.
const TICKS_PER_WHOLE: u32 = TICKS_PER_QUARTER as u32 * 4;

/// Playback tempo in quarter notes per minute.
const TEMPO_BPM: u32 = 72;

/// Write the two voices to a MIDI file.
pub fn write_midi(
    path: &Path,
    cantus: &[Pitch],
    candidate: &[Pitch],
    voice_above: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let smf = lines_to_smf(cantus, candidate, voice_above);
    let mut buf = Vec::new();
    smf.write(&mut buf)?;
    std::fs::write(path, &buf)?;
    Ok(())
}

/// Build the in-memory SMF.
fn lines_to_smf(cantus: &[Pitch], candidate: &[Pitch], voice_above: bool) -> Smf<'static> {
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    // Track 0: tempo track
    let mut tempo_track: Track<'static> = Vec::new();
    tempo_track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::Tempo(u24::new(60_000_000 / TEMPO_BPM))),
    });
    tempo_track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
    });
    smf.tracks.push(tempo_track);

    let (upper, lower) = if voice_above {
        (candidate, cantus)
    } else {
        (cantus, candidate)
    };
    let voices: [(&str, &[Pitch], u4); 2] = [
        ("Upper", upper, u4::new(0)),
        ("Lower", lower, u4::new(1)),
    ];

    for (name, line, channel) in voices {
        let mut track: Track<'static> = Vec::new();

        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(midly::MetaMessage::TrackName(name.as_bytes())),
        });

        // Set to choir aahs (program 52) for choral sound
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Midi {
                channel,
                message: MidiMessage::ProgramChange {
                    program: u7::new(52),
                },
            },
        });

        for &pitch in line {
            let key = u7::new(pitch.midi().clamp(0, 127) as u8);
            track.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn {
                        key,
                        vel: u7::new(80),
                    },
                },
            });
            track.push(TrackEvent {
                delta: u28::new(TICKS_PER_WHOLE),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOff {
                        key,
                        vel: u7::new(0),
                    },
                },
            });
        }

        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
        });
        smf.tracks.push(track);
    }

    smf
}
