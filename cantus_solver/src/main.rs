// Cantus Solver CLI entry point.
//
// Solves first-species counterpoint against a cantus firmus and prints
// every legal counter-melody. The first solution can be written out as
// LilyPond, MIDI, and the whole run as JSON.
//
// Usage:
//   cargo run -p cantus_solver -- [--cf NOTES] [--scale MODE] [--tonic NOTE]
//     [--voice RANGE] [--above] [--narrow] [--limit N]
//     [--ly FILE] [--midi FILE] [--json FILE]
//
// NOTES is comma-separated pitch names ("c4,e4,d4,c4"). Modes: major,
// dorian, phrygian, lydian, mixolydian, aeolian, locrian. Ranges:
// soprano, alto, tenor, bass. The added voice sits below the cantus
// unless --above is given; --narrow drops the verticals beyond the tenth.

use cantus_solver::lilypond::write_score;
use cantus_solver::midi::write_midi;
use cantus_solver::solve::{SolveConfig, SolveReport, solve};
use cantus_theory::name::{default_step, parse_class, parse_pitch, spelling};
use cantus_theory::{Pitch, Scale, ScaleKind, VoiceRange};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let cf_text: String = parse_flag(&args, "--cf")
        .unwrap_or_else(|| "c4,e4,d4,g4,a4,g4,e4,f4,d4,c4".to_string());
    let scale_name: String = parse_flag(&args, "--scale").unwrap_or_else(|| "major".to_string());
    let tonic_name: String = parse_flag(&args, "--tonic").unwrap_or_else(|| "c".to_string());
    let voice_name: String = parse_flag(&args, "--voice").unwrap_or_else(|| "bass".to_string());
    let voice_above = args.iter().any(|a| a == "--above");
    let wide = !args.iter().any(|a| a == "--narrow");
    let limit: usize = parse_flag(&args, "--limit").unwrap_or(10);
    let ly_path: Option<String> = parse_flag(&args, "--ly");
    let midi_path: Option<String> = parse_flag(&args, "--midi");
    let json_path: Option<String> = parse_flag(&args, "--json");

    let kind = parse_scale(&scale_name);
    let tonic = parse_tonic(&tonic_name);
    let voice = parse_voice(&voice_name);

    let cantus = match parse_cantus(&cf_text) {
        Ok(cantus) => cantus,
        Err(bad) => {
            eprintln!("Cannot read cantus note '{}'.", bad);
            std::process::exit(1);
        }
    };

    println!("=== Cantus Solver ===");
    println!("Cantus: {} ({} notes)", join(&cantus), cantus.len());
    println!("Scale: {} {}", spelling(default_step(tonic), tonic), kind.name());
    println!(
        "Voice: {}, {} the cantus",
        voice.name(),
        if voice_above { "above" } else { "below" }
    );
    println!("Verticals: {}", if wide { "wide" } else { "narrow" });
    println!();

    println!("[1/3] Building the register...");
    let register = Scale::new(kind, tonic).register(voice);
    match (register.first(), register.last()) {
        (Some(low), Some(high)) => println!("  {} pitches, {} to {}", register.len(), low, high),
        _ => println!("  (empty)"),
    }

    println!("[2/3] Searching...");
    let config = SolveConfig { voice_above, wide };
    let results = match solve(&cantus, &register, config) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("  Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("  Solutions: {}", results.len());

    println!("[3/3] Results:");
    if results.is_empty() {
        println!("  (none)");
    }
    for (i, line) in results.iter().take(limit).enumerate() {
        println!("  {:>3}: {}", i + 1, join(line));
    }
    if results.len() > limit {
        println!(
            "  ... and {} more (raise --limit to see them).",
            results.len() - limit
        );
    }

    if let Some(first) = results.first() {
        if let Some(path) = &ly_path {
            match write_score(Path::new(path), &cantus, first, voice_above, "First Species") {
                Ok(()) => println!("Wrote {}", path),
                Err(e) => {
                    eprintln!("Error writing {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        if let Some(path) = &midi_path {
            match write_midi(Path::new(path), &cantus, first, voice_above) {
                Ok(()) => {
                    println!("Wrote {}", path);
                    println!();
                    println!("Play with: timidity {} (or any MIDI player)", path);
                }
                Err(e) => {
                    eprintln!("Error writing {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
    } else if ly_path.is_some() || midi_path.is_some() {
        println!("No solution to render.");
    }

    if let Some(path) = &json_path {
        let report = SolveReport::new(&cantus, &register, config, &results);
        match report.write_json(Path::new(path)) {
            Ok(()) => println!("Wrote {}", path),
            Err(e) => {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }
}

fn join(line: &[Pitch]) -> String {
    line.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_cantus(text: &str) -> Result<Vec<Pitch>, String> {
    text.split(',')
        .map(str::trim)
        .map(|name| parse_pitch(name).ok_or_else(|| name.to_string()))
        .collect()
}

fn parse_scale(name: &str) -> ScaleKind {
    match ScaleKind::parse(name) {
        Some(kind) => kind,
        None => {
            eprintln!("Unknown scale '{}'. Using major.", name);
            ScaleKind::Major
        }
    }
}

fn parse_tonic(name: &str) -> u8 {
    match parse_class(name) {
        Some(class) => class,
        None => {
            eprintln!("Unknown tonic '{}'. Using c.", name);
            0
        }
    }
}

fn parse_voice(name: &str) -> VoiceRange {
    match VoiceRange::parse(name) {
        Some(voice) => voice,
        None => {
            eprintln!("Unknown voice '{}'. Using bass.", name);
            VoiceRange::Bass
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
