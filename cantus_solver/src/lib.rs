// Cantus Solver
//
// An exhaustive first-species counterpoint solver: given a cantus firmus,
// a register of singable pitches, and a side for the added voice, it
// enumerates every counter-melody that obeys the two-voice rules and then
// keeps the ones that read well as melodies in their own right.
//
// The search narrows stage by stage, cheapest rules first: per-position
// harmony sets, validated adjacent pairs, window-checked triplets and
// quadruplets, then unconditional assembly into full-length lines.
//
// Architecture:
// - rules.rs: the interval tables every judgement consults
// - harmony.rs: per-position allowed-pitch sets from the register
// - pairs.rs: adjacent-pair motion rules (melodic legality, parallels,
//   approach to perfects, voice exchange)
// - expand.rs: the fragment-merging engine plus the window predicates
// - quality.rs: whole-line heuristics (consonance mix, steps, variety,
//   contrary motion)
// - solve.rs: input validation, stage orchestration, JSON report
// - lilypond.rs: sheet music output (.ly files for engraving)
// - midi.rs: MIDI file output for playback
//
// The solver is deterministic: identical inputs give identical output.

pub mod expand;
pub mod harmony;
pub mod lilypond;
pub mod midi;
pub mod pairs;
pub mod quality;
pub mod rules;
pub mod solve;
