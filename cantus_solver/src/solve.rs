// Pipeline orchestration.
//
// Validates the inputs, then runs the stages in order: harmony sets,
// pair validation, triplet and quadruplet expansion, unconditional
// assembly, and the final quality filter. Everything in between is a
// bucket of fragments, so the stages compose without special cases.

use crate::expand::{Fragment, expand, is_valid_quadruplet, is_valid_triplet};
use crate::harmony::harmonies;
use crate::pairs::valid_pairs;
use crate::quality::is_good;
use crate::rules::RuleSet;
use cantus_theory::Pitch;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("cantus firmus has {0} notes, need at least 4")]
    CantusTooShort(usize),
    #[error("register is empty")]
    EmptyRegister,
    #[error("register must ascend, entry {0} is out of order")]
    UnsortedRegister(usize),
}

/// Which side of the cantus the added voice sits on, and whether the
/// wide vertical set is in play.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    pub voice_above: bool,
    pub wide: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            voice_above: false,
            wide: true,
        }
    }
}

/// Enumerate every counter-melody for `cantus` drawn from `register`.
///
/// The register must be sorted ascending; it is usually a scale filtered
/// to a voice range. The result order is fixed by the register order at
/// each position, so identical inputs give identical output.
pub fn solve(
    cantus: &[Pitch],
    register: &[Pitch],
    config: SolveConfig,
) -> Result<Vec<Fragment>, SolveError> {
    if cantus.len() < 4 {
        return Err(SolveError::CantusTooShort(cantus.len()));
    }
    if register.is_empty() {
        return Err(SolveError::EmptyRegister);
    }
    if let Some(i) = register.windows(2).position(|w| w[0] >= w[1]) {
        return Err(SolveError::UnsortedRegister(i + 1));
    }

    let rules = RuleSet::for_direction(config.voice_above);
    let sets = harmonies(cantus, register, rules, config.wide);
    let mut buckets = valid_pairs(cantus, &sets, rules);
    buckets = expand(&buckets, cantus, is_valid_triplet);
    buckets = expand(&buckets, cantus, |fragment, _| is_valid_quadruplet(fragment));

    // Each round shrinks the bucket count by one, so this terminates; a
    // four-note cantus arrives here already assembled.
    while buckets.len() > 1 {
        buckets = expand(&buckets, cantus, |_, _| true);
    }

    let full = buckets.pop().unwrap_or_default();
    Ok(full
        .into_iter()
        .filter(|line| is_good(line, cantus))
        .collect())
}

/// A solved run in serializable form, pitch names instead of structs.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    cantus: Vec<String>,
    register_low: String,
    register_high: String,
    voice_above: bool,
    wide: bool,
    candidate_count: usize,
    candidates: Vec<Vec<String>>,
}

impl SolveReport {
    pub fn new(
        cantus: &[Pitch],
        register: &[Pitch],
        config: SolveConfig,
        candidates: &[Fragment],
    ) -> Self {
        SolveReport {
            cantus: names(cantus),
            register_low: register.first().map(Pitch::to_string).unwrap_or_default(),
            register_high: register.last().map(Pitch::to_string).unwrap_or_default(),
            voice_above: config.voice_above,
            wide: config.wide,
            candidate_count: candidates.len(),
            candidates: candidates.iter().map(|line| names(line)).collect(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

fn names(line: &[Pitch]) -> Vec<String> {
    line.iter().map(Pitch::to_string).collect()
}
