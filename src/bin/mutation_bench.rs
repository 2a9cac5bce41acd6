//! Mutation efficiency study: encode each molecule, apply repeated point
//! mutations to its gene and classify the decoded results.

use anyhow::Context;
use genegram::codec::{gene, operators, SmilesCodec};
use genegram::config::BenchConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MoleculeReport {
    smiles: String,
    parse_failed: bool,
    gene_length: usize,
    attempts: usize,
    /// Mutant decoded to a different, non-empty string.
    n_changed: usize,
    /// Mutant decoded back to the original string.
    n_unchanged: usize,
    /// Mutant decoded to an unrenderable (empty) string.
    n_empty: usize,
}

#[derive(Debug, Serialize)]
struct Summary {
    molecules: usize,
    parse_failures: usize,
    total_attempts: usize,
    total_changed: usize,
    total_unchanged: usize,
    total_empty: usize,
    reports: Vec<MoleculeReport>,
}

fn run_molecule(
    codec: &SmilesCodec,
    smiles: &str,
    config: &BenchConfig,
    ordinal: usize,
) -> genegram::Result<MoleculeReport> {
    let mut report = MoleculeReport {
        smiles: smiles.to_string(),
        parse_failed: false,
        gene_length: 0,
        attempts: 0,
        n_changed: 0,
        n_unchanged: 0,
        n_empty: 0,
    };

    let Some(indices) = codec.encode(smiles) else {
        log::warn!("Failed to parse molecule: {}", smiles);
        report.parse_failed = true;
        return Ok(report);
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(ordinal as u64)),
        None => StdRng::from_entropy(),
    };
    let parent = gene::to_gene(codec.grammar(), &indices, config.gene_length, &mut rng)?;
    report.gene_length = parent.len();

    for _ in 0..config.attempts_per_molecule {
        report.attempts += 1;
        let mutant = operators::point_mutation(&parent, &mut rng);
        let decoded = codec.decode(&codec.from_gene(&mutant))?;
        if decoded.is_empty() {
            report.n_empty += 1;
        } else if decoded == smiles {
            report.n_unchanged += 1;
        } else {
            report.n_changed += 1;
        }
    }
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => BenchConfig::default(),
    };
    config.validate()?;

    let codec = SmilesCodec::new().context("building SMILES codec")?;

    let reports: Vec<MoleculeReport> = config
        .molecules
        .par_iter()
        .enumerate()
        .map(|(ordinal, smiles)| run_molecule(&codec, smiles, &config, ordinal))
        .collect::<genegram::Result<_>>()?;

    let summary = Summary {
        molecules: reports.len(),
        parse_failures: reports.iter().filter(|r| r.parse_failed).count(),
        total_attempts: reports.iter().map(|r| r.attempts).sum(),
        total_changed: reports.iter().map(|r| r.n_changed).sum(),
        total_unchanged: reports.iter().map(|r| r.n_unchanged).sum(),
        total_empty: reports.iter().map(|r| r.n_empty).sum(),
        reports,
    };
    log::info!(
        "{} molecules, {} parse failures, {}/{} mutations changed the string",
        summary.molecules,
        summary.parse_failures,
        summary.total_changed,
        summary.total_attempts
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
