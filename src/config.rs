use crate::error::{GenegramError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the mutation efficiency study binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Molecules to encode and mutate.
    pub molecules: Vec<String>,
    /// Point mutations attempted per molecule.
    pub attempts_per_molecule: usize,
    /// Fixed gene length (truncate/pad); natural length when absent.
    pub gene_length: Option<usize>,
    /// RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            molecules: vec![
                "CC(c1c(CC)cc(C=O)cc1)(CC(CO)CC)".to_string(),
                "CC(=O)OCC[N+](C)(C)C".to_string(),
                "Cl[Pt](Cl)Cl".to_string(),
            ],
            attempts_per_molecule: 20,
            gene_length: None,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GenegramError::Configuration(format!("Failed to read config: {}", e)))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| GenegramError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.molecules.is_empty() {
            return Err(GenegramError::Configuration(
                "Molecule list must not be empty".to_string(),
            ));
        }
        if self.attempts_per_molecule == 0 {
            return Err(GenegramError::Configuration(
                "Attempts per molecule must be at least 1".to_string(),
            ));
        }
        if self.gene_length == Some(0) {
            return Err(GenegramError::Configuration(
                "Gene length must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BenchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = BenchConfig::default();
        config.attempts_per_molecule = 0;
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.molecules.clear();
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.gene_length = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BenchConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: BenchConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.molecules, config.molecules);
        assert_eq!(parsed.attempts_per_molecule, config.attempts_per_molecule);
    }
}
