use crate::error::{GenegramError, Result};
use crate::grammar::Grammar;
use std::collections::HashSet;

/// Reversible tokenizer for a grammar whose lexical alphabet contains
/// multi-character terminals.
///
/// Each long terminal is paired positionally with a placeholder character;
/// `tokenize` substitutes long terminals by their placeholders, splits the
/// text into characters, and re-expands placeholders so the output carries
/// full terminal strings as atomic tokens. `detokenize` is plain
/// concatenation and exactly inverts `tokenize`.
pub struct SmilesTokenizer {
    long: Vec<String>,
    placeholders: Vec<char>,
}

impl SmilesTokenizer {
    /// Pair the grammar's long terminals with `placeholders`.
    ///
    /// Fails when the counts differ, a placeholder repeats, or a placeholder
    /// is itself a terminal of the grammar.
    pub fn new(grammar: &Grammar, placeholders: &[char]) -> Result<Self> {
        let long: Vec<String> = grammar.long_terminals().map(str::to_string).collect();
        if long.len() != placeholders.len() {
            return Err(GenegramError::GrammarInconsistency(format!(
                "{} long terminals but {} placeholders",
                long.len(),
                placeholders.len()
            )));
        }
        let mut seen = HashSet::new();
        for &ch in placeholders {
            if !seen.insert(ch) {
                return Err(GenegramError::GrammarInconsistency(format!(
                    "duplicate placeholder {ch:?}"
                )));
            }
            if grammar.has_terminal(&ch.to_string()) {
                return Err(GenegramError::GrammarInconsistency(format!(
                    "placeholder {ch:?} collides with a grammar terminal"
                )));
            }
        }
        Ok(Self {
            long,
            placeholders: placeholders.to_vec(),
        })
    }

    /// Split `text` into grammar tokens. Total: unknown characters pass
    /// through as single-character tokens and are rejected later by the
    /// parser.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut substituted = text.to_string();
        for (long, &ph) in self.long.iter().zip(&self.placeholders) {
            substituted = substituted.replace(long.as_str(), &ph.to_string());
        }
        substituted
            .chars()
            .map(|ch| match self.placeholders.iter().position(|&p| p == ch) {
                Some(ix) => self.long[ix].clone(),
                None => ch.to_string(),
            })
            .collect()
    }

    pub fn detokenize(&self, tokens: &[String]) -> String {
        tokens.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::smiles::{smiles_grammar, PLACEHOLDERS};

    fn tokenizer() -> SmilesTokenizer {
        SmilesTokenizer::new(&smiles_grammar().unwrap(), &PLACEHOLDERS).unwrap()
    }

    #[test]
    fn test_two_char_terminal_is_one_token() {
        let tok = tokenizer();
        let tokens = tok.tokenize("CCl");
        assert_eq!(tokens, vec!["C".to_string(), "Cl".to_string()]);
    }

    #[test]
    fn test_bijection_on_sample_smiles() {
        let tok = tokenizer();
        for smiles in [
            "CC(c1c(CC)cc(C=O)cc1)(CC(CO)CC)",
            "CC(=O)OCC[N+](C)(C)C",
            "Cl[Pt](Cl)Cl",
            "C[Si](C)(C)Br",
            "c1ccccc1",
        ] {
            let tokens = tok.tokenize(smiles);
            assert_eq!(tok.detokenize(&tokens), smiles);
        }
    }

    #[test]
    fn test_metal_symbol_tokenized_atomically() {
        let tok = tokenizer();
        let tokens = tok.tokenize("[Ru]");
        assert_eq!(
            tokens,
            vec!["[".to_string(), "Ru".to_string(), "]".to_string()]
        );
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let g = smiles_grammar().unwrap();
        let too_few = &PLACEHOLDERS[..10];
        assert!(SmilesTokenizer::new(&g, too_few).is_err());
    }

    #[test]
    fn test_placeholder_collision_rejected() {
        let g = Grammar::from_text("S -> 'Cl' | '!'", "Nothing").unwrap();
        assert!(SmilesTokenizer::new(&g, &['!']).is_err());
    }

    #[test]
    fn test_duplicate_placeholder_rejected() {
        let g = Grammar::from_text("S -> 'Cl' S | 'Br'", "Nothing").unwrap();
        assert!(SmilesTokenizer::new(&g, &['!', '!']).is_err());
    }
}
