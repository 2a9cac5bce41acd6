pub mod gene;
pub mod operators;
pub mod render;
pub mod tokenizer;

pub use gene::{from_gene, to_gene, Gene, CODON_RANGE};
pub use operators::{point_mutation, random_gene, single_point_crossover};
pub use render::render;
pub use tokenizer::SmilesTokenizer;

use crate::error::Result;
use crate::grammar::{smiles, Grammar};
use crate::parser::ChartParser;
use std::sync::Arc;

/// Grammar codec between SMILES strings, derivation index sequences and
/// genes.
///
/// Construction builds the grammar, the substitution table and the parser
/// once; the codec is immutable afterwards and safe to share across
/// threads. Every call is pure over its inputs.
pub struct SmilesCodec {
    grammar: Arc<Grammar>,
    tokenizer: SmilesTokenizer,
    parser: ChartParser,
}

impl SmilesCodec {
    /// Codec over the SMILES grammar shipped with the crate.
    pub fn new() -> Result<Self> {
        Self::with_grammar(smiles::smiles_grammar()?, &smiles::PLACEHOLDERS)
    }

    /// Codec over a caller-supplied grammar and placeholder alphabet.
    pub fn with_grammar(grammar: Grammar, placeholders: &[char]) -> Result<Self> {
        let tokenizer = SmilesTokenizer::new(&grammar, placeholders)?;
        let grammar = Arc::new(grammar);
        let parser = ChartParser::new(Arc::clone(&grammar));
        Ok(Self {
            grammar,
            tokenizer,
            parser,
        })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn tokenizer(&self) -> &SmilesTokenizer {
        &self.tokenizer
    }

    /// Tokenize and parse a SMILES string into its derivation index
    /// sequence. `None` when the string is not in the grammar's language.
    pub fn encode(&self, text: &str) -> Option<Vec<usize>> {
        let tokens = self.tokenizer.tokenize(text);
        let derivation = self.parser.parse(&tokens);
        if derivation.is_none() {
            log::debug!("Failed to parse: {}", text);
        }
        derivation
    }

    /// Reconstruct the string generated by a derivation index sequence.
    /// `Ok("")` when the derivation is incomplete or cut by the terminator.
    pub fn decode(&self, indices: &[usize]) -> Result<String> {
        render(&self.grammar, indices)
    }

    /// See [`gene::to_gene`]; padding codons come from the thread RNG.
    pub fn to_gene(&self, indices: &[usize], max_len: Option<usize>) -> Result<Gene> {
        to_gene(&self.grammar, indices, max_len, &mut rand::thread_rng())
    }

    /// See [`gene::from_gene`]. Total for any gene.
    pub fn from_gene(&self, gene: &[u32]) -> Vec<usize> {
        from_gene(&self.grammar, gene)
    }
}
