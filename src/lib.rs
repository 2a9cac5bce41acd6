//! Grammar-based SMILES gene codec.
//!
//! Encodes SMILES strings into derivation index sequences over a
//! context-free grammar and exposes them as integer genes for
//! genetic-algorithm mutation. Any gene decodes to some derivation
//! (codons select production alternatives modulo their count), so mutation
//! never produces structurally invalid genes; chemical validity of the
//! decoded string is a downstream concern.

pub mod codec;
pub mod config;
pub mod error;
pub mod grammar;
pub mod parser;

pub use codec::{Gene, SmilesCodec, CODON_RANGE};
pub use error::{GenegramError, Result};
pub use grammar::{Grammar, Production, Symbol};
pub use parser::ChartParser;
