pub mod registry;
pub mod smiles;

pub use registry::{Grammar, Production, Symbol};
pub use smiles::smiles_grammar;
