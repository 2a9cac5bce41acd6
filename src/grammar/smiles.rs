use super::registry::Grammar;
use crate::error::Result;

/// Rule text for the SMILES grammar shipped with the crate.
pub const SMILES_GRAMMAR: &str = include_str!("smiles.grammar");

/// Nonterminal whose appearance stops string reconstruction early.
pub const TERMINATOR: &str = "Nothing";

/// Placeholder characters for the grammar's multi-character terminals.
///
/// The SMILES grammar has 54 of those (48 two-letter metal symbols, `Cl`,
/// `Br`, `Si`, `Se`, `se` and `@@`); each is substituted by one character
/// from this list during tokenization. The characters must stay outside the
/// SMILES terminal alphabet; tokenizer construction re-checks that.
pub const PLACEHOLDERS: [char; 54] = [
    '!', '?', '$', '&', '*', '~', '_', ';', '.', ',', '`', '|', '<', '>',
    '{', '}', '§', '^', 'a', 'A', 'z', 'Z', 'm', 'M', 'd', 'D', 'e', 'E',
    'g', 'G', 'j', 'J', 'l', 'L', 'q', 'Q', 'r', 'R', 't', 'T', 'x', 'X',
    '"', '´', '˚', 'å', 'Å', 'ø', 'Ø', '¨', 'ä', 'Ä', 'ö', 'Ö',
];

/// Build the shipped SMILES grammar.
pub fn smiles_grammar() -> Result<Grammar> {
    Grammar::from_text(SMILES_GRAMMAR, TERMINATOR)
}
