use crate::error::Result;
use crate::grammar::{Grammar, Symbol};

/// Expand a derivation index sequence into the flat string it generates.
///
/// The working sequence starts as the left-hand side of the first
/// production; each production replaces the leftmost occurrence of its
/// left-hand side (productions whose left-hand side is absent are skipped).
/// Reaching the terminator nonterminal stops expansion immediately. Returns
/// `Ok("")` when the derivation is empty or leaves nonterminals unresolved;
/// callers must treat that as "no renderable string".
pub fn render(grammar: &Grammar, indices: &[usize]) -> Result<String> {
    let Some(&first) = indices.first() else {
        return Ok(String::new());
    };
    let mut seq: Vec<Symbol> = vec![Symbol::Nonterminal(grammar.production(first)?.lhs.clone())];
    for &ix in indices {
        let prod = grammar.production(ix)?;
        if grammar.is_terminator(&prod.lhs) {
            break;
        }
        let lhs = Symbol::Nonterminal(prod.lhs.clone());
        if let Some(pos) = seq.iter().position(|sym| *sym == lhs) {
            seq.splice(pos..pos + 1, prod.rhs.iter().cloned());
        }
    }
    let mut text = String::new();
    for sym in &seq {
        match sym {
            Symbol::Terminal(t) => text.push_str(t),
            Symbol::Nonterminal(_) => return Ok(String::new()),
        }
    }
    Ok(text)
}
