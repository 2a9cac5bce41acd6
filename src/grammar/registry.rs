use crate::error::{GenegramError, Result};
use std::collections::{HashMap, HashSet};

/// A grammar symbol: either a nonterminal name or a literal terminal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Nonterminal(String),
    Terminal(String),
}

impl Symbol {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Symbol::Nonterminal(s) => s,
            Symbol::Terminal(s) => s,
        }
    }
}

/// One production rule: `lhs -> rhs[0] rhs[1] ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub lhs: String,
    pub rhs: Vec<Symbol>,
}

/// Ordered, immutable registry of production rules.
///
/// The position of a production in the registry is its stable index; genes
/// and stored index sequences are only meaningful against the ordering they
/// were produced with. The start symbol is the left-hand side of production
/// 0, and the designated terminator nonterminal signals early stop during
/// string reconstruction.
#[derive(Debug)]
pub struct Grammar {
    productions: Vec<Production>,
    alternatives: HashMap<String, Vec<usize>>,
    lexical: Vec<String>,
    lexical_set: HashSet<String>,
    start: String,
    terminator: String,
}

impl Grammar {
    /// Build a grammar from rule text.
    ///
    /// Format, one rule per line: `lhs -> sym sym | sym ...` where
    /// single-quoted symbols are terminals and bare names are nonterminals.
    /// Lines starting with `#` and blank lines are skipped. Alternatives
    /// separated by `|` become consecutive productions, so the textual
    /// order of the rules fixes the index of every production.
    pub fn from_text(src: &str, terminator: &str) -> Result<Self> {
        let mut productions = Vec::new();
        for (lineno, raw) in src.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (lhs, rest) = line.split_once("->").ok_or_else(|| {
                GenegramError::GrammarInconsistency(format!(
                    "line {}: missing '->' in rule '{}'",
                    lineno + 1,
                    line
                ))
            })?;
            let lhs = lhs.trim();
            if lhs.is_empty() || lhs.starts_with('\'') {
                return Err(GenegramError::GrammarInconsistency(format!(
                    "line {}: left-hand side must be a bare nonterminal",
                    lineno + 1
                )));
            }
            for alt in rest.split('|') {
                let rhs: Vec<Symbol> = alt
                    .split_whitespace()
                    .map(|tok| Self::parse_symbol(tok, lineno + 1))
                    .collect::<Result<_>>()?;
                if rhs.is_empty() {
                    return Err(GenegramError::GrammarInconsistency(format!(
                        "line {}: empty right-hand side for '{}'",
                        lineno + 1,
                        lhs
                    )));
                }
                productions.push(Production {
                    lhs: lhs.to_string(),
                    rhs,
                });
            }
        }
        Self::from_productions(productions, terminator)
    }

    /// Build a grammar from an explicit production list.
    pub fn from_productions(productions: Vec<Production>, terminator: &str) -> Result<Self> {
        if productions.is_empty() {
            return Err(GenegramError::GrammarInconsistency(
                "grammar has no productions".to_string(),
            ));
        }
        let mut alternatives: HashMap<String, Vec<usize>> = HashMap::new();
        let mut lexical = Vec::new();
        let mut lexical_set = HashSet::new();
        for (ix, prod) in productions.iter().enumerate() {
            if prod.rhs.is_empty() {
                return Err(GenegramError::GrammarInconsistency(format!(
                    "production {} ('{}') has an empty right-hand side",
                    ix, prod.lhs
                )));
            }
            alternatives.entry(prod.lhs.clone()).or_default().push(ix);
            for sym in &prod.rhs {
                if let Symbol::Terminal(t) = sym {
                    if lexical_set.insert(t.clone()) {
                        lexical.push(t.clone());
                    }
                }
            }
        }
        let start = productions[0].lhs.clone();
        Ok(Self {
            productions,
            alternatives,
            lexical,
            lexical_set,
            start,
            terminator: terminator.to_string(),
        })
    }

    fn parse_symbol(tok: &str, lineno: usize) -> Result<Symbol> {
        if let Some(inner) = tok.strip_prefix('\'') {
            let inner = inner.strip_suffix('\'').ok_or_else(|| {
                GenegramError::GrammarInconsistency(format!(
                    "line {}: unterminated terminal {}",
                    lineno, tok
                ))
            })?;
            if inner.is_empty() {
                return Err(GenegramError::GrammarInconsistency(format!(
                    "line {}: empty terminal",
                    lineno
                )));
            }
            Ok(Symbol::Terminal(inner.to_string()))
        } else {
            Ok(Symbol::Nonterminal(tok.to_string()))
        }
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    pub fn production(&self, index: usize) -> Result<&Production> {
        self.productions.get(index).ok_or(GenegramError::InvalidIndex {
            index,
            len: self.productions.len(),
        })
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Indices of the productions sharing `lhs`, in grammar order.
    pub fn alternatives(&self, lhs: &str) -> &[usize] {
        self.alternatives.get(lhs).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn is_terminator(&self, lhs: &str) -> bool {
        lhs == self.terminator
    }

    /// Terminals of the lexical alphabet in first-appearance order.
    pub fn lexical(&self) -> &[String] {
        &self.lexical
    }

    /// Multi-character terminals, in lexical enumeration order.
    pub fn long_terminals(&self) -> impl Iterator<Item = &str> {
        self.lexical
            .iter()
            .filter(|t| t.chars().count() > 1)
            .map(String::as_str)
    }

    pub fn has_terminal(&self, t: &str) -> bool {
        self.lexical_set.contains(t)
    }
}
