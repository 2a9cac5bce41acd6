use crate::grammar::{Grammar, Symbol};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Interned grammar symbol used inside the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Sym {
    Nt(usize),
    Term(usize),
}

/// Dotted production with its origin set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Item {
    prod: usize,
    dot: usize,
    origin: usize,
}

/// Earley chart parser over a shared grammar.
///
/// `parse` returns the first derivation found for a token sequence, as the
/// pre-order list of production indices, or `None` when the tokens are not
/// in the language. The result is deterministic: chart sets are processed
/// in input order, and tree extraction tries alternatives in grammar order
/// and child spans shortest-first.
pub struct ChartParser {
    grammar: Arc<Grammar>,
    rhs: Vec<Vec<Sym>>,
    lhs_nt: Vec<usize>,
    prods_by_nt: Vec<Vec<usize>>,
    start_nt: usize,
    term_ids: HashMap<String, usize>,
}

struct ParseState {
    tok_ids: Vec<usize>,
    completed: HashSet<(usize, usize, usize)>,
    spans: HashMap<(usize, usize), Vec<usize>>,
}

impl ChartParser {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        fn intern(ids: &mut HashMap<String, usize>, name: &str) -> usize {
            if let Some(&id) = ids.get(name) {
                id
            } else {
                let id = ids.len();
                ids.insert(name.to_string(), id);
                id
            }
        }

        let mut nt_ids: HashMap<String, usize> = HashMap::new();
        let mut term_ids: HashMap<String, usize> = HashMap::new();
        let mut lhs_nt = Vec::with_capacity(grammar.len());
        let mut rhs = Vec::with_capacity(grammar.len());
        for prod in grammar.productions() {
            lhs_nt.push(intern(&mut nt_ids, &prod.lhs));
            let interned: Vec<Sym> = prod
                .rhs
                .iter()
                .map(|sym| match sym {
                    Symbol::Nonterminal(name) => Sym::Nt(intern(&mut nt_ids, name)),
                    Symbol::Terminal(t) => {
                        let next = term_ids.len();
                        Sym::Term(*term_ids.entry(t.clone()).or_insert(next))
                    }
                })
                .collect();
            rhs.push(interned);
        }

        let mut prods_by_nt = vec![Vec::new(); nt_ids.len()];
        for (ix, &nt) in lhs_nt.iter().enumerate() {
            prods_by_nt[nt].push(ix);
        }
        let start_nt = nt_ids[grammar.start()];

        Self {
            grammar,
            rhs,
            lhs_nt,
            prods_by_nt,
            start_nt,
            term_ids,
        }
    }

    pub fn grammar(&self) -> &Arc<Grammar> {
        &self.grammar
    }

    /// First derivation of `tokens`, as pre-order production indices.
    pub fn parse(&self, tokens: &[String]) -> Option<Vec<usize>> {
        let mut tok_ids = Vec::with_capacity(tokens.len());
        for tok in tokens {
            // A token outside the terminal alphabet can never be scanned.
            tok_ids.push(*self.term_ids.get(tok)?);
        }
        let n = tok_ids.len();

        let mut chart: Vec<Vec<Item>> = vec![Vec::new(); n + 1];
        let mut seen: Vec<HashSet<Item>> = vec![HashSet::new(); n + 1];
        for &p in &self.prods_by_nt[self.start_nt] {
            Self::add(&mut chart[0], &mut seen[0], Item { prod: p, dot: 0, origin: 0 });
        }

        for i in 0..=n {
            let mut cursor = 0;
            while cursor < chart[i].len() {
                let item = chart[i][cursor];
                cursor += 1;
                match self.rhs[item.prod].get(item.dot) {
                    Some(&Sym::Nt(c)) => {
                        for &q in &self.prods_by_nt[c] {
                            Self::add(
                                &mut chart[i],
                                &mut seen[i],
                                Item { prod: q, dot: 0, origin: i },
                            );
                        }
                    }
                    Some(&Sym::Term(t)) => {
                        if i < n && tok_ids[i] == t {
                            Self::add(
                                &mut chart[i + 1],
                                &mut seen[i + 1],
                                Item { prod: item.prod, dot: item.dot + 1, origin: item.origin },
                            );
                        }
                    }
                    None => {
                        // Completion. The grammar has no nullable rules, so
                        // origin < i and chart[origin] is final here.
                        let lhs = self.lhs_nt[item.prod];
                        let parents: Vec<Item> = chart[item.origin]
                            .iter()
                            .filter(|par| self.rhs[par.prod].get(par.dot) == Some(&Sym::Nt(lhs)))
                            .copied()
                            .collect();
                        for par in parents {
                            Self::add(
                                &mut chart[i],
                                &mut seen[i],
                                Item { prod: par.prod, dot: par.dot + 1, origin: par.origin },
                            );
                        }
                    }
                }
            }
        }

        let mut state = ParseState {
            tok_ids,
            completed: HashSet::new(),
            spans: HashMap::new(),
        };
        for (end, set) in chart.iter().enumerate() {
            for item in set {
                if item.dot == self.rhs[item.prod].len() {
                    state.completed.insert((item.prod, item.origin, end));
                    state
                        .spans
                        .entry((self.lhs_nt[item.prod], item.origin))
                        .or_default()
                        .push(end);
                }
            }
        }
        for ends in state.spans.values_mut() {
            ends.sort_unstable();
            ends.dedup();
        }

        let mut derivation = Vec::new();
        if self.derive(&state, self.start_nt, 0, n, &mut derivation) {
            Some(derivation)
        } else {
            None
        }
    }

    fn add(set: &mut Vec<Item>, seen: &mut HashSet<Item>, item: Item) {
        if seen.insert(item) {
            set.push(item);
        }
    }

    /// Extract the first parse of `nt` over `[start, end)` into `out`
    /// (pre-order).
    fn derive(
        &self,
        state: &ParseState,
        nt: usize,
        start: usize,
        end: usize,
        out: &mut Vec<usize>,
    ) -> bool {
        for &p in &self.prods_by_nt[nt] {
            if !state.completed.contains(&(p, start, end)) {
                continue;
            }
            let mark = out.len();
            out.push(p);
            if self.cover(state, p, 0, start, end, out) {
                return true;
            }
            out.truncate(mark);
        }
        false
    }

    /// Match `rhs[p][k..]` against `[pos, end)`, appending child derivations.
    fn cover(
        &self,
        state: &ParseState,
        p: usize,
        k: usize,
        pos: usize,
        end: usize,
        out: &mut Vec<usize>,
    ) -> bool {
        let rhs = &self.rhs[p];
        if k == rhs.len() {
            return pos == end;
        }
        match rhs[k] {
            Sym::Term(t) => {
                pos < end
                    && state.tok_ids[pos] == t
                    && self.cover(state, p, k + 1, pos + 1, end, out)
            }
            Sym::Nt(c) => {
                let Some(ends) = state.spans.get(&(c, pos)) else {
                    return false;
                };
                for &e in ends {
                    if e > end {
                        break;
                    }
                    let mark = out.len();
                    if self.derive(state, c, pos, e, out)
                        && self.cover(state, p, k + 1, e, end, out)
                    {
                        return true;
                    }
                    out.truncate(mark);
                }
                false
            }
        }
    }
}
