use crate::error::{GenegramError, Result};
use crate::grammar::{Grammar, Symbol};
use rand::Rng;
use std::ops::Range;

/// Gene representation of a derivation.
///
/// Each codon picks one alternative for the nonterminal being expanded when
/// it is consumed, modulo the number of alternatives. Any integer is a valid
/// codon for any nonterminal, so mutated genes always decode structurally;
/// only the resulting string may be chemically meaningless downstream.
pub type Gene = Vec<u32>;

/// Value range for random and mutated codons.
pub const CODON_RANGE: Range<u32> = 0..256;

/// Convert a derivation index sequence into a gene.
///
/// Each codon is the rank of the production within the alternatives sharing
/// its left-hand side, in grammar order. With `max_len` the gene is
/// truncated (lossy) or right-padded with random codons; padding is only
/// consumed if a later mutation steers decoding down a longer path.
pub fn to_gene<R: Rng>(
    grammar: &Grammar,
    indices: &[usize],
    max_len: Option<usize>,
    rng: &mut R,
) -> Result<Gene> {
    let mut gene = Vec::with_capacity(max_len.unwrap_or(indices.len()));
    for &ix in indices {
        let prod = grammar.production(ix)?;
        let rank = grammar
            .alternatives(&prod.lhs)
            .iter()
            .position(|&alt| alt == ix)
            .ok_or(GenegramError::InvalidIndex {
                index: ix,
                len: grammar.len(),
            })?;
        gene.push(rank as u32);
    }
    if let Some(max_len) = max_len {
        if gene.len() > max_len {
            gene.truncate(max_len);
        } else {
            while gene.len() < max_len {
                gene.push(rng.gen_range(CODON_RANGE));
            }
        }
    }
    Ok(gene)
}

/// Decode a gene into a derivation index sequence.
///
/// Leftmost walk over an explicit stack of pending nonterminals, seeded
/// with the start symbol. A gene that runs out before the stack empties
/// yields a partial derivation; trailing codons past a completed derivation
/// are ignored. Total: never fails for any gene.
pub fn from_gene(grammar: &Grammar, gene: &[u32]) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut stack: Vec<&str> = vec![grammar.start()];
    for &g in gene {
        let Some(lhs) = stack.pop() else { break };
        let alts = grammar.alternatives(lhs);
        let rule = alts[g as usize % alts.len()];
        indices.push(rule);
        for sym in grammar.productions()[rule].rhs.iter().rev() {
            if let Symbol::Nonterminal(name) = sym {
                // Marker nonterminals without productions (`None` in the
                // SMILES grammar) are not expandable and are not pushed.
                if !grammar.alternatives(name).is_empty() {
                    stack.push(name);
                }
            }
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn toy() -> Grammar {
        Grammar::from_text("S -> A | B\nA -> 'x'\nB -> 'y'", "Nothing").unwrap()
    }

    #[test]
    fn test_codons_are_ranks_within_alternatives() {
        let g = toy();
        let mut rng = StdRng::seed_from_u64(7);
        // S -> A (rank 0 of S), A -> 'x' (rank 0 of A).
        assert_eq!(to_gene(&g, &[0, 2], None, &mut rng).unwrap(), vec![0, 0]);
        // S -> B, B -> 'y'.
        assert_eq!(to_gene(&g, &[1, 3], None, &mut rng).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_modulo_selection() {
        let g = toy();
        // Codon 1 picks S -> B, the second codon resolves B's only rule
        // whatever its value.
        assert_eq!(from_gene(&g, &[1, 255]), vec![1, 3]);
        assert_eq!(from_gene(&g, &[3, 0]), vec![1, 3]);
        assert_eq!(from_gene(&g, &[2, 0]), vec![0, 2]);
    }

    #[test]
    fn test_short_gene_gives_partial_derivation() {
        let g = toy();
        assert_eq!(from_gene(&g, &[0]), vec![0]);
        assert_eq!(from_gene(&g, &[]), Vec::<usize>::new());
    }

    #[test]
    fn test_trailing_codons_unused() {
        let g = toy();
        assert_eq!(from_gene(&g, &[0, 0, 99, 42]), vec![0, 2]);
    }

    #[test]
    fn test_padding_and_truncation() {
        let g = toy();
        let mut rng = StdRng::seed_from_u64(7);
        let padded = to_gene(&g, &[0, 2], Some(6), &mut rng).unwrap();
        assert_eq!(padded.len(), 6);
        assert_eq!(&padded[..2], &[0, 0]);
        assert!(padded[2..].iter().all(|&c| c < 256));

        let truncated = to_gene(&g, &[0, 2], Some(1), &mut rng).unwrap();
        assert_eq!(truncated, vec![0]);
    }

    #[test]
    fn test_invalid_index_rejected() {
        let g = toy();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(to_gene(&g, &[17], None, &mut rng).is_err());
    }

    #[test]
    fn test_decode_total_on_random_genes() {
        let g = Grammar::from_text(
            "S -> S S | '(' S ')' | 'x' | Nothing\nNothing -> None",
            "Nothing",
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let len = rng.gen_range(0..64);
            let gene: Gene = (0..len).map(|_| rng.gen_range(CODON_RANGE)).collect();
            let indices = from_gene(&g, &gene);
            assert!(indices.len() <= gene.len());
            for ix in indices {
                assert!(ix < g.len());
            }
        }
    }
}
