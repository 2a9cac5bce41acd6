use super::gene::{Gene, CODON_RANGE};
use rand::Rng;

/// Point mutation: replace one uniformly chosen codon with a uniform draw
/// from the codon range. The input is left untouched.
pub fn point_mutation<R: Rng>(gene: &[u32], rng: &mut R) -> Gene {
    let mut mutant = gene.to_vec();
    if mutant.is_empty() {
        return mutant;
    }
    let idx = rng.gen_range(0..mutant.len());
    mutant[idx] = rng.gen_range(CODON_RANGE);
    mutant
}

/// Generate a random gene of the given length.
pub fn random_gene<R: Rng>(length: usize, rng: &mut R) -> Gene {
    (0..length).map(|_| rng.gen_range(CODON_RANGE)).collect()
}

/// Single-point crossover: swap gene tails at a random cut point.
pub fn single_point_crossover<R: Rng>(
    parent1: &Gene,
    parent2: &Gene,
    rng: &mut R,
) -> (Gene, Gene) {
    let len = parent1.len().min(parent2.len());
    if len <= 1 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.gen_range(1..len);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    child1[point..len].copy_from_slice(&parent2[point..len]);
    child2[point..len].copy_from_slice(&parent1[point..len]);

    (child1, child2)
}
