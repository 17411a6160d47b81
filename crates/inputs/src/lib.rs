use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InputCase {
    Ascending,
    ReverseSorted,
    RandomUniform,
    Median3Killer,
}

impl InputCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::ReverseSorted => "reverse_sorted",
            Self::RandomUniform => "random_uniform",
            Self::Median3Killer => "median3_killer",
        }
    }
}

pub fn generate_case(case: InputCase, n: usize, seed: u64) -> Vec<u64> {
    match case {
        InputCase::Ascending => ascending(n),
        InputCase::ReverseSorted => reverse_sorted(n),
        InputCase::RandomUniform => random_uniform(n, seed),
        InputCase::Median3Killer => median3_killer(n),
    }
}

/// Ranks `1..=n` in order.
pub fn ascending(n: usize) -> Vec<u64> {
    (1..=n as u64).collect()
}

/// Ranks `n..=1`. Every insertion shifts the whole sorted prefix, which is
/// the insertion-sort worst case.
pub fn reverse_sorted(n: usize) -> Vec<u64> {
    (1..=n as u64).rev().collect()
}

pub fn random_uniform(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(n);
    for _ in 0..n {
        data.push(rng.random::<u64>());
    }
    data
}

/// Permutation of `1..=n` that starves median-of-three quicksorts of
/// partition balance.
///
/// Works over a shrinking list of candidate positions: each round hands the
/// two lowest unassigned ranks to the first and middle candidates and the
/// highest unassigned rank to the last one, so the triple a median-of-three
/// rule samples is value-patterned toward a near-maximal pivot at every
/// level the sort visits.
pub fn median3_killer(n: usize) -> Vec<u64> {
    let mut ranks = vec![0_u64; n];
    let mut positions: Vec<usize> = (0..n).collect();
    let mut low = 1_u64;
    let mut high = n as u64;

    loop {
        match positions.len() {
            0 => break,
            1 => {
                ranks[positions[0]] = low;
                break;
            }
            2 => {
                ranks[positions[0]] = low;
                ranks[positions[1]] = low + 1;
                break;
            }
            m => {
                let first = positions[0];
                let mid = positions[m / 2];
                let last = positions[m - 1];

                ranks[first] = low;
                ranks[mid] = low + 1;
                ranks[last] = high;
                low += 2;
                high -= 1;

                positions.retain(|&p| p != first && p != mid && p != last);
            }
        }
    }

    ranks
}
