//! TSP instance: cost matrix, symmetry detection, tour evaluation.

use crate::error::Error;
use crate::sa::Tour;

/// A TSP instance backed by a full `n × n` cost matrix.
///
/// Costs are integers; the diagonal is never consulted. Symmetry is
/// detected at construction by comparing `cost[i][j]` with `cost[j][i]`
/// for all `i < j` — a single mismatch makes the instance asymmetric
/// (directed).
#[derive(Debug, Clone)]
pub struct TspInstance {
    name: String,
    n: usize,
    // row-major, n * n
    costs: Vec<i64>,
    symmetric: bool,
}

impl TspInstance {
    /// Builds an instance from a square cost matrix.
    ///
    /// Returns a data-integrity error when the matrix is not square.
    pub fn new(name: impl Into<String>, matrix: Vec<Vec<i64>>) -> Result<Self, Error> {
        let name = name.into();
        let n = matrix.len();
        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::data(format!(
                    "instance {name}: cost matrix is not square (row {i} has {} entries, expected {n})",
                    row.len()
                )));
            }
            costs.extend_from_slice(row);
        }

        let mut symmetric = true;
        'outer: for i in 0..n {
            for j in (i + 1)..n {
                if costs[i * n + j] != costs[j * n + i] {
                    symmetric = false;
                    break 'outer;
                }
            }
        }

        Ok(Self {
            name,
            n,
            costs,
            symmetric,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city_count(&self) -> usize {
        self.n
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Travel cost from city `from` to city `to`.
    pub fn cost(&self, from: usize, to: usize) -> i64 {
        self.costs[from * self.n + to]
    }

    /// Total cost of the closed round trip described by `tour`.
    ///
    /// Sums consecutive edges plus the closing edge back to the start.
    /// Tours with fewer than two cities cost 0.
    pub fn tour_cost(&self, tour: &Tour) -> i64 {
        let cities = tour.cities();
        if cities.len() < 2 {
            return 0;
        }
        let mut sum = 0;
        for pair in cities.windows(2) {
            sum += self.cost(pair[0], pair[1]);
        }
        sum + self.cost(cities[cities.len() - 1], cities[0])
    }

    /// Whether `tour` is a valid solution with the claimed cost: a
    /// permutation of this instance's cities whose round trip costs
    /// exactly `claimed_cost`.
    pub fn is_valid_solution(&self, tour: &Tour, claimed_cost: i64) -> bool {
        tour.len() == self.n && tour.is_permutation() && self.tour_cost(tour) == claimed_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    fn four_city() -> TspInstance {
        TspInstance::new(
            "four",
            vec![
                vec![0, 1, 2, 3],
                vec![1, 0, 4, 5],
                vec![2, 4, 0, 6],
                vec![3, 5, 6, 0],
            ],
        )
        .unwrap()
    }

    fn random_symmetric(n: usize, seed: u64) -> TspInstance {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut matrix = vec![vec![0i64; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let c = rng.random_range(1..100i64);
                matrix[i][j] = c;
                matrix[j][i] = c;
            }
        }
        TspInstance::new("sym", matrix).unwrap()
    }

    fn random_asymmetric(n: usize, seed: u64) -> TspInstance {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut matrix = vec![vec![0i64; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = rng.random_range(1..100i64);
                }
            }
        }
        TspInstance::new("asym", matrix).unwrap()
    }

    #[test]
    fn test_rejects_non_square() {
        let result = TspInstance::new("bad", vec![vec![0, 1], vec![1, 0], vec![2, 2]]);
        assert!(result.is_err());
        let result = TspInstance::new("bad", vec![vec![0, 1, 2], vec![1, 0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_symmetry_detection() {
        assert!(four_city().is_symmetric());
        let asym = TspInstance::new(
            "a",
            vec![vec![0, 1, 2], vec![9, 0, 4], vec![2, 4, 0]],
        )
        .unwrap();
        assert!(!asym.is_symmetric());
    }

    #[test]
    fn test_tour_cost_four_city() {
        let instance = four_city();
        let tour = Tour::from_cities(vec![0, 1, 2, 3]);
        assert_eq!(instance.tour_cost(&tour), 1 + 4 + 6 + 3);
    }

    #[test]
    fn test_degenerate_tours_cost_zero() {
        let instance = four_city();
        assert_eq!(instance.tour_cost(&Tour::from_cities(vec![])), 0);
        assert_eq!(instance.tour_cost(&Tour::from_cities(vec![2])), 0);
    }

    #[test]
    fn test_is_valid_solution() {
        let instance = four_city();
        let tour = Tour::from_cities(vec![0, 1, 2, 3]);
        assert!(instance.is_valid_solution(&tour, 14));
        assert!(!instance.is_valid_solution(&tour, 13));
        assert!(!instance.is_valid_solution(&Tour::from_cities(vec![0, 0, 2, 3]), 14));
        assert!(!instance.is_valid_solution(&Tour::from_cities(vec![0, 1, 2]), 14));
    }

    #[test]
    fn test_reversal_changes_cost_on_asymmetric() {
        // At least one asymmetric instance must show a reversal-dependent
        // cost, otherwise the directed matrix carries no information.
        let instance = random_asymmetric(6, 99);
        let forward = Tour::from_cities(vec![0, 1, 2, 3, 4, 5]);
        let backward = Tour::from_cities(vec![5, 4, 3, 2, 1, 0]);
        assert_ne!(
            instance.tour_cost(&forward),
            instance.tour_cost(&backward),
            "seed 99 unexpectedly produced a reversal-invariant directed matrix"
        );
    }

    proptest! {
        #[test]
        fn prop_rotation_invariant(n in 2usize..9, seed in any::<u64>(), shift in 0usize..8) {
            let instance = random_asymmetric(n, seed);
            let mut rng = StdRng::seed_from_u64(seed ^ 0xABCD);
            let tour = Tour::random(n, &mut rng);
            let mut rotated = tour.cities().to_vec();
            rotated.rotate_left(shift % n);
            let rotated = Tour::from_cities(rotated);
            prop_assert_eq!(instance.tour_cost(&tour), instance.tour_cost(&rotated));
        }

        #[test]
        fn prop_reversal_invariant_when_symmetric(n in 2usize..9, seed in any::<u64>()) {
            let instance = random_symmetric(n, seed);
            let mut rng = StdRng::seed_from_u64(seed ^ 0x1234);
            let tour = Tour::random(n, &mut rng);
            let reversed: Vec<usize> = tour.cities().iter().rev().copied().collect();
            let reversed = Tour::from_cities(reversed);
            prop_assert_eq!(instance.tour_cost(&tour), instance.tour_cost(&reversed));
        }
    }
}
