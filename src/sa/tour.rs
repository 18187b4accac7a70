//! Tour representation and move generation.

use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate TSP solution: a permutation of the city indices `0..n`.
///
/// Interpreted as a closed round trip — after the last city the tour
/// returns to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// The identity tour `0, 1, …, n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (0..n).collect(),
        }
    }

    /// A uniformly random tour over `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n).collect();
        cities.shuffle(rng);
        Self { cities }
    }

    /// Builds a tour from an explicit city order.
    ///
    /// The order is taken as-is; use [`Tour::is_permutation`] to check it.
    pub fn from_cities(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Whether every city index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.cities.len();
        let mut seen = vec![false; n];
        for &city in &self.cities {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// Proposes a neighbour by swapping two distinct random positions.
    ///
    /// Copy-on-propose: `self` is never mutated, so a rejected candidate
    /// can be discarded without undo bookkeeping. Swapping two positions
    /// is reachable-complete — repeated swaps connect any two tours.
    ///
    /// Requires `len() >= 2`.
    pub fn propose_swap<R: Rng>(&self, rng: &mut R) -> Tour {
        debug_assert!(self.cities.len() >= 2);
        let i = rng.random_range(0..self.cities.len());
        let mut j = rng.random_range(0..self.cities.len());
        while j == i {
            j = rng.random_range(0..self.cities.len());
        }
        let mut cities = self.cities.clone();
        cities.swap(i, j);
        Tour { cities }
    }
}
