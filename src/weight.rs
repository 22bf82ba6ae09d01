//! Weight vectors spanning the objective simplex and their neighbourhoods.

use itertools::Itertools;
use rand::Rng;

use crate::error::MoeadError;

/// A fixed set of weight vectors, one per subproblem, together with the
/// precomputed indices of each vector's nearest neighbours.
///
/// For two objectives the vectors are spaced uniformly along the simplex
/// edge. For any other objective count they are sampled from the simplex by
/// normalizing exponential deviates drawn from the run's random stream, which
/// keeps the set reproducible for a fixed seed.
#[derive(Debug)]
pub(crate) struct WeightVectors<const N: usize> {
  weights: Vec<[f64; N]>,
  neighbourhoods: Vec<Vec<usize>>,
}

impl<const N: usize> WeightVectors<N> {
  /// Generates `population_size` weight vectors and, for each one, the
  /// indices of the `neighbourhood_size` vectors closest to it by Euclidean
  /// distance, ties broken by index order. Every vector is its own nearest
  /// neighbour.
  pub fn new(
    population_size: usize,
    neighbourhood_size: usize,
    rng: &mut impl Rng,
  ) -> Result<Self, MoeadError> {
    if neighbourhood_size > population_size {
      return Err(MoeadError::NeighbourhoodTooLarge {
        neighbourhood_size,
        population_size,
      });
    }
    if neighbourhood_size < 2 {
      return Err(MoeadError::NeighbourhoodTooSmall { neighbourhood_size });
    }

    let weights: Vec<[f64; N]> = (0..population_size)
      .map(|i| Self::simplex_point(i, population_size, rng))
      .collect();

    let neighbourhoods = weights
      .iter()
      .map(|w| {
        let distances: Vec<f64> =
          weights.iter().map(|v| squared_distance(w, v)).collect();
        // squared distance orders the same as euclidean
        (0..population_size)
          .sorted_by(|&a, &b| {
            distances[a].total_cmp(&distances[b]).then(a.cmp(&b))
          })
          .take(neighbourhood_size)
          .collect()
      })
      .collect();

    Ok(Self {
      weights,
      neighbourhoods,
    })
  }

  fn simplex_point(i: usize, n: usize, rng: &mut impl Rng) -> [f64; N] {
    if N == 2 {
      let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.5 };
      let mut w = [0.0; N];
      w[0] = t;
      w[1] = 1.0 - t;
      w
    } else {
      let mut w = [0.0; N];
      for x in w.iter_mut() {
        *x = -(1.0 - rng.gen::<f64>()).ln();
      }
      let sum: f64 = w.iter().sum();
      if sum > 0.0 {
        w.map(|x| x / sum)
      } else {
        [1.0 / N as f64; N]
      }
    }
  }

  /// The weight vector of subproblem `i`.
  pub fn weight(&self, i: usize) -> &[f64; N] {
    &self.weights[i]
  }

  /// Indices of the subproblems whose weight vectors are closest to that of
  /// subproblem `i`, including `i` itself.
  pub fn neighbourhood(&self, i: usize) -> &[usize] {
    &self.neighbourhoods[i]
  }
}

fn squared_distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
  a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  #[test]
  fn test_two_objective_weights_are_uniformly_spaced() {
    let mut rng = StdRng::seed_from_u64(0);
    let weights = WeightVectors::<2>::new(5, 2, &mut rng).unwrap();
    assert_eq!(*weights.weight(0), [0.0, 1.0]);
    assert_eq!(*weights.weight(2), [0.5, 0.5]);
    assert_eq!(*weights.weight(4), [1.0, 0.0]);
  }

  #[test]
  fn test_weights_lie_on_simplex() {
    let mut rng = StdRng::seed_from_u64(7);
    let weights = WeightVectors::<3>::new(30, 5, &mut rng).unwrap();
    for i in 0..30 {
      let w = weights.weight(i);
      assert!(w.iter().all(|&x| x >= 0.0));
      assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
  }

  #[test]
  fn test_weights_are_reproducible_for_a_fixed_seed() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let first = WeightVectors::<3>::new(10, 3, &mut a).unwrap();
    let second = WeightVectors::<3>::new(10, 3, &mut b).unwrap();
    for i in 0..10 {
      assert_eq!(first.weight(i), second.weight(i));
    }
  }

  #[test]
  fn test_neighbourhood_holds_closest_indices() {
    let mut rng = StdRng::seed_from_u64(0);
    let weights = WeightVectors::<2>::new(10, 4, &mut rng).unwrap();
    for i in 0..10 {
      let neighbourhood = weights.neighbourhood(i);
      assert_eq!(neighbourhood.len(), 4);
      assert!(neighbourhood.contains(&i));
      assert!(neighbourhood.iter().all_unique());
    }
    // uniformly spaced vectors make neighbours adjacent in index order
    assert!(weights.neighbourhood(0).iter().all(|&j| j <= 3));
  }

  #[test]
  fn test_oversized_neighbourhood_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let error = WeightVectors::<2>::new(10, 15, &mut rng).unwrap_err();
    assert_eq!(
      error,
      MoeadError::NeighbourhoodTooLarge {
        neighbourhood_size: 15,
        population_size: 10,
      }
    );
  }

  #[test]
  fn test_undersized_neighbourhood_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let error = WeightVectors::<2>::new(10, 1, &mut rng).unwrap_err();
    assert_eq!(
      error,
      MoeadError::NeighbourhoodTooSmall {
        neighbourhood_size: 1,
      }
    );
  }
}
