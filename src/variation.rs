//! Crossover and mutation of candidate points.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::bounds::Bounds;

/// Builds a child point coordinatewise: with probability `crossover_prob` a
/// coordinate comes from `a`, otherwise from `b`.
pub(crate) fn crossover(
  a: &[f64],
  b: &[f64],
  crossover_prob: f64,
  rng: &mut impl Rng,
) -> Vec<f64> {
  a.iter()
    .zip(b)
    .map(|(&x, &y)| if rng.gen::<f64>() < crossover_prob { x } else { y })
    .collect()
}

/// Perturbs each coordinate of `child` with probability `mutation_prob` by
/// Gaussian noise scaled with `mutation_strength`, then clamps the point back
/// into bounds. The point never leaves the bounded box on exit.
pub(crate) fn mutate(
  child: &mut [f64],
  bounds: &Bounds,
  mutation_prob: f64,
  mutation_strength: f64,
  rng: &mut impl Rng,
) {
  for x in child.iter_mut() {
    if rng.gen::<f64>() < mutation_prob {
      let noise: f64 = rng.sample(StandardNormal);
      *x += mutation_strength * noise;
    }
  }
  bounds.clamp(child);
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  #[test]
  fn test_crossover_picks_coordinates_from_parents() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![-1.0, -2.0, -3.0, -4.0];
    let child = crossover(&a, &b, 0.5, &mut rng);
    assert_eq!(child.len(), a.len());
    for (i, &x) in child.iter().enumerate() {
      assert!(x == a[i] || x == b[i]);
    }
  }

  #[test]
  fn test_crossover_extremes_copy_one_parent() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![4.0, 5.0, 6.0];
    assert_eq!(crossover(&a, &b, 1.0, &mut rng), a);
    assert_eq!(crossover(&a, &b, 0.0, &mut rng), b);
  }

  #[test]
  fn test_mutation_respects_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    let bounds = Bounds::resolve(&[-1.0], &[1.0], 4).unwrap();
    let mut child = vec![0.9, -0.9, 0.0, 1.0];
    for _ in 0..100 {
      mutate(&mut child, &bounds, 1.0, 10.0, &mut rng);
      assert!(bounds.contains(&child));
    }
  }

  #[test]
  fn test_zero_probability_mutation_keeps_point_intact() {
    let mut rng = StdRng::seed_from_u64(11);
    let bounds = Bounds::resolve(&[-1.0], &[1.0], 3).unwrap();
    let mut child = vec![0.1, 0.2, 0.3];
    mutate(&mut child, &bounds, 0.0, 10.0, &mut rng);
    assert_eq!(child, vec![0.1, 0.2, 0.3]);
  }
}
