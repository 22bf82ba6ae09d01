//! Tchebycheff decomposition of a multi-objective problem.

use crate::score::{Score, Scores};

/// Collapses a full objective vector into the single scalar that subproblem
/// replacement decisions are made on: the weighted maximum deviation of the
/// candidate's objective values from the ideal point. Lower is better.
///
/// Array lengths tie all three arguments to the same objective count at
/// compile time.
pub(crate) fn tchebycheff<const N: usize>(
  weights: &[f64; N],
  ideal: &Scores<N>,
  candidate: &Scores<N>,
) -> Score {
  weights
    .iter()
    .zip(ideal)
    .zip(candidate)
    .map(|((w, z), f)| w * (f - z).abs())
    .fold(0.0, Score::max)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tchebycheff_takes_weighted_maximum() {
    let weights = [0.5, 0.5];
    let ideal = [0.0, 0.0];
    assert_eq!(tchebycheff(&weights, &ideal, &[2.0, 6.0]), 3.0);
    assert_eq!(tchebycheff(&weights, &ideal, &[8.0, 6.0]), 4.0);
  }

  #[test]
  fn test_tchebycheff_measures_deviation_from_ideal() {
    let weights = [1.0, 0.0];
    let ideal = [-1.0, 0.0];
    assert_eq!(tchebycheff(&weights, &ideal, &[1.0, 100.0]), 2.0);
  }

  #[test]
  fn test_single_objective_reduces_to_distance_from_ideal() {
    let weights = [1.0];
    let ideal = [3.0];
    assert_eq!(tchebycheff(&weights, &ideal, &[5.0]), 2.0);
    assert_eq!(tchebycheff(&weights, &ideal, &[1.0]), 2.0);
  }

  #[test]
  fn test_candidate_at_ideal_scores_zero() {
    let weights = [0.3, 0.7];
    let ideal = [1.0, -2.0];
    assert_eq!(tchebycheff(&weights, &ideal, &[1.0, -2.0]), 0.0);
  }
}
