//! The evolving population of candidate points and the running ideal point.

use rand::Rng;

use crate::{
  bounds::Bounds,
  error::MoeadError,
  objective::executor::ObjectiveExecutor,
  score::{Score, Scores},
};

/// One candidate point per subproblem, each paired with its cached objective
/// values, plus the ideal point: the componentwise best value observed across
/// every evaluation of the run so far.
pub(crate) struct Population<const N: usize> {
  points: Vec<Vec<f64>>,
  scores: Vec<Scores<N>>,
  ideal: Scores<N>,
}

impl<const N: usize> Population<N> {
  /// Creates `population_size` points by perturbing every coordinate of
  /// `iterate` with uniform noise from `[-0.5, 0.5)` and clamping the result
  /// into bounds. The points carry no objective values until the first
  /// [`evaluate`](Population::evaluate) pass.
  pub fn initialize(
    iterate: &[f64],
    bounds: &Bounds,
    population_size: usize,
    rng: &mut impl Rng,
  ) -> Self {
    let points = (0..population_size)
      .map(|_| {
        let mut point: Vec<f64> =
          iterate.iter().map(|x| x + rng.gen::<f64>() - 0.5).collect();
        bounds.clamp(&mut point);
        point
      })
      .collect();
    Self {
      points,
      scores: Vec::new(),
      ideal: [Score::INFINITY; N],
    }
  }

  /// Evaluates every point against the objective set, caches the resulting
  /// objective values and folds them into the ideal point. Fails on the
  /// first non-finite objective value without touching the cache.
  pub fn evaluate<E, Strategy>(&mut self, objectives: &E) -> Result<(), MoeadError>
  where
    E: ObjectiveExecutor<N, Strategy>,
  {
    let scores = objectives.execute_evaluation(&self.points);
    debug_assert_eq!(
      scores.len(),
      self.points.len(),
      "objective executor must return one score array per point"
    );
    for score in &scores {
      validate_finite(score)?;
    }
    for score in &scores {
      self.update_ideal(score);
    }
    self.scores = scores;
    Ok(())
  }

  /// Folds an objective vector into the ideal point, keeping the
  /// componentwise minimum. The ideal point never increases in any
  /// component.
  pub fn update_ideal(&mut self, scores: &Scores<N>) {
    for (z, &f) in self.ideal.iter_mut().zip(scores) {
      if f < *z {
        *z = f;
      }
    }
  }

  /// Overwrites subproblem `i`'s point and its cached objective values.
  pub fn replace(&mut self, i: usize, point: Vec<f64>, scores: Scores<N>) {
    self.points[i] = point;
    self.scores[i] = scores;
  }

  pub fn points(&self) -> &[Vec<f64>] {
    &self.points
  }

  pub fn scores(&self) -> &[Scores<N>] {
    &self.scores
  }

  pub fn point(&self, i: usize) -> &[f64] {
    &self.points[i]
  }

  pub fn score(&self, i: usize) -> &Scores<N> {
    &self.scores[i]
  }

  pub fn ideal(&self) -> &Scores<N> {
    &self.ideal
  }
}

/// Rejects objective vectors holding NaNs or infinities. The optimizer
/// propagates these instead of substituting a default, which would corrupt
/// the ideal point and the front.
pub(crate) fn validate_finite<const N: usize>(
  scores: &Scores<N>,
) -> Result<(), MoeadError> {
  match scores.iter().position(|v| !v.is_finite()) {
    Some(objective) => Err(MoeadError::NonFiniteObjective {
      objective,
      value: scores[objective],
    }),
    None => Ok(()),
  }
}
