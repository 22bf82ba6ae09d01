//! Objective function operators and utilities.

use executor::ObjectiveExecutor;
use rayon::prelude::*;

use crate::{
  execution::*,
  score::{Score, Scores},
};

/// An operator that evaluates a candidate point against every objective,
/// returning an array of `N` objective values.
///
/// The optimizer minimizes every value. If an objective of yours is to be
/// maximized, multiply its value by `-1` before returning it.
///
/// Can be applied in parallel to each point or to batches of points during
/// whole-population evaluation passes by converting it into a parallelized
/// operator with `par_each()` or `par_batch()` methods.
///
/// # Examples
/// ```
/// # use moead::execution::IntoPar;
/// let o = |x: &[f64]| [x[0] * 2.0]; // only one objective
/// let o = |x: &[f64]| [x[0] + 1.0, x[0] - 1.0]; // 2 objectives
/// // or use an array of closures that return a single value
/// let o = [
///   |x: &[f64]| x[0] + 1.0,
///   |x: &[f64]| x[0] * x[0],
/// ];
/// o.par_batch();
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Objectives<const N: usize> {
  /// Returns an array of objective values for given point.
  /// The lower a value - the better.
  fn evaluate(&self, point: &[f64]) -> Scores<N>;
}

impl<const N: usize, F> Objectives<N> for [F; N]
where
  F: Fn(&[f64]) -> Score,
{
  fn evaluate(&self, point: &[f64]) -> Scores<N> {
    self.each_ref().map(|f| f(point))
  }
}

impl<const N: usize, F> Objectives<N> for F
where
  F: Fn(&[f64]) -> Scores<N>,
{
  fn evaluate(&self, point: &[f64]) -> Scores<N> {
    self(point)
  }
}

impl<const N: usize, O> IntoPar<Vec<f64>, N> for O where O: Objectives<N> + Sync {}

/// An operator that evaluates a whole population at once, returning an array
/// of `N` objective values per point. Use it when evaluation of separate
/// points can be vectorized or shares expensive setup.
///
/// # Examples
/// ```
/// let e = |ps: &[Vec<f64>]| ps.iter().map(|p| [p[0], -p[0]]).collect();
/// # let _: Vec<_> = e(&[]);
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Evaluator<const N: usize> {
  /// Returns a vector of arrays of objective values for given points.
  ///
  /// # Panics
  ///
  /// Doesn't panic itself but will cause panic during optimization if this
  /// function returns a different number of score arrays than the number of
  /// points.
  fn evaluate(&self, points: &[Vec<f64>]) -> Vec<Scores<N>>;
}

impl<const N: usize, F> Evaluator<N> for F
where
  F: Fn(&[Vec<f64>]) -> Vec<Scores<N>>,
{
  fn evaluate(&self, points: &[Vec<f64>]) -> Vec<Scores<N>> {
    self(points)
  }
}

/// This private module prevents exposing the `Executor` to a user.
pub(crate) mod executor {
  use crate::score::Scores;

  /// An internal objective evaluation executor.
  pub trait ObjectiveExecutor<const N: usize, ExecutionStrategy> {
    /// Executes objective evaluation optionally parallelizing operator's
    /// application.
    fn execute_evaluation(&self, points: &[Vec<f64>]) -> Vec<Scores<N>>;
  }
}

impl<const N: usize, E> ObjectiveExecutor<N, CustomExecution> for E
where
  E: Evaluator<N>,
{
  fn execute_evaluation(&self, points: &[Vec<f64>]) -> Vec<Scores<N>> {
    self.evaluate(points)
  }
}

impl<const N: usize, O> ObjectiveExecutor<N, SequentialExecution> for O
where
  O: Objectives<N>,
{
  fn execute_evaluation(&self, points: &[Vec<f64>]) -> Vec<Scores<N>> {
    points.iter().map(|p| self.evaluate(p)).collect()
  }
}

impl<const N: usize, O> ObjectiveExecutor<N, ParallelEachExecution>
  for ParEach<Vec<f64>, O>
where
  O: Objectives<N> + Sync,
{
  fn execute_evaluation(&self, points: &[Vec<f64>]) -> Vec<Scores<N>> {
    let operator: &O = self;
    points.par_iter().map(|p| operator.evaluate(p)).collect()
  }
}

impl<const N: usize, O> ObjectiveExecutor<N, ParallelBatchExecution>
  for ParBatch<Vec<f64>, O>
where
  O: Objectives<N> + Sync,
{
  fn execute_evaluation(&self, points: &[Vec<f64>]) -> Vec<Scores<N>> {
    let operator: &O = self;
    let chunk_size = (points.len() / rayon::current_num_threads()).max(1);
    points
      .par_chunks(chunk_size)
      .flat_map_iter(|chunk| chunk.iter().map(|p| operator.evaluate(p)))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn takes_executor<ES, const N: usize, E: ObjectiveExecutor<N, ES>>(e: &E) {
    e.execute_evaluation(&[]);
  }

  #[test]
  fn test_objectives_from_closure() {
    let objectives = |x: &[f64]| [x[0], x[0] * 2.0, x[0] * 3.0];
    takes_executor(&objectives);
    takes_executor(&objectives.par_each());
    takes_executor(&objectives.par_batch());
    assert_eq!(objectives.evaluate(&[1.0]), [1.0, 2.0, 3.0]);
  }

  #[test]
  fn test_objectives_from_closure_array() {
    let f1 = |x: &[f64]| x[0];
    let f2 = |x: &[f64]| x[0] * 2.0;
    let f3 = |x: &[f64]| x[0] * 3.0;
    let objectives = [f1, f2, f3];
    takes_executor(&objectives);
    takes_executor(&objectives.par_each());
    takes_executor(&objectives.par_batch());
    assert_eq!(objectives.evaluate(&[1.0]), [1.0, 2.0, 3.0]);
  }

  #[test]
  fn test_evaluator_from_closure() {
    let evaluator =
      |points: &[Vec<f64>]| points.iter().map(|_| [1.0, 2.0]).collect();
    takes_executor(&evaluator);
  }

  #[test]
  fn test_custom_objectives() {
    struct CustomObjectives {}
    impl Objectives<1> for CustomObjectives {
      fn evaluate(&self, point: &[f64]) -> Scores<1> {
        [point.iter().sum()]
      }
    }

    let objectives = CustomObjectives {};
    takes_executor(&objectives);
    assert_eq!(objectives.evaluate(&[1.0, 2.0]), [3.0]);
    takes_executor(&objectives.par_each());
  }

  #[test]
  fn test_custom_evaluator() {
    struct CustomEvaluator {}
    impl Evaluator<2> for CustomEvaluator {
      fn evaluate(&self, points: &[Vec<f64>]) -> Vec<Scores<2>> {
        points.iter().map(|p| [p[0], -p[0]]).collect()
      }
    }

    let evaluator = CustomEvaluator {};
    takes_executor(&evaluator);
  }
}
