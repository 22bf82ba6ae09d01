//! Errors returned by the optimizer.

use thiserror::Error;

/// An error that aborts optimization.
///
/// Configuration variants are reported before any population work begins.
/// [`NonFiniteObjective`](MoeadError::NonFiniteObjective) is the only variant
/// that can surface mid-run: the optimizer never substitutes a default for a
/// broken objective value, as that would silently corrupt the ideal point and
/// the front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoeadError {
  /// No objective functions were supplied.
  #[error("no objective functions were supplied")]
  NoObjectives,

  /// The initial point has no coordinates.
  #[error("initial point has no coordinates")]
  EmptyIterate,

  /// A bound vector has a length that can't be matched against the variable
  /// space. Bounds must hold either a single value, broadcast to every
  /// coordinate, or one value per coordinate.
  #[error(
    "bound vector of length {len} matches neither 1 \
     nor the variable space dimension {dimension}"
  )]
  InvalidBounds {
    /// Length of the offending bound vector.
    len: usize,
    /// Dimension of the variable space.
    dimension: usize,
  },

  /// A lower bound exceeds the corresponding upper bound.
  #[error("lower bound {lower} exceeds upper bound {upper} at coordinate {index}")]
  ReversedBounds {
    /// Coordinate at which the bounds are reversed.
    index: usize,
    /// The offending lower bound.
    lower: f64,
    /// The offending upper bound.
    upper: f64,
  },

  /// The weight neighbourhood cannot be larger than the population.
  #[error(
    "neighbourhood size {neighbourhood_size} \
     exceeds population size {population_size}"
  )]
  NeighbourhoodTooLarge {
    /// The configured neighbourhood size.
    neighbourhood_size: usize,
    /// The configured population size.
    population_size: usize,
  },

  /// The weight neighbourhood must hold at least two subproblems, since both
  /// parents of a child are drawn from it.
  #[error("neighbourhood size {neighbourhood_size} cannot hold two distinct parents")]
  NeighbourhoodTooSmall {
    /// The configured neighbourhood size.
    neighbourhood_size: usize,
  },

  /// A probability parameter lies outside `[0, 1]`.
  #[error("{name} probability {value} is outside [0, 1]")]
  InvalidProbability {
    /// Name of the offending parameter.
    name: &'static str,
    /// The offending value.
    value: f64,
  },

  /// An objective function evaluated to NaN or an infinity.
  #[error("objective {objective} evaluated to a non-finite value {value}")]
  NonFiniteObjective {
    /// Index of the offending objective.
    objective: usize,
    /// The non-finite value it returned.
    value: f64,
  },
}
