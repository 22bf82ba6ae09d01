//! The evolving set of non-dominated solutions.

use crate::score::{ParetoDominance, Scores};

/// A point of the best known front paired with its objective values.
#[derive(Clone, Debug, PartialEq)]
pub struct ParetoEntry<const N: usize> {
  point: Vec<f64>,
  scores: Scores<N>,
}

impl<const N: usize> ParetoEntry<N> {
  /// The candidate point.
  pub fn point(&self) -> &[f64] {
    &self.point
  }

  /// The objective values of the point.
  pub fn scores(&self) -> &Scores<N> {
    &self.scores
  }
}

/// The best front found so far: a set of solutions no member of which
/// dominates another.
///
/// Candidates flow in through [`update`](ParetoArchive::update); whatever
/// survives every update is the optimization result.
#[derive(Clone, Debug, Default)]
pub struct ParetoArchive<const N: usize> {
  entries: Vec<ParetoEntry<N>>,
}

impl<const N: usize> ParetoArchive<N> {
  /// Creates an empty archive.
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
    }
  }

  /// Offers a candidate to the archive. A candidate dominated by an existing
  /// entry, or repeating an existing entry's objective values exactly, is
  /// rejected. An accepted candidate evicts every entry it dominates.
  /// Returns `true` iff the candidate was accepted.
  pub fn update(&mut self, point: Vec<f64>, scores: Scores<N>) -> bool {
    if self
      .entries
      .iter()
      .any(|e| e.scores.dominates(&scores) || e.scores == scores)
    {
      return false;
    }
    self.entries.retain(|e| !scores.dominates(&e.scores));
    self.entries.push(ParetoEntry { point, scores });
    true
  }

  /// The current archive contents. Stable between updates: calling this
  /// twice without an intervening update returns identical entries.
  pub fn entries(&self) -> &[ParetoEntry<N>] {
    &self.entries
  }

  /// Number of entries on the front.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` iff the archive holds no entries.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Drops every entry.
  pub fn clear(&mut self) {
    self.entries.clear();
  }
}
