//! Type aliases for objective values used throughout the library, and the
//! Pareto dominance relation defined on them.

use std::cmp::Ordering;

/// An alias for a single objective value.
///
/// The optimizer always minimizes. If an objective of yours is to be
/// maximized, multiply its value by `-1` before returning it.
pub type Score = f64;

/// An alias for an array of `N` values of `Score` type, one value per
/// objective.
pub type Scores<const N: usize> = [Score; N];

/// Describes pareto dominance for arrays of `Score`s.
pub(crate) trait ParetoDominance {
  /// Returns `Less` if `self` dominates `other`, `Greater` if `other`
  /// dominates `self`, otherwise `Equal`. `self` dominates `other` if each
  /// `self` value is less than or equal to the respective `other` value and
  /// at least one is strictly less.
  fn dominance(&self, other: &Self) -> Ordering;

  /// Returns `true` iff `self` dominates `other`.
  fn dominates(&self, other: &Self) -> bool;
}

impl ParetoDominance for [Score] {
  fn dominance(&self, other: &Self) -> Ordering {
    debug_assert_eq!(
      self.len(),
      other.len(),
      "dominance requires vectors of equal length"
    );
    let mut ord = Ordering::Equal;
    for (a, b) in self.iter().zip(other) {
      match (ord, a.partial_cmp(b).expect("NaN encountered")) {
        (Ordering::Equal, next_ord) => ord = next_ord,
        (Ordering::Greater, Ordering::Less)
        | (Ordering::Less, Ordering::Greater) => return Ordering::Equal,
        _ => {}
      }
    }
    ord
  }

  fn dominates(&self, other: &Self) -> bool {
    self.dominance(other) == Ordering::Less
  }
}

#[cfg(test)]
mod tests {
  use std::cmp::Ordering;

  use super::*;

  #[test]
  fn test_pareto_dominance() {
    assert_eq!([1.0, 2.0, 3.0].dominance(&[1.0, 2.0, 3.0]), Ordering::Equal);
    assert_eq!(
      [-1.0, 2.0, -3.0].dominance(&[-1.0, 2.0, -3.0]),
      Ordering::Equal
    );
    assert_eq!([1.0, 2.0, 3.0].dominance(&[3.0, 2.0, 1.0]), Ordering::Equal);
    assert_eq!([0.0, 5.0].dominance(&[1.0, 4.0]), Ordering::Equal);

    assert_eq!(
      [10.0, 2.0, 3.0].dominance(&[1.0, 2.0, 3.0]),
      Ordering::Greater
    );
    assert_eq!(
      [1.0, 20.0, 3.0].dominance(&[1.0, 2.0, 3.0]),
      Ordering::Greater
    );
    assert_eq!(
      [1.0, 2.0, 30.0].dominance(&[1.0, 2.0, 3.0]),
      Ordering::Greater
    );
    assert_eq!([-1.0, 1.0].dominance(&[-2.0, 1.0]), Ordering::Greater);

    assert_eq!([1.0, 2.0, 3.0].dominance(&[10.0, 2.0, 3.0]), Ordering::Less);
    assert_eq!([1.0, 2.0, 3.0].dominance(&[1.0, 20.0, 3.0]), Ordering::Less);
    assert_eq!([1.0, 2.0, 3.0].dominance(&[1.0, 2.0, 30.0]), Ordering::Less);
    assert_eq!([-3.0, 2.0].dominance(&[2.0, 2.0]), Ordering::Less);

    assert_eq!([1.0; 0].dominance(&[0.0; 0]), Ordering::Equal);
  }

  #[test]
  fn test_dominance_is_irreflexive() {
    for v in [
      vec![0.0, 0.0],
      vec![1.0, -2.0, 3.0],
      vec![f64::MAX, f64::MIN],
    ] {
      assert!(!v.as_slice().dominates(v.as_slice()));
    }
  }

  #[test]
  fn test_dominance_is_asymmetric() {
    let pairs = [
      ([1.0, 2.0], [2.0, 3.0]),
      ([0.0, 0.0], [0.0, 1.0]),
      ([-5.0, 4.0], [-5.0, 5.0]),
    ];
    for (a, b) in pairs {
      assert!(a.dominates(&b));
      assert!(!b.dominates(&a));
    }
  }
}
