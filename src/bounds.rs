//! Box bounds on the variable space.

use crate::error::MoeadError;

/// Lower and upper bounds resolved to the dimension of the variable space.
/// Length-1 bound vectors are broadcast to every coordinate.
#[derive(Clone, Debug)]
pub(crate) struct Bounds {
  lower: Vec<f64>,
  upper: Vec<f64>,
}

impl Bounds {
  /// Resolves raw bound vectors against the variable space dimension,
  /// broadcasting scalar bounds and rejecting mismatched shapes and
  /// reversed bound pairs.
  pub fn resolve(
    lower: &[f64],
    upper: &[f64],
    dimension: usize,
  ) -> Result<Self, MoeadError> {
    let lower = Self::broadcast(lower, dimension)?;
    let upper = Self::broadcast(upper, dimension)?;
    for (index, (&lo, &up)) in lower.iter().zip(&upper).enumerate() {
      if lo > up {
        return Err(MoeadError::ReversedBounds {
          index,
          lower: lo,
          upper: up,
        });
      }
    }
    Ok(Self { lower, upper })
  }

  fn broadcast(bound: &[f64], dimension: usize) -> Result<Vec<f64>, MoeadError> {
    match bound.len() {
      1 => Ok(vec![bound[0]; dimension]),
      len if len == dimension => Ok(bound.to_vec()),
      len => Err(MoeadError::InvalidBounds { len, dimension }),
    }
  }

  /// Clamps every coordinate of `point` into its bound interval.
  pub fn clamp(&self, point: &mut [f64]) {
    for ((x, &lo), &up) in point.iter_mut().zip(&self.lower).zip(&self.upper) {
      *x = x.clamp(lo, up);
    }
  }

  /// Returns `true` iff every coordinate of `point` lies within its bound
  /// interval.
  #[cfg(test)]
  pub fn contains(&self, point: &[f64]) -> bool {
    point
      .iter()
      .zip(&self.lower)
      .zip(&self.upper)
      .all(|((&x, &lo), &up)| lo <= x && x <= up)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_scalar_bounds_broadcast() {
    let b = Bounds::resolve(&[-1.0], &[1.0], 3).unwrap();
    let mut point = vec![-2.0, 0.5, 7.0];
    b.clamp(&mut point);
    assert_eq!(point, vec![-1.0, 0.5, 1.0]);
  }

  #[test]
  fn test_full_bounds_kept() {
    let b = Bounds::resolve(&[0.0, -1.0], &[1.0, 0.0], 2).unwrap();
    let mut point = vec![2.0, -3.0];
    b.clamp(&mut point);
    assert_eq!(point, vec![1.0, -1.0]);
    assert!(b.contains(&point));
  }

  #[test]
  fn test_mismatched_bounds_rejected() {
    assert_eq!(
      Bounds::resolve(&[0.0, 1.0], &[1.0], 3).unwrap_err(),
      MoeadError::InvalidBounds { len: 2, dimension: 3 }
    );
  }

  #[test]
  fn test_reversed_bounds_rejected() {
    assert_eq!(
      Bounds::resolve(&[2.0], &[-2.0], 1).unwrap_err(),
      MoeadError::ReversedBounds {
        index: 0,
        lower: 2.0,
        upper: -2.0,
      }
    );
  }
}
