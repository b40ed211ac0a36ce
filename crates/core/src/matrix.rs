use std::ops::{Add, Index, Mul, Neg, Sub};

use thiserror::Error;

/// Returned when a [`Matrix2`] has no inverse.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("matrix is singular (determinant {det})")]
pub struct SingularMatrix {
    pub det: f64,
}

/// A 2×1 column vector `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Largest component.
    #[must_use]
    pub fn max_component(self) -> f64 {
        self.x.max(self.y)
    }

    /// Returns true if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// A 2×2 matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    rows: [[f64; 2]; 2],
}

impl Matrix2 {
    #[must_use]
    pub const fn new(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::new([[1.0, 0.0], [0.0, 1.0]])
    }

    #[must_use]
    pub fn det(&self) -> f64 {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Returns the inverse via the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`SingularMatrix`] if the determinant is zero or not finite,
    /// or if the inverse would contain non-finite entries.
    pub fn inverse(&self) -> Result<Self, SingularMatrix> {
        let det = self.det();
        #[allow(clippy::float_cmp)]
        if det == 0.0 || !det.is_finite() {
            return Err(SingularMatrix { det });
        }

        let [[a, b], [c, d]] = self.rows;
        let inverse = Self::new([[d / det, -b / det], [-c / det, a / det]]);
        if inverse.rows.iter().flatten().all(|v| v.is_finite()) {
            Ok(inverse)
        } else {
            Err(SingularMatrix { det })
        }
    }
}

impl Index<(usize, usize)> for Matrix2 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        let [[a, b], [c, d]] = self.rows;
        Vector2::new(a * v.x + b * v.y, c * v.x + d * v.y)
    }
}

impl Add for Matrix2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let entry = |i: usize, j: usize| self[(i, j)] + rhs[(i, j)];
        Self::new([[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]])
    }
}

impl Sub for Matrix2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let entry = |i: usize, j: usize| self[(i, j)] - rhs[(i, j)];
        Self::new([[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]])
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let entry = |i: usize, j: usize| self[(i, 0)] * rhs[(0, j)] + self[(i, 1)] * rhs[(1, j)];
        Self::new([[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]])
    }
}
