use thiserror::Error;

/// Reasons a pair of endpoints cannot bracket a root.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,
    #[error("bracket has zero width")]
    ZeroWidth,
    #[error("residuals at the bracket endpoints have the same sign")]
    NoSignChange,
}

/// Orders `[a, b]` left to right after checking it is a usable interval.
pub(super) fn ordered([a, b]: [f64; 2]) -> Result<[f64; 2], BracketError> {
    if !(a.is_finite() && b.is_finite()) {
        return Err(BracketError::NonFinite);
    }
    #[allow(clippy::float_cmp)]
    if a == b {
        return Err(BracketError::ZeroWidth);
    }
    Ok(if a < b { [a, b] } else { [b, a] })
}

/// An interval `[lo, hi]` across which the residual changes sign.
///
/// Only the sign at `lo` is stored; the sign at `hi` is always the opposite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
    negative_at_lo: bool,
}

impl Bracket {
    /// Pairs ordered endpoints with their (non-zero) residuals.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NoSignChange`] if both residuals fall on the
    /// same side of zero.
    pub(super) fn new([lo, hi]: [f64; 2], f_lo: f64, f_hi: f64) -> Result<Self, BracketError> {
        let negative_at_lo = f_lo < 0.0;
        if negative_at_lo == (f_hi < 0.0) {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self {
            lo,
            hi,
            negative_at_lo,
        })
    }

    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.lo + 0.5 * (self.hi - self.lo)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// True once the midpoint is guaranteed to lie within `x_tol` of the root.
    #[must_use]
    pub fn is_converged(&self, x_tol: f64) -> bool {
        self.width() < 2.0 * x_tol
    }

    /// Moves whichever end shares the sign of `residual` to `x`.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) {
        if (residual < 0.0) == self.negative_at_lo {
            self.lo = x;
        } else {
            self.hi = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn orders_reversed_endpoints() {
        assert_eq!(ordered([3.0, 1.0]), Ok([1.0, 3.0]));
        assert_eq!(ordered([1.0, 1.0]), Err(BracketError::ZeroWidth));
        assert_eq!(ordered([1.0, f64::INFINITY]), Err(BracketError::NonFinite));
    }

    #[test]
    fn same_side_residuals_are_rejected() {
        assert_eq!(
            Bracket::new([0.0, 1.0], -2.0, -0.5),
            Err(BracketError::NoSignChange)
        );
        assert_eq!(
            Bracket::new([0.0, 1.0], 2.0, 0.5),
            Err(BracketError::NoSignChange)
        );
    }

    #[test]
    fn shrink_keeps_the_sign_change() {
        let mut bracket = Bracket::new([0.0, 2.0], -1.0, 1.0).expect("valid bracket");

        bracket.shrink(1.0, -0.3);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.shrink(1.5, 0.2);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_relative_eq!(bracket.midpoint(), 1.25);
    }

    #[test]
    fn falling_residual_moves_the_right_ends() {
        let mut bracket = Bracket::new([0.0, 4.0], 3.0, -1.0).expect("valid bracket");

        bracket.shrink(2.0, 0.5);
        assert_eq!(bracket.as_array(), [2.0, 4.0]);

        bracket.shrink(3.0, -0.1);
        assert_eq!(bracket.as_array(), [2.0, 3.0]);
    }

    #[test]
    fn converges_below_twice_the_tolerance() {
        let bracket = Bracket::new([1.0, 1.0015], -1.0, 1.0).expect("valid bracket");

        assert!(bracket.is_converged(1e-3));
        assert!(!bracket.is_converged(5e-4));
    }
}
