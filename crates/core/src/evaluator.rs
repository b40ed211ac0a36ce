use thiserror::Error;

/// Errors reported by an [`Evaluator`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("derivative of order {order} is not available")]
    DerivativeUnavailable { order: usize },
}

/// A scalar function that can report its value and its derivatives.
///
/// Methods that need higher derivatives (truncation error bounds, for
/// example) take an `Evaluator` instead of a bare closure. Implementations
/// decide how derivatives are obtained: [`Analytic`] uses closed forms,
/// [`CentralDifference`] approximates them numerically.
pub trait Evaluator {
    /// Returns `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Returns the derivative of the given order at `x`.
    ///
    /// Order `0` is the function value.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DerivativeUnavailable`] if the evaluator cannot
    /// supply that order.
    fn derivative(&self, order: usize, x: f64) -> Result<f64, EvalError>;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, order: usize, x: f64) -> Result<f64, EvalError> {
        (**self).derivative(order, x)
    }
}

/// An evaluator backed by a function and a closed-form derivative rule.
///
/// The derivative closure receives `(order, x)` and returns `None` for
/// orders it does not know.
///
/// # Example
///
/// ```
/// use numlab_core::{Analytic, Evaluator};
///
/// // Every derivative of exp is exp.
/// let exp = Analytic::new(f64::exp, |_order, x| Some(x.exp()));
/// assert_eq!(exp.derivative(4, 0.0), Ok(1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Analytic<F, D> {
    f: F,
    derivative: D,
}

impl<F, D> Analytic<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(usize, f64) -> Option<f64>,
{
    /// Creates an evaluator from a function and its derivative rule.
    pub fn new(f: F, derivative: D) -> Self {
        Self { f, derivative }
    }
}

impl<F, D> Evaluator for Analytic<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(usize, f64) -> Option<f64>,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, order: usize, x: f64) -> Result<f64, EvalError> {
        if order == 0 {
            return Ok(self.value(x));
        }
        (self.derivative)(order, x).ok_or(EvalError::DerivativeUnavailable { order })
    }
}

/// An evaluator that approximates derivatives with central differences.
///
/// The `n`-th derivative uses the `n`-th central difference
/// `Σ (-1)^k C(n, k) f(x + (n/2 - k)·h) / hⁿ`. When no step is set, `h` is
/// chosen as `ε^(1/(n+2))·max(|x|, 1)`, which balances truncation against
/// round-off for each order.
///
/// Accuracy degrades quickly with order; beyond the fourth derivative prefer
/// [`Analytic`].
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference<F> {
    f: F,
    step: Option<f64>,
}

impl<F: Fn(f64) -> f64> CentralDifference<F> {
    /// Creates an evaluator with an automatically chosen step.
    pub fn new(f: F) -> Self {
        Self { f, step: None }
    }

    /// Uses a fixed difference step for every order.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    fn step_for(&self, order: usize, x: f64) -> f64 {
        self.step.unwrap_or_else(|| {
            #[allow(clippy::cast_precision_loss)]
            let exponent = 1.0 / (order as f64 + 2.0);
            f64::EPSILON.powf(exponent) * x.abs().max(1.0)
        })
    }
}

impl<F: Fn(f64) -> f64> Evaluator for CentralDifference<F> {
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    #[allow(clippy::cast_precision_loss)]
    fn derivative(&self, order: usize, x: f64) -> Result<f64, EvalError> {
        if order == 0 {
            return Ok(self.value(x));
        }

        let h = self.step_for(order, x);
        let half = order as f64 / 2.0;

        let mut binomial = 1.0;
        let mut sum = 0.0;
        for k in 0..=order {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            sum += sign * binomial * (self.f)(x + (half - k as f64) * h);
            binomial *= (order - k) as f64 / (k as f64 + 1.0);
        }

        let order = i32::try_from(order).map_err(|_| EvalError::DerivativeUnavailable { order })?;
        Ok(sum / h.powi(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn analytic_reports_known_orders() {
        let square = Analytic::new(
            |x: f64| x * x,
            |order, x| match order {
                1 => Some(2.0 * x),
                2 => Some(2.0),
                _ => None,
            },
        );

        assert_relative_eq!(square.value(3.0), 9.0);
        assert_eq!(square.derivative(0, 3.0), Ok(9.0));
        assert_eq!(square.derivative(1, 3.0), Ok(6.0));
        assert_eq!(
            square.derivative(3, 3.0),
            Err(EvalError::DerivativeUnavailable { order: 3 })
        );
    }

    #[test]
    fn central_difference_matches_sine_derivatives() {
        let sine = CentralDifference::new(f64::sin);
        let x = 0.7_f64;

        assert_relative_eq!(sine.derivative(1, x).unwrap(), x.cos(), epsilon = 1e-8);
        assert_relative_eq!(sine.derivative(2, x).unwrap(), -x.sin(), epsilon = 1e-5);
    }

    #[test]
    fn central_difference_is_exact_for_low_degree_polynomials() {
        let cubic = CentralDifference::new(|x: f64| x.powi(3)).with_step(0.1);

        assert_relative_eq!(cubic.derivative(3, 1.5).unwrap(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn references_are_evaluators() {
        fn second<E: Evaluator>(e: E) -> f64 {
            e.derivative(2, 0.0).unwrap()
        }

        let exp = Analytic::new(f64::exp, |_, x| Some(x.exp()));
        assert_relative_eq!(second(&exp), 1.0);
    }
}
