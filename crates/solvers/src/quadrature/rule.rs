use super::{Error, check_step, checked_width, correct_step, nodes};

/// A composite Newton–Cotes rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Second-order trapezoid rule.
    Trapezoid,
    /// Fourth-order Simpson rule; needs an even interval count.
    Simpson,
}

/// Results at two step sizes and the Richardson error estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Integral at the corrected step `h`.
    pub fine: f64,
    /// Integral at the corrected step `2h`.
    pub coarse: f64,
    /// `|fine − coarse| / C`, with `C` from [`Rule::richardson_divisor`].
    pub error: f64,
    /// The corrected `h` and `2h` actually used.
    pub steps: [f64; 2],
}

impl Rule {
    /// Returns the divisor `C` of the Richardson estimate `|I_h − I_2h| / C`.
    #[must_use]
    pub fn richardson_divisor(self) -> f64 {
        match self {
            Rule::Trapezoid => 3.0,
            Rule::Simpson => 15.0,
        }
    }

    /// Integrates `f` from `from` to `to` with nodes spaced by `step`.
    ///
    /// Nodes run `from + i·step` while below `to`, with `to` appended as the
    /// last node. Simpson's rule spreads the same number of intervals evenly
    /// over the range. Swapped bounds negate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, the interval has zero
    /// width, the step is not positive or too small, `f` is not finite at a
    /// node, or Simpson's rule sees an odd interval count.
    pub fn integrate(self, f: impl Fn(f64) -> f64, from: f64, to: f64, step: f64) -> Result<f64, Error> {
        let width = checked_width(from, to)?;
        check_step(step, width)?;

        let (lo, hi, sign) = if from < to {
            (from, to, 1.0)
        } else {
            (to, from, -1.0)
        };

        let x = nodes(lo, hi, step);
        let value = |x: f64| {
            let y = f(x);
            if y.is_finite() {
                Ok(y)
            } else {
                Err(Error::NonFiniteValue { x })
            }
        };

        let integral = match self {
            Rule::Trapezoid => {
                let mut sum = 0.0;
                let mut left = value(x[0])?;
                for pair in x.windows(2) {
                    let right = value(pair[1])?;
                    sum += (left + right) * (pair[1] - pair[0]) / 2.0;
                    left = right;
                }
                sum
            }
            Rule::Simpson => {
                let n = x.len() - 1;
                if n % 2 != 0 {
                    return Err(Error::OddIntervals { intervals: n });
                }

                #[allow(clippy::cast_precision_loss)]
                let h = (hi - lo) / n as f64;
                let mut even = 0.0;
                let mut odd = 0.0;
                for j in 1..n {
                    #[allow(clippy::cast_precision_loss)]
                    let y = value(lo + j as f64 * h)?;
                    if j % 2 == 0 {
                        even += y;
                    } else {
                        odd += y;
                    }
                }
                (h / 3.0) * (value(lo)? + 2.0 * even + 4.0 * odd + value(hi)?)
            }
        };

        Ok(sign * integral)
    }

    /// Integrates at the corrected `h` and `2h` and estimates the error of
    /// the fine result.
    ///
    /// Both steps pass through [`correct_step`], so each grid has a multiple
    /// of four intervals.
    ///
    /// # Errors
    ///
    /// Returns an error if either step cannot be corrected or either
    /// integration fails.
    pub fn estimate(self, f: impl Fn(f64) -> f64, from: f64, to: f64, step: f64) -> Result<Estimate, Error> {
        let fine_step = correct_step(from, to, step)?;
        let coarse_step = correct_step(from, to, 2.0 * step)?;

        let fine = self.integrate(&f, from, to, fine_step)?;
        let coarse = self.integrate(&f, from, to, coarse_step)?;

        Ok(Estimate {
            fine,
            coarse,
            error: (fine - coarse).abs() / self.richardson_divisor(),
            steps: [fine_step, coarse_step],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::quadrature::newton_leibniz;

    fn sqrt_log(x: f64) -> f64 {
        x.sqrt() * x.ln()
    }

    fn sqrt_log_antiderivative(x: f64) -> f64 {
        2.0 * x.powf(1.5) * (3.0 * x.ln() - 2.0) / 9.0
    }

    #[test]
    fn simpson_is_exact_for_cubics() {
        let integral = Rule::Simpson
            .integrate(|x| x.powi(3), 0.0, 2.0, 0.5)
            .expect("should integrate");

        assert_relative_eq!(integral, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn trapezoid_error_on_a_parabola() {
        let integral = Rule::Trapezoid
            .integrate(|x| x * x, 0.0, 1.0, 0.25)
            .expect("should integrate");

        // Exact 1/3 plus the h²/6 trapezoid error.
        assert_relative_eq!(integral, 0.34375, epsilon = 1e-12);
    }

    #[test]
    fn swapped_bounds_negate_the_integral() {
        let forward = Rule::Trapezoid.integrate(|x| x * x, 0.0, 1.0, 0.25).expect("should integrate");
        let backward = Rule::Trapezoid.integrate(|x| x * x, 1.0, 0.0, 0.25).expect("should integrate");

        assert_relative_eq!(backward, -forward);
    }

    #[test]
    fn simpson_rejects_odd_interval_counts() {
        let result = Rule::Simpson.integrate(|x| x, 0.0, 3.0, 1.0);

        assert!(matches!(result, Err(Error::OddIntervals { intervals: 3 })));
    }

    #[test]
    fn non_finite_integrand_is_an_error() {
        let result = Rule::Trapezoid.integrate(f64::ln, 0.0, 1.0, 0.25);

        assert!(matches!(result, Err(Error::NonFiniteValue { .. })));
    }

    #[test]
    fn richardson_estimate_bounds_the_actual_error() {
        let exact = newton_leibniz(sqrt_log_antiderivative, 1.0, 3.0);

        for rule in [Rule::Trapezoid, Rule::Simpson] {
            let estimate = rule.estimate(sqrt_log, 1.0, 3.0, 0.1).expect("should estimate");

            assert_relative_eq!(estimate.steps[0], 0.1);
            assert_relative_eq!(estimate.steps[1], 0.25);
            assert!((estimate.fine - exact).abs() <= estimate.error);
        }

        let trapezoid = Rule::Trapezoid.estimate(sqrt_log, 1.0, 3.0, 0.1).expect("should estimate");
        assert!(trapezoid.error < 5.0 * (trapezoid.fine - exact).abs());
    }
}
