//! Definite integrals on a fixed step.
//!
//! [`Rule::integrate`] applies the composite trapezoid or Simpson rule.
//! [`Rule::estimate`] integrates at `h` and `2h` and uses Richardson's
//! formula to estimate the error of the fine result. [`newton_leibniz`]
//! gives the exact value when an antiderivative is known.

mod error;
mod rule;

pub use error::Error;
pub use rule::{Estimate, Rule};

use numlab_core::MAX_NODES;

/// Slack allowed when deciding whether `width / step` is a whole number.
const COUNT_SLACK: f64 = 1e-9;

/// Adjusts `step` so the interval count is a positive multiple of four.
///
/// The count `⌊(to − from) / step⌋` is rounded down to a multiple of four
/// and the step is recomputed from it, so both `h` and `2h` grids keep an
/// even interval count. A step that already divides the interval into a
/// multiple of four comes back unchanged.
///
/// # Errors
///
/// Returns an error if a bound is not finite, the interval has zero width,
/// the step is not positive or too small, or the step exceeds a quarter of
/// the interval.
pub fn correct_step(from: f64, to: f64, step: f64) -> Result<f64, Error> {
    let width = checked_width(from, to)?;
    check_step(step, width)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (width / step + COUNT_SLACK).floor() as usize;
    let count = count - count % 4;
    if count == 0 {
        return Err(Error::StepTooLarge { step, width });
    }

    #[allow(clippy::cast_precision_loss)]
    Ok(width / count as f64)
}

/// Evaluates `F(to) − F(from)` for an antiderivative `F`.
pub fn newton_leibniz(antiderivative: impl Fn(f64) -> f64, from: f64, to: f64) -> f64 {
    antiderivative(to) - antiderivative(from)
}

/// Returns `|to − from|`, rejecting non-finite bounds and zero width.
fn checked_width(from: f64, to: f64) -> Result<f64, Error> {
    for value in [from, to] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBound { value });
        }
    }

    #[allow(clippy::float_cmp)]
    if from == to {
        return Err(Error::ZeroWidth { value: from });
    }

    Ok((to - from).abs())
}

/// Rejects steps that are not positive, or so small that covering `width`
/// would take more than [`MAX_NODES`] nodes.
fn check_step(step: f64, width: f64) -> Result<(), Error> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStep { step });
    }
    #[allow(clippy::cast_precision_loss)]
    if width / step >= MAX_NODES as f64 {
        return Err(Error::StepTooSmall { step, width });
    }
    Ok(())
}

/// Nodes `from + i·step` strictly below `to`, followed by `to` itself.
///
/// Expects `from < to` and a positive step.
fn nodes(from: f64, to: f64, step: f64) -> Vec<f64> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let intervals = ((to - from) / step - COUNT_SLACK).ceil().max(1.0) as usize;

    #[allow(clippy::cast_precision_loss)]
    let mut nodes: Vec<f64> = (0..intervals).map(|i| from + i as f64 * step).collect();
    nodes.push(to);
    nodes
}
