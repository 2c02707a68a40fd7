//! GCD by the division method, keeping every division so it can be taught.

use serde::Serialize;

use crate::model::{DivisionStep, Fraction};

/// The divisions performed while computing a GCD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GcdTrace {
    gcd: u32,
    steps: Vec<DivisionStep>,
}

impl GcdTrace {
    #[must_use]
    pub fn gcd(&self) -> u32 {
        self.gcd
    }

    /// Divisions in the order they were performed.
    ///
    /// Only the last step has a zero remainder, and its divisor is the GCD.
    #[must_use]
    pub fn steps(&self) -> &[DivisionStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn step(&self, index: usize) -> Option<&DivisionStep> {
        self.steps.get(index)
    }

    /// Traces the GCD of a fraction's numerator and denominator.
    #[must_use]
    pub fn of_fraction(fraction: &Fraction) -> Self {
        trace(fraction.numerator(), fraction.denominator())
    }
}

/// Runs the Euclidean algorithm on `a` and `b`, recording each division.
///
/// `trace(a, 0)` performs no division and reports `a` as the GCD.
#[must_use]
pub fn trace(a: u32, b: u32) -> GcdTrace {
    let mut steps = Vec::new();
    let (mut x, mut y) = (a, b);
    while y != 0 {
        let step = DivisionStep::divide(x, y);
        steps.push(step);
        (x, y) = (y, step.remainder);
    }
    GcdTrace { gcd: x, steps }
}
