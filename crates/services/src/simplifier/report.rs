use std::fmt;

use serde::Serialize;

use fraction_core::{DivisionStep, Fraction, GcdTrace};

/// A complete worked simplification, for non-interactive output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceReport {
    pub fraction: Fraction,
    pub steps: Vec<DivisionStep>,
    pub gcd: u32,
    pub simplified: Fraction,
}

impl TraceReport {
    #[must_use]
    pub fn new(fraction: Fraction) -> Self {
        let trace = GcdTrace::of_fraction(&fraction);
        Self {
            fraction,
            steps: trace.steps().to_vec(),
            gcd: trace.gcd(),
            simplified: fraction.reduced_by(trace.gcd()),
        }
    }

    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TraceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fraction: {}", self.fraction)?;
        for step in &self.steps {
            writeln!(f, "  {step}")?;
        }
        writeln!(f, "GCD: {}", self.gcd)?;
        write!(f, "Simplified: {}", self.simplified)
    }
}
