use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the division method: `dividend ÷ divisor = quotient R remainder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisionStep {
    pub dividend: u32,
    pub divisor: u32,
    pub quotient: u32,
    pub remainder: u32,
}

impl DivisionStep {
    /// Divides `dividend` by a non-zero `divisor`.
    #[must_use]
    pub fn divide(dividend: u32, divisor: u32) -> Self {
        Self {
            dividend,
            divisor,
            quotient: dividend / divisor,
            remainder: dividend % divisor,
        }
    }

    /// `dividend = quotient * divisor + remainder` with `remainder < divisor`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let recomposed = u64::from(self.quotient) * u64::from(self.divisor)
            + u64::from(self.remainder);
        self.remainder < self.divisor && recomposed == u64::from(self.dividend)
    }

    /// True for the last step of a trace.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.remainder == 0
    }
}

impl fmt::Display for DivisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ÷ {} = {} R {}",
            self.dividend, self.divisor, self.quotient, self.remainder
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_records_quotient_and_remainder() {
        let step = DivisionStep::divide(48, 18);
        assert_eq!(step.quotient, 2);
        assert_eq!(step.remainder, 12);
        assert!(step.is_consistent());
        assert!(!step.is_exact());
    }

    #[test]
    fn display_matches_worksheet_notation() {
        assert_eq!(DivisionStep::divide(12, 6).to_string(), "12 ÷ 6 = 2 R 0");
    }

    #[test]
    fn tampered_step_is_inconsistent() {
        let mut step = DivisionStep::divide(18, 12);
        step.remainder = 12;
        assert!(!step.is_consistent());
    }
}
