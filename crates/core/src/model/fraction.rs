use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted numerator or denominator.
pub const MIN_TERM: u32 = 1;

/// Largest accepted numerator or denominator.
pub const MAX_TERM: u32 = 100;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Which half of a fraction an input problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FractionField {
    Numerator,
    Denominator,
}

impl fmt::Display for FractionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionField::Numerator => f.write_str("numerator"),
            FractionField::Denominator => f.write_str("denominator"),
        }
    }
}

/// Rejected numerator/denominator input.
///
/// Always recoverable: the learner fixes the input and submits again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("{field} is not a whole number: {raw:?}")]
    NotAnInteger { field: FractionField, raw: String },

    #[error("{field} must be between 1 and 100, got {value}")]
    OutOfRange { field: FractionField, value: i64 },

    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

impl ValidationError {
    /// Message shown to the learner for any rejected input.
    pub const WARNING: &'static str = "Please enter valid positive integers for both numerator and denominator between 1 and 100. Denominator cannot be zero.";

    #[must_use]
    pub fn message(&self) -> &'static str {
        Self::WARNING
    }
}

//
// ─── FRACTION ──────────────────────────────────────────────────────────────────
//

/// A fraction whose terms both lie in `MIN_TERM..=MAX_TERM`.
///
/// Only constructible through validation, so holding a `Fraction` means the
/// input was accepted. Serialize-only for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// `1/1`, already in lowest terms.
    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Validates a numeric numerator/denominator pair.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroDenominator` for a zero denominator and
    /// `ValidationError::OutOfRange` for any term outside `1..=100`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, ValidationError> {
        if denominator == 0 {
            return Err(ValidationError::ZeroDenominator);
        }
        let numerator = check_term(FractionField::Numerator, numerator)?;
        let denominator = check_term(FractionField::Denominator, denominator)?;
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Validates raw text as typed into the numerator/denominator fields.
    ///
    /// Surrounding whitespace is ignored. Decimals, blanks and anything else
    /// that is not a whole number are rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotAnInteger` for unparseable text, otherwise
    /// the same errors as [`Fraction::new`].
    pub fn parse(numerator: &str, denominator: &str) -> Result<Self, ValidationError> {
        let numerator = parse_term(FractionField::Numerator, numerator)?;
        let denominator = parse_term(FractionField::Denominator, denominator)?;
        Self::new(numerator, denominator)
    }

    #[must_use]
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Divides both terms by `divisor`.
    ///
    /// `divisor` must divide both terms; the GCD from [`crate::gcd::trace`]
    /// always does.
    #[must_use]
    pub fn reduced_by(&self, divisor: u32) -> Self {
        debug_assert!(divisor > 0, "divisor must be positive");
        debug_assert!(
            self.numerator % divisor == 0 && self.denominator % divisor == 0,
            "divisor must divide both terms",
        );
        Self {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Returns true when the pair would be accepted by [`Fraction::new`].
#[must_use]
pub fn validate(numerator: i64, denominator: i64) -> bool {
    Fraction::new(numerator, denominator).is_ok()
}

fn parse_term(field: FractionField, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            raw: raw.to_string(),
        })
}

fn check_term(field: FractionField, value: i64) -> Result<u32, ValidationError> {
    let in_range = i64::from(MIN_TERM)..=i64::from(MAX_TERM);
    if !in_range.contains(&value) {
        return Err(ValidationError::OutOfRange { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { field, value })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
