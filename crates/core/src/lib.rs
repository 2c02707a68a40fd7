#![forbid(unsafe_code)]

pub mod gcd;
pub mod model;
pub mod quiz;
pub mod walkthrough;

pub use gcd::{GcdTrace, trace};
pub use model::{DivisionStep, Fraction, FractionField, Stage, ValidationError, validate};
pub use quiz::{FieldErrors, QuizAnswer, QuizEvent, QuizFeedback, QuizState, QuizTransition};
pub use walkthrough::{Advance, Walkthrough};
