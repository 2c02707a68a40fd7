#![forbid(unsafe_code)]

pub mod error;
pub mod simplifier;

pub use fraction_core::{FieldErrors, Fraction, QuizAnswer, QuizFeedback, Stage};

pub use error::SessionError;
pub use simplifier::{
    COMPLETION_MESSAGE, COMPLETION_TITLE, FractionPicker, PendingDivision, SimplifierService,
    StageCard, StageView, Submission, TraceReport,
};
