use fraction_core::{FieldErrors, QuizAnswer};
use services::{SimplifierService, StageView};

/// Everything the learner can do on the simplifier page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimplifierIntent {
    EditNumerator(String),
    EditDenominator(String),
    Random,
    Simplify,
    EditQuotient(String),
    EditRemainder(String),
    Check,
    Skip,
    Next,
}

/// Page state: the session plus the text fields and highlight flags, which
/// only matter while they are on screen.
#[derive(Clone, Debug)]
pub struct SimplifierVm {
    service: SimplifierService,
    numerator: String,
    denominator: String,
    quotient: String,
    remainder: String,
    field_errors: FieldErrors,
}

impl SimplifierVm {
    #[must_use]
    pub fn new(service: SimplifierService) -> Self {
        Self {
            service,
            numerator: String::new(),
            denominator: String::new(),
            quotient: String::new(),
            remainder: String::new(),
            field_errors: FieldErrors::default(),
        }
    }

    #[must_use]
    pub fn numerator(&self) -> &str {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &str {
        &self.denominator
    }

    #[must_use]
    pub fn quotient(&self) -> &str {
        &self.quotient
    }

    #[must_use]
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        self.field_errors
    }

    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        self.service.warning()
    }

    #[must_use]
    pub fn stage_view(&self) -> Option<StageView> {
        self.service.view()
    }

    pub fn dispatch(&mut self, intent: SimplifierIntent) {
        match intent {
            SimplifierIntent::EditNumerator(value) => self.numerator = value,
            SimplifierIntent::EditDenominator(value) => self.denominator = value,
            SimplifierIntent::Random => {
                let fraction = self.service.request_random_fraction();
                self.numerator = fraction.numerator().to_string();
                self.denominator = fraction.denominator().to_string();
            }
            SimplifierIntent::Simplify => {
                self.clear_quiz();
                // A rejection is surfaced through `warning()`.
                let _ = self.service.submit_fraction(&self.numerator, &self.denominator);
            }
            SimplifierIntent::EditQuotient(value) => {
                self.quotient = value;
                self.field_errors.quotient = false;
            }
            SimplifierIntent::EditRemainder(value) => {
                self.remainder = value;
                self.field_errors.remainder = false;
            }
            SimplifierIntent::Check => {
                let answer = QuizAnswer::parse(&self.quotient, &self.remainder);
                match self.service.submit_quiz_answer(answer) {
                    Ok(feedback) if feedback.accepted => self.clear_quiz(),
                    Ok(feedback) => self.field_errors = feedback.errors,
                    Err(err) => tracing::debug!(error = %err, "check ignored"),
                }
            }
            SimplifierIntent::Skip => {
                if let Err(err) = self.service.skip_quiz_step() {
                    tracing::debug!(error = %err, "skip ignored");
                }
                self.clear_quiz();
            }
            SimplifierIntent::Next => {
                self.field_errors = FieldErrors::default();
                if let Err(err) = self.service.advance_stage() {
                    tracing::debug!(error = %err, "next ignored");
                }
            }
        }
    }

    fn clear_quiz(&mut self) {
        self.quotient.clear();
        self.remainder.clear();
        self.field_errors = FieldErrors::default();
    }
}
