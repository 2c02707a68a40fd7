use fraction_core::{
    Advance, Fraction, GcdTrace, QuizAnswer, QuizFeedback, ValidationError, Walkthrough,
};
use tracing::{debug, info, warn};

use crate::error::SessionError;
use super::random::FractionPicker;
use super::view::StageView;

/// A fraction accepted by `submit_fraction`, with its worked GCD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub fraction: Fraction,
    pub trace: GcdTrace,
    pub simplified: Fraction,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// In-memory simplification session.
///
/// Holds at most one walkthrough. Each accepted submission replaces it;
/// each rejected submission clears it and leaves a warning for the learner.
#[derive(Debug, Clone)]
pub struct SimplifierService {
    walkthrough: Option<Walkthrough>,
    warning: Option<&'static str>,
    picker: FractionPicker,
}

impl SimplifierService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_picker(FractionPicker::from_entropy())
    }

    /// Session whose random fractions follow a fixed sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_picker(FractionPicker::seeded(seed))
    }

    #[must_use]
    pub fn with_picker(picker: FractionPicker) -> Self {
        Self {
            walkthrough: None,
            warning: None,
            picker,
        }
    }

    #[must_use]
    pub fn walkthrough(&self) -> Option<&Walkthrough> {
        self.walkthrough.as_ref()
    }

    /// Warning left by the last rejected submission.
    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        self.warning
    }

    /// Snapshot of the current walkthrough, if any.
    #[must_use]
    pub fn view(&self) -> Option<StageView> {
        self.walkthrough.as_ref().map(StageView::from_walkthrough)
    }

    /// Validate raw field text and start a new walkthrough.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Validation` when the input is rejected. The
    /// previous walkthrough is discarded either way.
    pub fn submit_fraction(
        &mut self,
        numerator: &str,
        denominator: &str,
    ) -> Result<Submission, SessionError> {
        self.start(Fraction::parse(numerator, denominator))
    }

    /// Same as [`Self::submit_fraction`] for numeric input.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Validation` when the input is rejected.
    pub fn submit_terms(
        &mut self,
        numerator: i64,
        denominator: i64,
    ) -> Result<Submission, SessionError> {
        self.start(Fraction::new(numerator, denominator))
    }

    fn start(
        &mut self,
        parsed: Result<Fraction, ValidationError>,
    ) -> Result<Submission, SessionError> {
        let fraction = match parsed {
            Ok(fraction) => fraction,
            Err(err) => {
                warn!(error = %err, "fraction rejected");
                self.walkthrough = None;
                self.warning = Some(err.message());
                return Err(err.into());
            }
        };

        let walkthrough = Walkthrough::new(fraction);
        info!(
            fraction = %fraction,
            gcd = walkthrough.gcd(),
            divisions = walkthrough.trace().len(),
            "walkthrough started"
        );
        let submission = Submission {
            fraction,
            trace: walkthrough.trace().clone(),
            simplified: walkthrough.simplified(),
        };
        self.warning = None;
        self.walkthrough = Some(walkthrough);
        Ok(submission)
    }

    /// Move the walkthrough on by one step.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoFraction` before a fraction is accepted.
    pub fn advance_stage(&mut self) -> Result<StageView, SessionError> {
        let walkthrough = self.walkthrough.as_mut().ok_or(SessionError::NoFraction)?;
        let outcome = walkthrough.advance();
        match outcome {
            Advance::Moved(stage) => debug!(?stage, "stage advanced"),
            Advance::RevealedGcd => debug!("remaining divisions revealed"),
            Advance::AtEnd => debug!("advance ignored at final stage"),
        }
        Ok(StageView::from_walkthrough(walkthrough))
    }

    /// Check an answer for the pending division.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoFraction` before a fraction is accepted.
    pub fn submit_quiz_answer(&mut self, answer: QuizAnswer) -> Result<QuizFeedback, SessionError> {
        let walkthrough = self.walkthrough.as_mut().ok_or(SessionError::NoFraction)?;
        let feedback = walkthrough.answer(answer);
        debug!(
            accepted = feedback.accepted,
            quotient_wrong = feedback.errors.quotient,
            remainder_wrong = feedback.errors.remainder,
            confirmed = ?walkthrough.confirmed_index(),
            "quiz answer checked"
        );
        Ok(feedback)
    }

    /// Confirm the pending division without checking it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoFraction` before a fraction is accepted.
    pub fn skip_quiz_step(&mut self) -> Result<(), SessionError> {
        let walkthrough = self.walkthrough.as_mut().ok_or(SessionError::NoFraction)?;
        let skipped = walkthrough.skip();
        debug!(skipped, confirmed = ?walkthrough.confirmed_index(), "quiz step skipped");
        Ok(())
    }

    /// Draw a practice fraction and clear any warning.
    ///
    /// The fraction is not submitted; the learner still presses Simplify.
    pub fn request_random_fraction(&mut self) -> Fraction {
        self.warning = None;
        let fraction = self.picker.pick();
        debug!(fraction = %fraction, "random fraction drawn");
        fraction
    }
}

impl Default for SimplifierService {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
