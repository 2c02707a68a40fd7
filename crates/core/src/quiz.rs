//! The per-division quiz shown while the learner works out the GCD.
//!
//! Each pending division asks for its quotient and remainder. A correct answer
//! or a skip confirms it; confirming the last division reveals the whole trace.

use crate::model::DivisionStep;

//
// ─── ANSWERS AND FEEDBACK ──────────────────────────────────────────────────────
//

/// A learner's answer for the pending division. `None` means left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizAnswer {
    pub quotient: Option<u32>,
    pub remainder: Option<u32>,
}

impl QuizAnswer {
    #[must_use]
    pub fn new(quotient: u32, remainder: u32) -> Self {
        Self {
            quotient: Some(quotient),
            remainder: Some(remainder),
        }
    }

    /// Reads an answer from the raw quiz fields.
    ///
    /// Blank or non-numeric text becomes `None`, which never matches.
    #[must_use]
    pub fn parse(quotient: &str, remainder: &str) -> Self {
        Self {
            quotient: quotient.trim().parse().ok(),
            remainder: remainder.trim().parse().ok(),
        }
    }

    /// Flags each field that does not match `step`.
    #[must_use]
    pub fn check(&self, step: &DivisionStep) -> FieldErrors {
        FieldErrors {
            quotient: self.quotient != Some(step.quotient),
            remainder: self.remainder != Some(step.remainder),
        }
    }
}

/// Per-field mismatch flags, used for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub quotient: bool,
    pub remainder: bool,
}

impl FieldErrors {
    #[must_use]
    pub fn any(&self) -> bool {
        self.quotient || self.remainder
    }
}

/// Outcome of a quiz event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizFeedback {
    /// The pending division was confirmed.
    pub accepted: bool,
    pub errors: FieldErrors,
}

impl QuizFeedback {
    fn accepted() -> Self {
        Self {
            accepted: true,
            errors: FieldErrors::default(),
        }
    }

    fn rejected(errors: FieldErrors) -> Self {
        Self {
            accepted: false,
            errors,
        }
    }

    /// The event did not apply; nothing to highlight.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }
}

//
// ─── STATE MACHINE ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Answer(QuizAnswer),
    Skip,
    RevealAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Divisions before `next` are confirmed; `next` awaits an answer.
    Pending { next: usize },
    /// Every division is shown and no more input is needed.
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizTransition {
    pub state: QuizState,
    pub feedback: QuizFeedback,
}

impl QuizState {
    /// Starting state for a trace; an empty trace has nothing to ask.
    #[must_use]
    pub fn initial(steps: &[DivisionStep]) -> Self {
        if steps.is_empty() {
            QuizState::Revealed
        } else {
            QuizState::Pending { next: 0 }
        }
    }

    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, QuizState::Revealed)
    }

    /// Index of the last confirmed division, `None` before the first.
    ///
    /// Once revealed every division counts as confirmed.
    #[must_use]
    pub fn confirmed_index(self, steps: &[DivisionStep]) -> Option<usize> {
        match self {
            QuizState::Pending { next } => next.checked_sub(1),
            QuizState::Revealed => steps.len().checked_sub(1),
        }
    }

    /// Number of divisions currently shown to the learner.
    #[must_use]
    pub fn shown(self, steps: &[DivisionStep]) -> usize {
        match self {
            QuizState::Pending { next } => next.min(steps.len()),
            QuizState::Revealed => steps.len(),
        }
    }

    /// The division awaiting an answer.
    #[must_use]
    pub fn pending(self, steps: &[DivisionStep]) -> Option<&DivisionStep> {
        match self {
            QuizState::Pending { next } => steps.get(next),
            QuizState::Revealed => None,
        }
    }

    /// Applies `event` against `steps`.
    #[must_use]
    pub fn next(self, event: QuizEvent, steps: &[DivisionStep]) -> QuizTransition {
        let QuizState::Pending { next } = self else {
            return QuizTransition {
                state: self,
                feedback: QuizFeedback::ignored(),
            };
        };
        let Some(step) = steps.get(next) else {
            return QuizTransition {
                state: QuizState::Revealed,
                feedback: QuizFeedback::ignored(),
            };
        };

        match event {
            QuizEvent::RevealAll => QuizTransition {
                state: QuizState::Revealed,
                feedback: QuizFeedback::ignored(),
            },
            QuizEvent::Skip => QuizTransition {
                state: confirm(next, steps.len()),
                feedback: QuizFeedback::accepted(),
            },
            QuizEvent::Answer(answer) => {
                let errors = answer.check(step);
                if errors.any() {
                    QuizTransition {
                        state: self,
                        feedback: QuizFeedback::rejected(errors),
                    }
                } else {
                    QuizTransition {
                        state: confirm(next, steps.len()),
                        feedback: QuizFeedback::accepted(),
                    }
                }
            }
        }
    }
}

fn confirm(index: usize, len: usize) -> QuizState {
    if index + 1 >= len {
        QuizState::Revealed
    } else {
        QuizState::Pending { next: index + 1 }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcd::trace;

    #[test]
    fn correct_answer_confirms_exactly_one_step() {
        let trace = trace(48, 18);
        let steps = trace.steps();
        let state = QuizState::initial(steps);
        assert_eq!(state.confirmed_index(steps), None);

        let t = state.next(QuizEvent::Answer(QuizAnswer::new(2, 12)), steps);
        assert!(t.feedback.accepted);
        assert_eq!(t.state, QuizState::Pending { next: 1 });
        assert_eq!(t.state.confirmed_index(steps), Some(0));
    }

    #[test]
    fn wrong_answer_flags_only_mismatched_fields() {
        let trace = trace(48, 18);
        let steps = trace.steps();
        let state = QuizState::initial(steps);

        let t = state.next(QuizEvent::Answer(QuizAnswer::new(2, 11)), steps);
        assert_eq!(t.state, state);
        assert!(!t.feedback.accepted);
        assert_eq!(
            t.feedback.errors,
            FieldErrors {
                quotient: false,
                remainder: true,
            }
        );

        let t = state.next(QuizEvent::Answer(QuizAnswer::new(3, 11)), steps);
        assert!(t.feedback.errors.quotient && t.feedback.errors.remainder);
    }

    #[test]
    fn blank_fields_count_as_mismatch() {
        let trace = trace(48, 18);
        let steps = trace.steps();
        let answer = QuizAnswer::parse("", "12");
        assert_eq!(answer.quotient, None);

        let t = QuizState::initial(steps).next(QuizEvent::Answer(answer), steps);
        assert!(!t.feedback.accepted);
        assert!(t.feedback.errors.quotient);
        assert!(!t.feedback.errors.remainder);
    }

    #[test]
    fn skip_always_confirms() {
        let trace = trace(48, 18);
        let steps = trace.steps();
        let t = QuizState::initial(steps).next(QuizEvent::Skip, steps);
        assert!(t.feedback.accepted);
        assert_eq!(t.state.confirmed_index(steps), Some(0));
    }

    #[test]
    fn confirming_last_step_reveals() {
        let trace = trace(100, 75);
        let steps = trace.steps();
        let t = QuizState::initial(steps).next(QuizEvent::Answer(QuizAnswer::new(1, 25)), steps);
        assert_eq!(t.state, QuizState::Pending { next: 1 });

        let t = t.state.next(QuizEvent::Skip, steps);
        assert_eq!(t.state, QuizState::Revealed);
        assert_eq!(t.state.shown(steps), 2);
        assert_eq!(t.state.pending(steps), None);
    }

    #[test]
    fn single_step_trace_reveals_on_first_answer() {
        let trace = trace(12, 4);
        let steps = trace.steps();
        let t = QuizState::initial(steps).next(QuizEvent::Answer(QuizAnswer::new(3, 0)), steps);
        assert!(t.state.is_revealed());
    }

    #[test]
    fn reveal_all_short_circuits() {
        let trace = trace(48, 18);
        let steps = trace.steps();
        let t = QuizState::initial(steps).next(QuizEvent::RevealAll, steps);
        assert!(t.state.is_revealed());
        assert_eq!(t.state.confirmed_index(steps), Some(2));
    }

    #[test]
    fn revealed_state_ignores_input() {
        let trace = trace(48, 18);
        let steps = trace.steps();
        let t = QuizState::Revealed.next(QuizEvent::Answer(QuizAnswer::new(9, 9)), steps);
        assert_eq!(t.state, QuizState::Revealed);
        assert_eq!(t.feedback, QuizFeedback::ignored());
    }

    #[test]
    fn empty_trace_starts_revealed() {
        assert_eq!(QuizState::initial(&[]), QuizState::Revealed);
    }
}
