//! A learner's pass through one fraction: the stage sequence with the GCD
//! quiz nested inside its second stage.

use crate::gcd::GcdTrace;
use crate::model::{DivisionStep, Fraction, Stage};
use crate::quiz::{QuizAnswer, QuizEvent, QuizFeedback, QuizState};

/// What a call to [`advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given stage.
    Moved(Stage),
    /// Revealed the remaining divisions; the stage did not change.
    RevealedGcd,
    /// Already at the last stage.
    AtEnd,
}

/// Top-level stage transition.
///
/// Leaving `GcdComputation` is guarded by the quiz: while it is still
/// pending, advancing reveals the remaining divisions instead of moving on.
#[must_use]
pub fn advance(stage: Stage, quiz: QuizState) -> (Stage, QuizState, Advance) {
    if stage == Stage::GcdComputation && !quiz.is_revealed() {
        return (stage, QuizState::Revealed, Advance::RevealedGcd);
    }
    match stage.next() {
        Some(next) => (next, quiz, Advance::Moved(next)),
        None => (stage, quiz, Advance::AtEnd),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    fraction: Fraction,
    trace: GcdTrace,
    simplified: Fraction,
    stage: Stage,
    quiz: QuizState,
}

impl Walkthrough {
    /// Traces `fraction` and starts at [`Stage::Intro`].
    #[must_use]
    pub fn new(fraction: Fraction) -> Self {
        let trace = GcdTrace::of_fraction(&fraction);
        let simplified = fraction.reduced_by(trace.gcd());
        let quiz = QuizState::initial(trace.steps());
        Self {
            fraction,
            trace,
            simplified,
            stage: Stage::Intro,
            quiz,
        }
    }

    #[must_use]
    pub fn fraction(&self) -> Fraction {
        self.fraction
    }

    #[must_use]
    pub fn trace(&self) -> &GcdTrace {
        &self.trace
    }

    #[must_use]
    pub fn gcd(&self) -> u32 {
        self.trace.gcd()
    }

    #[must_use]
    pub fn simplified(&self) -> Fraction {
        self.simplified
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn quiz(&self) -> QuizState {
        self.quiz
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Index of the last confirmed division, `None` before the first.
    #[must_use]
    pub fn confirmed_index(&self) -> Option<usize> {
        self.quiz.confirmed_index(self.trace.steps())
    }

    /// Divisions the learner can currently see.
    #[must_use]
    pub fn shown_steps(&self) -> &[DivisionStep] {
        &self.trace.steps()[..self.quiz.shown(self.trace.steps())]
    }

    /// The division waiting for an answer, if the quiz is on screen.
    #[must_use]
    pub fn pending_step(&self) -> Option<&DivisionStep> {
        if self.stage < Stage::GcdComputation {
            return None;
        }
        self.quiz.pending(self.trace.steps())
    }

    pub fn advance(&mut self) -> Advance {
        let (stage, quiz, outcome) = advance(self.stage, self.quiz);
        self.stage = stage;
        self.quiz = quiz;
        outcome
    }

    /// Checks an answer for the pending division.
    pub fn answer(&mut self, answer: QuizAnswer) -> QuizFeedback {
        self.apply(QuizEvent::Answer(answer))
    }

    /// Confirms the pending division without checking. Returns whether a
    /// division was pending.
    pub fn skip(&mut self) -> bool {
        self.apply(QuizEvent::Skip).accepted
    }

    fn apply(&mut self, event: QuizEvent) -> QuizFeedback {
        if self.stage < Stage::GcdComputation {
            return QuizFeedback::ignored();
        }
        let transition = self.quiz.next(event, self.trace.steps());
        self.quiz = transition.state;
        transition.feedback
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
