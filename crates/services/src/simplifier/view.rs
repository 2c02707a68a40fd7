use fraction_core::{DivisionStep, Fraction, Stage, Walkthrough};

pub const COMPLETION_TITLE: &str = "Simplification Complete!";
pub const COMPLETION_MESSAGE: &str =
    "You've successfully simplified the fraction to its lowest terms!";

/// Text for one explanation stage.
///
/// `detail` is the second line, when the stage has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCard {
    pub stage: Stage,
    pub title: String,
    pub detail: Option<String>,
}

impl StageCard {
    #[must_use]
    pub fn describe(stage: Stage, walkthrough: &Walkthrough) -> Self {
        let fraction = walkthrough.fraction();
        let (title, detail) = match stage {
            Stage::Intro => (format!("Step 1: Start with the fraction {fraction}"), None),
            Stage::GcdComputation => (
                "Step 2: Find the Greatest Common Divisor (GCD)".to_string(),
                Some("using the division method:".to_string()),
            ),
            Stage::Division => (
                format!(
                    "Step 3: Divide both the numerator and denominator by the GCD ({})",
                    walkthrough.gcd()
                ),
                None,
            ),
            Stage::Result => (
                "Step 4: Write the simplified fraction:".to_string(),
                Some(walkthrough.simplified().to_string()),
            ),
        };
        Self {
            stage,
            title,
            detail,
        }
    }
}

/// The division awaiting an answer. Quotient and remainder are withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDivision {
    pub dividend: u32,
    pub divisor: u32,
}

/// Everything the presentation layer needs to draw the current walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageView {
    pub stage: Stage,
    pub fraction: Fraction,
    pub gcd: u32,
    pub simplified: Fraction,
    /// Cards for every stage reached so far, oldest first.
    pub cards: Vec<StageCard>,
    /// Divisions confirmed or revealed so far.
    pub shown_steps: Vec<DivisionStep>,
    pub pending: Option<PendingDivision>,
    pub is_complete: bool,
}

impl StageView {
    #[must_use]
    pub fn from_walkthrough(walkthrough: &Walkthrough) -> Self {
        let stage = walkthrough.stage();
        let cards = stage
            .visible()
            .iter()
            .map(|&visible| StageCard::describe(visible, walkthrough))
            .collect();
        let shown_steps = if stage >= Stage::GcdComputation {
            walkthrough.shown_steps().to_vec()
        } else {
            Vec::new()
        };
        let pending = walkthrough.pending_step().map(|step| PendingDivision {
            dividend: step.dividend,
            divisor: step.divisor,
        });

        Self {
            stage,
            fraction: walkthrough.fraction(),
            gcd: walkthrough.gcd(),
            simplified: walkthrough.simplified(),
            cards,
            shown_steps,
            pending,
            is_complete: walkthrough.is_complete(),
        }
    }

    /// Whether a `Next Step` control should be offered.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_complete
    }
}
