use serde::{Deserialize, Serialize};

/// The four explanation stages, in the order a learner sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    /// Restate the fraction.
    #[default]
    Intro,
    /// Work out the GCD one division at a time.
    GcdComputation,
    /// Divide both terms by the GCD.
    Division,
    /// Show the simplified fraction.
    Result,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Intro,
        Stage::GcdComputation,
        Stage::Division,
        Stage::Result,
    ];

    /// Zero-based position of the stage.
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Stage::Intro => 0,
            Stage::GcdComputation => 1,
            Stage::Division => 2,
            Stage::Result => 3,
        }
    }

    /// The following stage, or `None` at the end.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Stage::Intro => Some(Stage::GcdComputation),
            Stage::GcdComputation => Some(Stage::Division),
            Stage::Division => Some(Stage::Result),
            Stage::Result => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Stages shown when `self` is current, oldest first.
    #[must_use]
    pub fn visible(self) -> &'static [Stage] {
        &Self::ALL[..=self.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered_by_ordinal() {
        for (index, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.ordinal(), index);
        }
        assert!(Stage::Intro < Stage::Result);
    }

    #[test]
    fn only_result_is_terminal() {
        assert_eq!(Stage::Division.next(), Some(Stage::Result));
        assert!(Stage::Result.is_terminal());
        assert!(!Stage::GcdComputation.is_terminal());
    }

    #[test]
    fn visible_includes_every_earlier_stage() {
        assert_eq!(Stage::Intro.visible(), &[Stage::Intro]);
        assert_eq!(Stage::Division.visible().len(), 3);
    }
}
