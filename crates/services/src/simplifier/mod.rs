mod random;
mod report;
mod service;
mod view;

// Public API of the simplifier subsystem.
pub use crate::error::SessionError;
pub use random::FractionPicker;
pub use report::TraceReport;
pub use service::{SimplifierService, Submission};
pub use view::{COMPLETION_MESSAGE, COMPLETION_TITLE, PendingDivision, StageCard, StageView};
