mod division;
mod fraction;
mod stage;

pub use division::DivisionStep;
pub use fraction::{Fraction, FractionField, MAX_TERM, MIN_TERM, ValidationError, validate};
pub use stage::Stage;
