mod basics;
mod simplifier;

pub use basics::BasicsView;
pub use simplifier::SimplifierView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
