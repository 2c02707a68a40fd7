mod simplifier_vm;

pub use simplifier_vm::{SimplifierIntent, SimplifierVm};
