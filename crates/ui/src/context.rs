use std::sync::Arc;

use services::SimplifierService;

use crate::vm::{SimplifierIntent, SimplifierVm};

pub trait UiApp: Send + Sync {
    /// Seed for the Random button; `None` draws from the OS.
    fn random_seed(&self) -> Option<u64>;

    /// Raw numerator/denominator text to submit on launch.
    fn initial_fraction(&self) -> Option<(String, String)>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppContext {
    random_seed: Option<u64>,
    initial_fraction: Option<(String, String)>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            random_seed: app.random_seed(),
            initial_fraction: app.initial_fraction(),
        }
    }

    #[must_use]
    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Fresh view-model for the simplifier page, with the launch fraction
    /// already submitted when one was configured.
    #[must_use]
    pub fn new_simplifier_vm(&self) -> SimplifierVm {
        let service = self
            .random_seed
            .map_or_else(SimplifierService::new, SimplifierService::with_seed);
        let mut vm = SimplifierVm::new(service);
        if let Some((numerator, denominator)) = self.initial_fraction.clone() {
            vm.dispatch(SimplifierIntent::EditNumerator(numerator));
            vm.dispatch(SimplifierIntent::EditDenominator(denominator));
            vm.dispatch(SimplifierIntent::Simplify);
        }
        vm
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
