use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use crate::context::{UiApp, build_app_context};
use crate::vm::{SimplifierIntent, SimplifierVm};
use super::simplifier::SimplifierPreset;
use super::{BasicsView, SimplifierView};

pub const TEST_SEED: u64 = 17;

#[derive(Clone)]
struct TestApp {
    initial_fraction: Option<(String, String)>,
}

impl UiApp for TestApp {
    fn random_seed(&self) -> Option<u64> {
        Some(TEST_SEED)
    }

    fn initial_fraction(&self) -> Option<(String, String)> {
        self.initial_fraction.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Simplifier,
    Basics,
}

#[derive(Props, Clone)]
struct ViewRootProps {
    app: Arc<TestApp>,
    view: ViewKind,
    preset: Option<SimplifierVm>,
}

impl PartialEq for ViewRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRoot(props: ViewRootProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    if let Some(vm) = props.preset.clone() {
        use_context_provider(|| SimplifierPreset(vm));
    }
    match props.view {
        ViewKind::Simplifier => rsx! { SimplifierView {} },
        ViewKind::Basics => rsx! { BasicsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn build(view: ViewKind, initial_fraction: Option<(String, String)>, preset: Option<SimplifierVm>) -> ViewHarness {
    let app = Arc::new(TestApp { initial_fraction });
    let dom = VirtualDom::new_with_props(ViewRoot, ViewRootProps { app, view, preset });
    ViewHarness { dom }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    build(view, None, None)
}

/// Simplifier page launched with a configured fraction.
pub fn setup_view_harness_with_fraction(numerator: &str, denominator: &str) -> ViewHarness {
    build(
        ViewKind::Simplifier,
        Some((numerator.to_string(), denominator.to_string())),
        None,
    )
}

/// Simplifier page rendering a view-model driven through `intents` first.
pub fn setup_view_harness_after(intents: impl IntoIterator<Item = SimplifierIntent>) -> ViewHarness {
    let mut vm = SimplifierVm::new(services::SimplifierService::with_seed(TEST_SEED));
    for intent in intents {
        vm.dispatch(intent);
    }
    build(ViewKind::Simplifier, None, Some(vm))
}
