use dioxus::prelude::*;

use fraction_core::{FieldErrors, Stage};
use services::{COMPLETION_MESSAGE, COMPLETION_TITLE, StageCard, StageView};

use crate::context::AppContext;
use crate::vm::{SimplifierIntent, SimplifierVm};

#[derive(Clone, Debug, PartialEq, Eq)]
struct QuizInputs {
    quotient: String,
    remainder: String,
    errors: FieldErrors,
}

#[component]
pub fn SimplifierView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| initial_vm(&ctx));

    let dispatch = use_callback(move |intent: SimplifierIntent| {
        let mut vm = vm;
        vm.write().dispatch(intent);
    });

    let (numerator, denominator, warning, stage_view, quiz) = {
        let vm = vm.read();
        (
            vm.numerator().to_string(),
            vm.denominator().to_string(),
            vm.warning(),
            vm.stage_view(),
            QuizInputs {
                quotient: vm.quotient().to_string(),
                remainder: vm.remainder().to_string(),
                errors: vm.field_errors(),
            },
        )
    };

    rsx! {
        div { class: "page simplifier-page",
            header { class: "view-header",
                h2 { class: "view-title", "Fraction Simplifier" }
                p { class: "view-subtitle", "Simplify fractions to their lowest terms!" }
            }
            div { class: "view-divider" }

            section { class: "simplifier-form",
                h3 { "Fraction to simplify:" }
                div { class: "simplifier-inputs",
                    input {
                        id: "simplifier-numerator",
                        class: "text-input",
                        r#type: "number",
                        min: "1",
                        max: "100",
                        placeholder: "Numerator",
                        value: "{numerator}",
                        oninput: move |evt| dispatch.call(SimplifierIntent::EditNumerator(evt.value())),
                    }
                    input {
                        id: "simplifier-denominator",
                        class: "text-input",
                        r#type: "number",
                        min: "1",
                        max: "100",
                        placeholder: "Denominator",
                        value: "{denominator}",
                        oninput: move |evt| dispatch.call(SimplifierIntent::EditDenominator(evt.value())),
                    }
                    button {
                        id: "simplifier-random",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(SimplifierIntent::Random),
                        "Random"
                    }
                }
                if let Some(warning) = warning {
                    p { class: "simplifier-warning", role: "alert", "{warning}" }
                }
                button {
                    id: "simplifier-submit",
                    class: "btn btn-primary btn-wide",
                    r#type: "button",
                    onclick: move |_| dispatch.call(SimplifierIntent::Simplify),
                    "Simplify Fraction"
                }
            }

            if let Some(view) = stage_view {
                WalkthroughPanel { view, quiz, on_intent: dispatch }
            }
        }
    }
}

fn initial_vm(ctx: &AppContext) -> SimplifierVm {
    #[cfg(test)]
    {
        if let Some(preset) = try_consume_context::<SimplifierPreset>() {
            return preset.0;
        }
    }
    ctx.new_simplifier_vm()
}

#[component]
fn WalkthroughPanel(view: StageView, quiz: QuizInputs, on_intent: EventHandler<SimplifierIntent>) -> Element {
    let cards = view.cards.iter().map(|card| {
        let is_gcd = card.stage == Stage::GcdComputation;
        rsx! {
            div { key: "{card.stage.ordinal()}", class: "stage-card",
                StageText { card: card.clone() }
                if is_gcd {
                    GcdSteps { view: view.clone(), quiz: quiz.clone(), on_intent }
                }
            }
        }
    });

    rsx! {
        section { class: "walkthrough",
            h3 { class: "walkthrough-title", "Simplification Steps:" }
            {cards}
            if view.can_advance() {
                button {
                    id: "walkthrough-next",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(SimplifierIntent::Next),
                    "Next Step"
                }
            } else {
                div { class: "completion",
                    h3 { "{COMPLETION_TITLE}" }
                    p { "{COMPLETION_MESSAGE}" }
                }
            }
        }
    }
}

#[component]
fn StageText(card: StageCard) -> Element {
    rsx! {
        p { class: "stage-title", "{card.title}" }
        if let Some(detail) = card.detail {
            p { class: "stage-detail", "{detail}" }
        }
    }
}

#[component]
fn GcdSteps(view: StageView, quiz: QuizInputs, on_intent: EventHandler<SimplifierIntent>) -> Element {
    let quotient_class = input_class(quiz.errors.quotient);
    let remainder_class = input_class(quiz.errors.remainder);
    let rows = view.shown_steps.iter().enumerate().map(|(index, step)| {
        rsx! {
            p { key: "{index}", class: "gcd-step", "{step}" }
        }
    });

    rsx! {
        div { class: "gcd-steps",
            {rows}
            if let Some(pending) = view.pending {
                div { class: "quiz-row",
                    span { class: "gcd-step", "{pending.dividend} ÷ {pending.divisor} =" }
                    input {
                        id: "quiz-quotient",
                        class: quotient_class,
                        r#type: "number",
                        placeholder: "Quotient",
                        value: "{quiz.quotient}",
                        oninput: move |evt| on_intent.call(SimplifierIntent::EditQuotient(evt.value())),
                    }
                    span { class: "gcd-step", "R" }
                    input {
                        id: "quiz-remainder",
                        class: remainder_class,
                        r#type: "number",
                        placeholder: "Remainder",
                        value: "{quiz.remainder}",
                        oninput: move |evt| on_intent.call(SimplifierIntent::EditRemainder(evt.value())),
                    }
                    button {
                        id: "quiz-check",
                        class: "btn btn-small",
                        r#type: "button",
                        onclick: move |_| on_intent.call(SimplifierIntent::Check),
                        "Check"
                    }
                    button {
                        id: "quiz-skip",
                        class: "btn btn-small btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(SimplifierIntent::Skip),
                        "Skip"
                    }
                }
            }
        }
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "quiz-input quiz-input--error"
    } else {
        "quiz-input"
    }
}

/// Replaces the context-built view-model so tests can render any state.
#[cfg(test)]
#[derive(Clone)]
pub(crate) struct SimplifierPreset(pub(crate) SimplifierVm);
