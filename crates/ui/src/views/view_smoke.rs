use crate::vm::SimplifierIntent;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_after, setup_view_harness_with_fraction,
};

fn submit(numerator: &str, denominator: &str) -> Vec<SimplifierIntent> {
    vec![
        SimplifierIntent::EditNumerator(numerator.to_string()),
        SimplifierIntent::EditDenominator(denominator.to_string()),
        SimplifierIntent::Simplify,
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn simplifier_view_smoke_renders_empty_form() {
    let mut harness = setup_view_harness(ViewKind::Simplifier);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Fraction Simplifier"), "missing title in {html}");
    assert!(html.contains("Simplify Fraction"), "missing submit in {html}");
    assert!(html.contains("Random"), "missing random in {html}");
    assert!(!html.contains("Step 1"), "unexpected walkthrough in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simplifier_view_smoke_renders_launch_fraction() {
    let mut harness = setup_view_harness_with_fraction("48", "18");
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Step 1: Start with the fraction 48/18"),
        "missing intro card in {html}"
    );
    assert!(html.contains("Next Step"), "missing next in {html}");
    assert!(!html.contains("Step 2"), "stage 2 shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simplifier_view_smoke_renders_warning() {
    let mut harness = setup_view_harness_with_fraction("0", "5");
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Denominator cannot be zero."),
        "missing warning in {html}"
    );
    assert!(!html.contains("Simplification Steps"), "unexpected walkthrough in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simplifier_view_smoke_renders_quiz_row_and_errors() {
    let mut intents = submit("48", "18");
    intents.extend([
        SimplifierIntent::Next,
        SimplifierIntent::EditQuotient("2".to_string()),
        SimplifierIntent::EditRemainder("12".to_string()),
        SimplifierIntent::Check,
        SimplifierIntent::EditQuotient("9".to_string()),
        SimplifierIntent::Check,
    ]);
    let mut harness = setup_view_harness_after(intents);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("48 ÷ 18 = 2 R 12"), "missing confirmed row in {html}");
    assert!(html.contains("18 ÷ 12 ="), "missing pending prompt in {html}");
    assert!(html.contains("quiz-input--error"), "missing error highlight in {html}");
    assert!(html.contains("Check"), "missing check in {html}");
    assert!(html.contains("Skip"), "missing skip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simplifier_view_smoke_renders_completion() {
    let mut intents = submit("100", "75");
    intents.extend([
        SimplifierIntent::Next,
        SimplifierIntent::Next,
        SimplifierIntent::Next,
        SimplifierIntent::Next,
    ]);
    let mut harness = setup_view_harness_after(intents);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("75 ÷ 25 = 3 R 0"), "missing revealed row in {html}");
    assert!(
        html.contains("Step 3: Divide both the numerator and denominator by the GCD (25)"),
        "missing division card in {html}"
    );
    assert!(html.contains("4/3"), "missing simplified fraction in {html}");
    assert!(html.contains("Simplification Complete!"), "missing completion in {html}");
    assert!(!html.contains("Next Step"), "next offered at the end in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn basics_view_smoke_renders_formula() {
    let mut harness = setup_view_harness(ViewKind::Basics);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Fraction Simplification Basics"), "missing title in {html}");
    assert!(html.contains("Numerator ÷ GCD"), "missing formula in {html}");
}
