use dioxus::prelude::*;

#[component]
pub fn BasicsView() -> Element {
    rsx! {
        div { class: "page basics-page",
            header { class: "view-header",
                h2 { class: "view-title", "Fraction Simplification Basics" }
            }
            div { class: "view-divider" }
            p {
                "Simplifying a fraction (also known as renaming) means reducing it to its lowest terms by dividing both the numerator and denominator by their greatest common divisor (GCD)."
            }
            p { class: "basics-formula",
                "Simplified Fraction = Numerator ÷ GCD / Denominator ÷ GCD"
            }
            p {
                "We use the division method to find the GCD efficiently. This process doesn't change the value of the fraction but makes it simpler to understand and work with."
            }
            p { class: "basics-footnote",
                "Fraction simplification is useful in mathematics, engineering, and everyday calculations for reducing fractions to their simplest form!"
            }
        }
    }
}
