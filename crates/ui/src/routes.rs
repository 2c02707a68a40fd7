use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{BasicsView, SimplifierView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SimplifierView)] Simplifier {},
        #[route("/basics", BasicsView)] Basics {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Fractions" }
            ul {
                li { Link { to: Route::Simplifier {}, "Simplify" } }
                li { Link { to: Route::Basics {}, "Basics" } }
            }
        }
    }
}
