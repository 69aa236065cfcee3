use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{GreetingView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", GreetingView)] Greeting {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Self-Education Test" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
