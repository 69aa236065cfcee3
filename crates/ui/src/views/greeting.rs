use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn GreetingView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page greeting",
            h2 { "How self-educated are you?" }
            p {
                "Eighteen short questions, three answers each. Pick the answer that fits you best. "
                "You can go back and change an answer until you finish the test."
            }
            button {
                id: "greeting-begin",
                class: "btn btn-primary",
                r#type: "button",
                // The greeting is not kept in history once the test begins.
                onclick: move |_| {
                    if let Some(err) = navigator.replace(Route::Quiz {}) {
                        tracing::warn!(?err, "failed to open the quiz");
                    }
                },
                "Begin test"
            }
        }
    }
}
