// Tab bar. Selecting a tab swaps the visible panel; panel state lives in the
// panels themselves and is dropped when a panel unmounts.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::state::app_state::{AppState, Tab};

#[component]
pub fn Navbar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let active = state.read().active_tab;

    rsx! {
        nav { class: "navbar",
            for tab in Tab::ALL {
                button {
                    key: "{tab.id()}",
                    class: if tab == active { "nav-tab nav-tab-active" } else { "nav-tab" },
                    onclick: move |_| {
                        tracing::debug!(tab = tab.id(), "Switching tab");
                        state.write().active_tab = tab;
                    },
                    "{tab.label()}"
                }
            }
        }
    }
}
