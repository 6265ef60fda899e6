use dioxus::prelude::*;

use crate::hooks::BoardContext;

/// Shown for a few seconds after a post goes through.
#[component]
pub fn SuccessBanner() -> Element {
    let board = use_context::<BoardContext>();
    let visible = board.status.read().success_visible;

    rsx! {
        if visible {
            div {
                class: "success-banner mb-4 rounded-md border border-green-300 bg-green-100 px-4 py-3 text-sm text-green-800",
                role: "status",
                "Thanks for sharing your gratitude!"
            }
        }
    }
}
