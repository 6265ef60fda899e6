use dioxus::prelude::*;

use crate::components::board::PostCard;
use crate::components::ui::{Button, ButtonVariant};
use crate::hooks::BoardContext;

/// Card grid plus the "load more" trigger.
#[component]
pub fn PostGrid() -> Element {
    let board = use_context::<BoardContext>();
    let feed = board.feed.read().clone();

    rsx! {
        if feed.posts.is_empty() {
            div { class: "py-8 text-center text-sm text-gray-600",
                if feed.refreshing {
                    "Loading posts..."
                } else {
                    "No gratitude yet. Be the first to share!"
                }
            }
        } else {
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                for (index, post) in feed.posts.iter().enumerate() {
                    PostCard { key: "{post.id}", post: post.clone(), index }
                }
            }
        }
        if feed.has_more && !feed.posts.is_empty() {
            div { class: "flex justify-center mt-6",
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: feed.loading_more,
                    onclick: move |_| board.load_more(),
                    if feed.loading_more { "Loading..." } else { "Load more" }
                }
            }
        }
    }
}
