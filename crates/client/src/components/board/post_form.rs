//! Gratitude post form.

use dioxus::prelude::*;
use gratitude_shared::College;

use crate::components::ui::{Button, ButtonVariant, Select, TextArea, TextInput};
use crate::config::AuthorPolicy;
use crate::hooks::BoardContext;

#[component]
pub fn PostForm() -> Element {
    let board = use_context::<BoardContext>();
    let status = board.status.read().clone();
    let draft = status.draft;
    let submitting = status.submitting;
    let author_required = board.author_policy() == AuthorPolicy::Required;
    let author_placeholder = if author_required {
        "Enter your name"
    } else {
        "Enter your name or leave blank for anonymous"
    };

    let colleges: Vec<String> = College::ALL
        .iter()
        .map(|c| c.label().to_string())
        .collect();

    let onsubmit = {
        let board = board.clone();
        move |e: FormEvent| {
            e.prevent_default();
            board.submit();
        }
    };

    rsx! {
        form { onsubmit, class: "space-y-4 mb-8",
            // Author
            div { class: "space-y-2",
                label { r#for: "author", class: "text-sm font-medium text-black",
                    if author_required { "Your Name" } else { "Your Name (Optional)" }
                }
                TextInput {
                    id: "author",
                    value: draft.author.clone(),
                    placeholder: author_placeholder,
                    disabled: submitting,
                    oninput: {
                        let board = board.clone();
                        move |e: FormEvent| {
                            let value = e.value();
                            board.edit(move |f| f.author = value);
                        }
                    },
                }
            }

            // Message
            div { class: "space-y-2",
                label { r#for: "message", class: "text-sm font-medium text-black", "Gratitude Message" }
                TextArea {
                    id: "message",
                    value: draft.message.clone(),
                    placeholder: "What are you grateful for?",
                    required: true,
                    disabled: submitting,
                    oninput: {
                        let board = board.clone();
                        move |e: FormEvent| {
                            let value = e.value();
                            board.edit(move |f| f.message = value);
                        }
                    },
                }
            }

            // Hashtags
            div { class: "space-y-2",
                label { r#for: "hashtags", class: "text-sm font-medium text-black", "Hashtags (Optional)" }
                TextInput {
                    id: "hashtags",
                    value: draft.hashtags.clone(),
                    placeholder: "Enter hashtags separated by commas (e.g., grateful, husky, northeastern)",
                    disabled: submitting,
                    oninput: {
                        let board = board.clone();
                        move |e: FormEvent| {
                            let value = e.value();
                            board.edit(move |f| f.hashtags = value);
                        }
                    },
                }
            }

            // College
            div { class: "space-y-2",
                label { r#for: "college", class: "text-sm font-medium text-black", "College (Optional)" }
                Select {
                    id: "college",
                    value: draft.college.clone(),
                    options: colleges,
                    placeholder: "Select your college".to_string(),
                    disabled: submitting,
                    onchange: {
                        let board = board.clone();
                        move |e: FormEvent| {
                            let value = e.value();
                            board.edit(move |f| f.college = value);
                        }
                    },
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: submitting,
                if submitting { "Sharing..." } else { "Share Gratitude" }
            }
        }
    }
}
