//! The gratitude board page.

use dioxus::prelude::*;

use crate::components::board::{PostForm, PostGrid, SuccessBanner};
use crate::components::ui::{Card, CardBody, CardHeader, HeadingLevel};
use crate::config::BoardConfig;
use crate::hooks::use_board_provider;

#[component]
pub fn Board() -> Element {
    let config = use_hook(BoardConfig::from_env);
    use_board_provider(config);

    rsx! {
        div { class: "min-h-screen bg-gradient-to-b from-red-100 to-black p-8",
            Card { class: "max-w-4xl mx-auto",
                CardHeader {
                    title: "Husky Gratitude Board".to_string(),
                    subtitle: Some("Share what you're thankful for at Northeastern University!".to_string()),
                }
                CardBody { class: "border-b border-gray-100",
                    SuccessBanner {}
                    PostForm {}
                }
                CardHeader {
                    title: "Wall of Gratitude".to_string(),
                    level: HeadingLevel::Section,
                }
                CardBody {
                    PostGrid {}
                }
            }
        }
    }
}
