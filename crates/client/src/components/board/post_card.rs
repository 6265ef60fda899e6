use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use gratitude_shared::{hashtag_tokens, Post};

use crate::palette::{card_color, card_tilt};

#[component]
pub fn PostCard(post: Post, index: usize) -> Element {
    let class = format!(
        "post-card {} {} p-4 rounded-lg shadow-md transform transition-all duration-300 ease-in-out hover:rotate-0 hover:scale-105 hover:shadow-lg hover:-translate-y-1 cursor-pointer",
        card_color(index),
        card_tilt(&post.id).class(),
    );
    let posted_on = post.created_at.map(posted_on);

    rsx! {
        div { class,
            h3 { class: "font-bold mb-2 text-black", "{post.author}" }
            p { class: "text-sm mb-2 text-black", "{post.message}" }
            if let Some(tags) = &post.hashtags {
                p { class: "text-xs text-gray-600",
                    for tag in hashtag_tokens(tags) {
                        span { class: "mr-1", "{tag}" }
                    }
                }
            }
            if let Some(college) = &post.college {
                p { class: "text-xs italic mt-1 text-black", "{college}" }
            }
            if let Some(date) = posted_on {
                p { class: "text-[10px] mt-2 text-gray-500", "{date}" }
            }
        }
    }
}

/// Card footer date, e.g. `Nov 20, 2024`.
fn posted_on(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_drops_time_and_day_padding() {
        let at = Utc.with_ymd_and_hms(2024, 11, 5, 23, 59, 0).unwrap();
        assert_eq!(posted_on(at), "Nov 5, 2024");
    }
}
