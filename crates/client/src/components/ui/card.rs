use dioxus::prelude::*;

fn with_extra(base: &str, extra: Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = with_extra(
        "rounded-xl border border-gray-200 bg-white shadow-xl",
        props.class,
    );

    rsx! {
        div { class, {props.children} }
    }
}

/// Which heading a [`CardHeader`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    /// Centered `h1`, the page title.
    #[default]
    Page,
    /// Left-aligned `h2` introducing one part of the card.
    Section,
}

#[derive(Props, Clone, PartialEq)]
pub struct CardHeaderProps {
    pub title: String,
    #[props(optional)]
    pub subtitle: Option<String>,
    #[props(optional)]
    pub level: Option<HeadingLevel>,
}

#[component]
pub fn CardHeader(props: CardHeaderProps) -> Element {
    let subtitle = props.subtitle.clone();

    rsx! {
        match props.level.unwrap_or_default() {
            HeadingLevel::Page => rsx! {
                div { class: "px-6 pt-6 pb-2 text-center",
                    h1 { class: "text-4xl font-bold text-red-600", "{props.title}" }
                    if let Some(sub) = &subtitle {
                        p { class: "mt-2 text-black", "{sub}" }
                    }
                }
            },
            HeadingLevel::Section => rsx! {
                div { class: "px-6 pt-4",
                    h2 { class: "text-xl font-semibold text-black", "{props.title}" }
                    if let Some(sub) = &subtitle {
                        p { class: "text-sm text-gray-600", "{sub}" }
                    }
                }
            },
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardBodyProps {
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn CardBody(props: CardBodyProps) -> Element {
    let class = with_extra("px-6 pb-6 pt-4", props.class);

    rsx! {
        div { class, {props.children} }
    }
}
