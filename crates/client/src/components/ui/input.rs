use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full rounded-md bg-white text-black px-3 py-2 text-sm border border-gray-300 placeholder-gray-500 transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-red-500/50 focus:border-red-500 disabled:bg-gray-100";

fn field_class(extra: Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", FIELD_CLASS, extra),
        _ => FIELD_CLASS.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub id: Option<String>,
    #[props(optional)]
    pub class: Option<String>,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub disabled: Option<bool>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            id: props.id.unwrap_or_default(),
            class: field_class(props.class),
            r#type: "text",
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            disabled: props.disabled.unwrap_or(false),
            oninput: move |e| props.oninput.call(e),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    #[props(optional)]
    pub id: Option<String>,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub required: Option<bool>,
    #[props(optional)]
    pub disabled: Option<bool>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        textarea {
            id: props.id.unwrap_or_default(),
            class: field_class(Some("min-h-[100px] resize-y".to_string())),
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            required: props.required.unwrap_or(false),
            disabled: props.disabled.unwrap_or(false),
            oninput: move |e| props.oninput.call(e),
        }
    }
}
