use dioxus::prelude::*;

/// Native `<select>` with a blank placeholder option.
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    #[props(optional)]
    pub id: Option<String>,
    /// Selected option, empty for the placeholder.
    pub value: String,
    pub options: Vec<String>,
    pub placeholder: String,
    pub onchange: EventHandler<FormEvent>,
    #[props(optional)]
    pub disabled: Option<bool>,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let onchange = props.onchange;

    rsx! {
        select {
            id: props.id.unwrap_or_default(),
            class: "w-full rounded-md bg-white text-black px-3 py-2 text-sm border border-gray-300 focus:outline-none focus:ring-2 focus:ring-red-500/50 disabled:bg-gray-100",
            disabled: props.disabled.unwrap_or(false),
            onchange: move |e| onchange.call(e),
            option { value: "", selected: props.value.is_empty(), "{props.placeholder}" }
            for opt in props.options.iter() {
                option {
                    key: "{opt}",
                    value: "{opt}",
                    selected: *opt == props.value,
                    "{opt}"
                }
            }
        }
    }
}
