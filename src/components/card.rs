use dioxus::prelude::*;
use icondata::Icon as IconData;

use crate::components::icon::Icon;

/// White panel with the shared card chrome. `class` is appended to the
/// base style so callers can add accents like a dashed border.
#[component]
pub fn Card(children: Element, class: Option<&'static str>) -> Element {
    let extra = class.unwrap_or("");
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 {extra}",
            {children}
        }
    }
}

#[component]
pub fn StatCard(icon: &'static IconData, label: &'static str, accent: &'static str) -> Element {
    rsx! {
        Card {
            div {
                class: "p-4",
                div {
                    class: "flex items-center space-x-2",
                    span {
                        class: "{accent}",
                        Icon { icon, class: "w-5 h-5" }
                    }
                    div {
                        p { class: "text-sm text-gray-600", "{label}" }
                        p { class: "text-2xl font-bold", "0" }
                    }
                }
            }
        }
    }
}
