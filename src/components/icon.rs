use dioxus::prelude::*;
use icondata::Icon as IconData;

/// Inline `icondata` glyph. Fill defaults to `currentColor`, so color
/// comes from the surrounding text classes.
#[component]
pub fn Icon(icon: &'static IconData, class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            role: "img",
            view_box: icon.view_box.unwrap_or("0 0 24 24"),
            fill: icon.fill.unwrap_or("currentColor"),
            stroke: icon.stroke.unwrap_or("none"),
            stroke_width: icon.stroke_width.unwrap_or("0"),
            dangerous_inner_html: icon.data,
        }
    }
}
