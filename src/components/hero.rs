use dioxus::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::content::{FEATURES, HERO_SUBTITLE};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "bg-white py-24",
            div {
                class: "container mx-auto px-4",
                div {
                    class: "max-w-4xl mx-auto",
                    AnimatedTitle {}

                    p {
                        class: "text-xl text-gray-600 max-w-2xl mb-12 leading-relaxed ml-8 md:ml-16",
                        "{HERO_SUBTITLE}"
                    }

                    // Feature grid
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-8 text-center",
                        for feature in FEATURES {
                            div {
                                class: "space-y-3",
                                div {
                                    class: "w-16 h-16 bg-primary/10 rounded-2xl flex items-center justify-center mx-auto",
                                    span { class: "text-2xl", "{feature.emblem}" }
                                }
                                h3 { class: "font-semibold text-gray-900", "{feature.title}" }
                                p { class: "text-sm text-gray-600", "{feature.blurb}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
