use dioxus::prelude::*;

use crate::components::cluster_form::ClusterCreationCard;
use crate::components::header::Header;
use crate::components::hero::Hero;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-white",
            Header {}
            Hero {}
            main {
                class: "bg-gray-50 py-16",
                div {
                    class: "container mx-auto px-4",
                    div {
                        class: "max-w-4xl mx-auto",
                        ClusterCreationCard {}
                    }
                }
            }
        }
    }
}
