use dioxus::prelude::*;

use crate::components::icon::Icon;
use crate::content::{BRAND_NAME, NAV_LINKS};

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200",
            div {
                class: "container mx-auto px-4 py-4",
                div {
                    class: "flex items-center justify-between",
                    // Logo and brand
                    div {
                        class: "flex items-center space-x-2",
                        div {
                            class: "w-8 h-8 bg-primary rounded-lg flex items-center justify-center",
                            Icon {
                                icon: &icondata::AiDatabaseOutlined,
                                class: "w-5 h-5 text-primary-foreground"
                            }
                        }
                        h1 { class: "text-xl font-bold text-gray-900", "{BRAND_NAME}" }
                    }

                    nav {
                        class: "hidden md:flex space-x-6",
                        for link in NAV_LINKS {
                            a {
                                href: link.href,
                                class: "text-gray-600 hover:text-primary transition-colors",
                                "{link.label}"
                            }
                        }
                    }

                    // Mobile menu button
                    button {
                        class: "md:hidden p-2 text-gray-500 hover:text-gray-700",
                        Icon {
                            icon: &icondata::AiMenuOutlined,
                            class: "w-5 h-5"
                        }
                    }
                }
            }
        }
    }
}
