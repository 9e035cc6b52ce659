use dioxus::prelude::*;

use crate::cluster::{ClusterDraft, ClusterType, NodeCount};
use crate::components::card::{Card, StatCard};
use crate::components::icon::Icon;
use crate::content::{PROVISIONING_NOTES, QUICK_STATS};

const FIELD_CLASS: &str =
    "w-full px-3 py-2 text-sm rounded-md border border-gray-300 bg-white focus:outline-none focus:ring-2 focus:ring-primary";

/// Quick stats plus the cluster creation card. The draft never leaves the
/// component; submitting records it to the console log.
#[component]
pub fn ClusterCreationCard() -> Element {
    let mut draft = use_signal(ClusterDraft::new);
    let view = draft.read().clone();
    let submit_enabled = view.is_complete();

    rsx! {
        div {
            class: "space-y-6",

            // Quick stats
            div {
                class: "grid grid-cols-1 md:grid-cols-4 gap-4",
                for stat in QUICK_STATS {
                    StatCard {
                        icon: stat.icon,
                        label: stat.label,
                        accent: stat.accent
                    }
                }
            }

            Card {
                class: Some("border-2 border-dashed border-gray-200 hover:border-primary transition-colors"),
                div {
                    class: "text-center px-6 pt-6",
                    div {
                        class: "mx-auto w-12 h-12 bg-primary/10 rounded-full flex items-center justify-center mb-4",
                        Icon {
                            icon: &icondata::AiPlusOutlined,
                            class: "w-6 h-6 text-primary"
                        }
                    }
                    h3 {
                        class: "text-2xl font-semibold text-gray-900",
                        "Create a new MongoDB cluster"
                    }
                    p {
                        class: "text-lg text-gray-600 mt-2",
                        "Provision a MongoDB cluster automatically and start operating in minutes"
                    }
                }

                div {
                    class: "p-6 space-y-6",
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4",

                        div {
                            class: "space-y-2",
                            label { class: "text-sm font-medium", "Cluster type" }
                            select {
                                class: FIELD_CLASS,
                                onchange: move |ev| {
                                    draft.write().set_cluster_type(ev.value().parse().ok());
                                },
                                option {
                                    value: "",
                                    disabled: true,
                                    selected: view.cluster_type().is_none(),
                                    "Select a type"
                                }
                                for cluster_type in ClusterType::ALL {
                                    option {
                                        value: cluster_type.value(),
                                        selected: view.cluster_type() == Some(cluster_type),
                                        "{cluster_type.label()}"
                                    }
                                }
                            }
                        }

                        div {
                            class: "space-y-2",
                            label { class: "text-sm font-medium", "Cluster name" }
                            input {
                                class: FIELD_CLASS,
                                placeholder: "my-mongodb-cluster",
                                value: "{view.name()}",
                                oninput: move |ev| {
                                    draft.write().set_name(ev.value());
                                }
                            }
                        }

                        div {
                            class: "space-y-2",
                            label { class: "text-sm font-medium", "Node count" }
                            select {
                                class: FIELD_CLASS,
                                onchange: move |ev| {
                                    draft.write().set_node_count(ev.value().parse().ok());
                                },
                                option {
                                    value: "",
                                    disabled: true,
                                    selected: view.node_count().is_none(),
                                    "Node count"
                                }
                                for count in NodeCount::ALL {
                                    option {
                                        value: "{count}",
                                        selected: view.node_count() == Some(count),
                                        "{count.label()}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "border-t border-gray-200 pt-6",
                        div {
                            class: "flex flex-col md:flex-row gap-4 justify-between items-center",
                            div {
                                class: "text-sm text-gray-600",
                                for note in PROVISIONING_NOTES {
                                    p { "• {note}" }
                                }
                            }

                            div {
                                class: "flex gap-2",
                                button {
                                    class: "px-6 py-3 rounded-md border border-gray-300 font-medium text-gray-700 hover:bg-gray-100 transition-colors",
                                    "Advanced settings"
                                }
                                button {
                                    class: "flex items-center px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:bg-primary/90 transition-colors disabled:opacity-50 disabled:pointer-events-none",
                                    disabled: !submit_enabled,
                                    onclick: move |_| {
                                        draft.read().submit();
                                    },
                                    Icon {
                                        icon: &icondata::AiPlusOutlined,
                                        class: "w-4 h-4 mr-2"
                                    }
                                    "Create Cluster"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
