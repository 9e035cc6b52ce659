use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::pages::home::Home;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomePage {},
}

#[component]
pub fn HomePage() -> Element {
    rsx! { Home {} }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "MongoCraft | Automated MongoDB Cluster Management" }
        Router::<Route> {}
    }
}
