//! MongoCraft marketing front end.
//!
//! A single-page Dioxus web app: static header and hero, a rotating-word
//! title, and a cluster creation form whose submit records the draft to
//! the console. There is no backend; nothing leaves the page.

pub mod app;
pub mod cluster;
pub mod components;
pub mod content;
pub mod pages;
pub mod rotation;
pub mod utils;
