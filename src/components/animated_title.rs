use std::rc::Rc;

use dioxus::prelude::*;

use crate::content::{HERO_TITLE_LEAD, HERO_TITLE_PREFIX, ROTATING_WORDS, ROTATION_TIMING};
use crate::rotation::{BrowserScheduler, RotationDriver, RotationState, WordList};

/// Hero heading with the rotating word. The rotation driver lives in hook
/// state, so unmounting the component drops it and cancels both timers.
#[component]
pub fn AnimatedTitle() -> Element {
    let rotation = use_signal(RotationState::initial);

    let _driver = use_hook(|| {
        let driver = WordList::new(ROTATING_WORDS.iter().copied()).and_then(|words| {
            RotationDriver::start(BrowserScheduler, words, ROTATION_TIMING, move |state| {
                let mut rotation = rotation;
                rotation.set(state);
            })
        });
        Rc::new(match driver {
            Ok(driver) => Some(driver),
            Err(err) => {
                // Unreachable with the shipped content; the title simply
                // stays on the first word.
                log::error!("word rotation disabled: {err}");
                None
            }
        })
    });

    let state = *rotation.read();
    let word = ROTATING_WORDS[state.index % ROTATING_WORDS.len()];
    let word_class = if state.visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 -translate-y-2"
    };

    rsx! {
        h1 {
            class: "text-6xl md:text-7xl mb-6 text-left ml-8 md:ml-16",
            span {
                class: "font-bold text-primary text-8xl md:text-7xl",
                "{HERO_TITLE_PREFIX}"
            }
            br {}
            span {
                class: "font-light text-gray-700 text-3xl md:text-4xl",
                "{HERO_TITLE_LEAD}"
            }
            " "
            span {
                class: "inline-block px-4 py-1 rounded-xl border-2 border-gray-300 transition-all duration-300",
                span {
                    class: "text-secondary text-4xl md:text-5xl transition-all duration-300 {word_class}",
                    "{word}"
                }
            }
        }
    }
}
