// Lifecycle tests for the rotating-word display, driven through the
// manual scheduler so every tick and swap happens at an exact instant.

use std::cell::RefCell;
use std::rc::Rc;

use mongocraft_web::rotation::manual::ManualScheduler;
use mongocraft_web::rotation::{RotationDriver, RotationState, RotationTiming, WordList};

const WORDS: &[&str] = &["Deploy", "Monitoring", "Optimize", "Backup", "Security"];
const TIMING: RotationTiming = RotationTiming::new(3_000, 300);

fn start_driver(
    scheduler: &ManualScheduler,
) -> (
    RotationDriver<ManualScheduler>,
    Rc<RefCell<Vec<RotationState>>>,
) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let driver = RotationDriver::start(
        scheduler.clone(),
        WordList::new(WORDS.iter().copied()).unwrap(),
        TIMING,
        move |state| sink.borrow_mut().push(state),
    )
    .unwrap();
    (driver, seen)
}

fn state(index: usize, visible: bool) -> RotationState {
    RotationState { index, visible }
}

#[test]
fn test_activation_starts_at_first_word_visible() {
    let scheduler = ManualScheduler::new();
    let (driver, seen) = start_driver(&scheduler);

    assert_eq!(driver.state(), state(0, true));
    assert_eq!(driver.current_word(), "Deploy");
    assert_eq!(*seen.borrow(), vec![state(0, true)]);
}

#[test]
fn test_fade_window_then_advance() {
    let scheduler = ManualScheduler::new();
    let (driver, _seen) = start_driver(&scheduler);

    // The word is hidden for [tick, tick + fade) and visible otherwise.
    scheduler.advance_to(2_999);
    assert_eq!(driver.state(), state(0, true));
    scheduler.advance_to(3_000);
    assert_eq!(driver.state(), state(0, false));
    scheduler.advance_to(3_299);
    assert_eq!(driver.state(), state(0, false));
    scheduler.advance_to(3_300);
    assert_eq!(driver.state(), state(1, true));
    assert_eq!(driver.current_word(), "Monitoring");
}

#[test]
fn test_index_tracks_completed_cycles() {
    let scheduler = ManualScheduler::new();
    let (driver, _seen) = start_driver(&scheduler);

    for cycles in 1..=12u64 {
        scheduler.advance_to(cycles * 3_000 + 300);
        assert_eq!(driver.state(), state(cycles as usize % WORDS.len(), true));
    }
}

#[test]
fn test_five_cycles_wrap_back_to_first_word() {
    let scheduler = ManualScheduler::new();
    let (driver, seen) = start_driver(&scheduler);

    scheduler.advance_to(15_300);
    assert_eq!(driver.state(), state(0, true));
    assert_eq!(driver.current_word(), "Deploy");
    // Initial publish plus two mutations per completed cycle.
    assert_eq!(seen.borrow().len(), 1 + 5 * 2);
}

#[test]
fn test_deactivation_cancels_future_ticks() {
    let scheduler = ManualScheduler::new();
    let (driver, seen) = start_driver(&scheduler);

    scheduler.advance_to(3_300);
    let published = seen.borrow().len();
    drop(driver);

    scheduler.advance_to(60_000);
    assert_eq!(seen.borrow().len(), published);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_deactivation_mid_fade_cancels_pending_swap() {
    let scheduler = ManualScheduler::new();
    let (driver, seen) = start_driver(&scheduler);

    // Stop the display while the swap callback is in flight.
    scheduler.advance_to(3_000);
    assert_eq!(seen.borrow().last().copied(), Some(state(0, false)));
    drop(driver);

    scheduler.advance_to(60_000);
    assert_eq!(seen.borrow().last().copied(), Some(state(0, false)));
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_fresh_activation_restarts_from_first_word() {
    let scheduler = ManualScheduler::new();
    let (driver, _seen) = start_driver(&scheduler);

    scheduler.advance_to(6_300);
    assert_eq!(driver.state(), state(2, true));
    drop(driver);

    // A new activation is a new cycle from index 0, regardless of clock.
    let (driver, _seen) = start_driver(&scheduler);
    assert_eq!(driver.state(), state(0, true));
    scheduler.advance(3_300);
    assert_eq!(driver.state(), state(1, true));
}

#[test]
fn test_alternate_words_and_timing() {
    let scheduler = ManualScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let driver = RotationDriver::start(
        scheduler.clone(),
        WordList::new(["on", "off"]).unwrap(),
        RotationTiming::new(1_000, 50),
        move |state| sink.borrow_mut().push(state),
    )
    .unwrap();

    scheduler.advance_to(1_050);
    assert_eq!(driver.current_word(), "off");
    scheduler.advance_to(2_050);
    assert_eq!(driver.current_word(), "on");
    assert_eq!(driver.state(), state(0, true));
}
