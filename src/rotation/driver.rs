use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::Scheduler;
use super::{Rotation, RotationState, RotationTiming, WordList};
use crate::utils::error::Result;

/// Drives a [`Rotation`] through its cycle: a repeating tick starts the
/// fade-out, and a one-shot swap scheduled inside each tick advances the
/// word once the fade delay has elapsed.
///
/// The driver owns both timer handles. Dropping it cancels the recurring
/// tick and whichever swap is still pending, so no callback can touch the
/// rotation after teardown.
pub struct RotationDriver<S: Scheduler> {
    rotation: Rc<RefCell<Rotation>>,
    _tick: S::Repeating,
    pending_swap: Rc<RefCell<Option<S::Delayed>>>,
}

impl<S: Scheduler> Drop for RotationDriver<S> {
    fn drop(&mut self) {
        // The tick closure keeps the slot alive, so the in-flight swap is
        // cancelled here explicitly rather than left to reference counts.
        self.pending_swap.borrow_mut().take();
    }
}

impl<S: Scheduler> RotationDriver<S> {
    /// Starts the cycle. `on_change` is invoked once with the initial
    /// state and then after every mutation.
    pub fn start(
        scheduler: S,
        words: WordList,
        timing: RotationTiming,
        on_change: impl Fn(RotationState) + 'static,
    ) -> Result<Self> {
        timing.validate()?;

        let rotation = Rc::new(RefCell::new(Rotation::new(words)));
        let pending_swap: Rc<RefCell<Option<S::Delayed>>> = Rc::new(RefCell::new(None));
        let on_change: Rc<dyn Fn(RotationState)> = Rc::new(on_change);

        on_change(rotation.borrow().state());

        let tick = scheduler.every(timing.period_ms, {
            let scheduler = scheduler.clone();
            let rotation = Rc::clone(&rotation);
            let pending_swap = Rc::clone(&pending_swap);
            let on_change = Rc::clone(&on_change);
            Box::new(move || {
                rotation.borrow_mut().begin_swap();
                on_change(rotation.borrow().state());

                let swap = scheduler.after(timing.fade_ms, {
                    let rotation = Rc::clone(&rotation);
                    let on_change = Rc::clone(&on_change);
                    Box::new(move || {
                        rotation.borrow_mut().finish_swap();
                        on_change(rotation.borrow().state());
                    })
                });
                // The previous cycle's fired handle is replaced here, in
                // the tick callback, never inside its own callback.
                match swap {
                    Ok(handle) => *pending_swap.borrow_mut() = Some(handle),
                    Err(err) => log::warn!("failed to schedule word swap: {err}"),
                }
            })
        })?;

        Ok(Self {
            rotation,
            _tick: tick,
            pending_swap,
        })
    }

    pub fn state(&self) -> RotationState {
        self.rotation.borrow().state()
    }

    pub fn current_word(&self) -> String {
        self.rotation.borrow().current_word().to_string()
    }
}
