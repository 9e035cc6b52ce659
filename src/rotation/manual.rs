//! Deterministic scheduler for driving the rotation by hand.
//!
//! Time only moves when [`ManualScheduler::advance_to`] is called, so tests
//! can walk a display through exact tick and swap instants without a
//! browser or real timers. Due entries run in (due time, registration
//! order), matching the single event queue the browser guarantees.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::Scheduler;
use crate::utils::error::Result;

#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    now: u64,
    next_seq: u64,
    entries: Vec<Entry>,
}

struct Entry {
    seq: u64,
    due: u64,
    /// `Some` for repeating entries, rescheduled after each run.
    period: Option<u32>,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnMut()>,
}

/// Cancel-on-drop handle for a manually scheduled entry.
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Number of live (not cancelled) scheduled entries.
    pub fn pending(&self) -> usize {
        let inner = self.inner.borrow();
        inner.entries.iter().filter(|e| !e.cancelled.get()).count()
    }

    /// Moves the clock forward to `time_ms`, running every due entry in
    /// order. Callbacks may schedule new work or cancel handles; the
    /// queue borrow is released before each callback runs.
    pub fn advance_to(&self, time_ms: u64) {
        loop {
            let mut entry = {
                let mut inner = self.inner.borrow_mut();
                inner.entries.retain(|e| !e.cancelled.get());
                let due_pos = inner
                    .entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= time_ms)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(pos, _)| pos);
                let Some(pos) = due_pos else {
                    inner.now = inner.now.max(time_ms);
                    return;
                };
                let entry = inner.entries.swap_remove(pos);
                inner.now = inner.now.max(entry.due);
                entry
            };

            // A drop chain during the retain above may have cancelled the
            // entry after it was selected; it must not run in that case.
            if entry.cancelled.get() {
                continue;
            }

            (entry.callback)();

            // A handle dropped during its own callback must not requeue.
            if !entry.cancelled.get() {
                if let Some(period) = entry.period {
                    entry.due += u64::from(period);
                    self.inner.borrow_mut().entries.push(entry);
                }
            }
        }
    }

    /// Moves the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        let target = self.now() + delta_ms;
        self.advance_to(target);
    }

    fn schedule(&self, delay_ms: u64, period: Option<u32>, callback: Box<dyn FnMut()>) -> ManualHandle {
        let mut inner = self.inner.borrow_mut();
        let cancelled = Rc::new(Cell::new(false));
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let due = inner.now + delay_ms;
        inner.entries.push(Entry {
            seq,
            due,
            period,
            cancelled: Rc::clone(&cancelled),
            callback,
        });
        ManualHandle { cancelled }
    }
}

impl Scheduler for ManualScheduler {
    type Repeating = ManualHandle;
    type Delayed = ManualHandle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Result<ManualHandle> {
        Ok(self.schedule(u64::from(period_ms), Some(period_ms), callback))
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<ManualHandle> {
        let mut callback = Some(callback);
        Ok(self.schedule(
            u64::from(delay_ms),
            None,
            Box::new(move || {
                if let Some(callback) = callback.take() {
                    callback();
                }
            }),
        ))
    }
}
