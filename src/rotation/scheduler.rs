use web_sys::wasm_bindgen::closure::Closure;
use web_sys::wasm_bindgen::JsCast;

use crate::utils::error::{AppError, Result};

/// Scheduling surface used by the rotation driver.
///
/// Implementations hand back cancel-on-drop handles: once a handle is
/// dropped, its callback must never run again. That contract is what makes
/// teardown of an active display safe.
pub trait Scheduler: Clone + 'static {
    type Repeating: 'static;
    type Delayed: 'static;

    /// Schedules `callback` to run every `period_ms` milliseconds until the
    /// returned handle is dropped.
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Result<Self::Repeating>;

    /// Schedules `callback` to run once after `delay_ms` milliseconds,
    /// unless the returned handle is dropped first.
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<Self::Delayed>;
}

/// Timers backed by `window.setInterval` / `window.setTimeout`.
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| AppError::Timer("no window object".to_string()))
}

pub struct IntervalHandle {
    id: i32,
    // Keeps the JS-side callback alive for as long as the timer exists.
    _closure: Closure<dyn FnMut()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

pub struct TimeoutHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for TimeoutHandle {
    fn drop(&mut self) {
        // Clearing an already-fired timeout id is a no-op.
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Repeating = IntervalHandle;
    type Delayed = TimeoutHandle;

    fn every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Result<IntervalHandle> {
        let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .map_err(|_| AppError::Timer("setInterval rejected the callback".to_string()))?;
        Ok(IntervalHandle {
            id,
            _closure: closure,
        })
    }

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<TimeoutHandle> {
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);
        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .map_err(|_| AppError::Timer("setTimeout rejected the callback".to_string()))?;
        Ok(TimeoutHandle {
            id,
            _closure: closure,
        })
    }
}
