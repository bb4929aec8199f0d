//! Periodic ticks and viewport listeners as scoped resources.
//!
//! Every handle returned by a [`Scheduler`] releases its timer or listener
//! when dropped, so a view that stores its handles and drops them on cleanup
//! leaves nothing pending behind.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::Closure};

/// Source of periodic ticks and resize notifications.
pub trait Scheduler {
    /// Keeps a periodic callback alive; dropping it cancels the timer.
    type Tick: 'static;
    /// Keeps a resize callback registered; dropping it removes the listener.
    type Listener: 'static;
    /// Keeps a one-shot callback pending; dropping it cancels the timer.
    type Timer: 'static;

    /// Run `callback` every `period_ms` milliseconds.
    fn every(&self, period_ms: u32, callback: impl FnMut() + 'static) -> Self::Tick;

    /// Run `callback` once after `delay_ms` milliseconds.
    fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Timer;

    /// Run `callback` whenever the viewport is resized.
    ///
    /// Returns `None` when there is nothing to listen on (no window).
    fn on_resize(&self, callback: impl FnMut() + 'static) -> Option<Self::Listener>;
}

// =============================================================================
// Browser implementation
// =============================================================================

/// Scheduler backed by `setInterval` and `window.addEventListener("resize")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    type Tick = gloo_timers::callback::Interval;
    type Listener = ResizeListener;
    type Timer = gloo_timers::callback::Timeout;

    fn every(&self, period_ms: u32, callback: impl FnMut() + 'static) -> Self::Tick {
        gloo_timers::callback::Interval::new(period_ms, callback)
    }

    fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Timer {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }

    fn on_resize(&self, callback: impl FnMut() + 'static) -> Option<Self::Listener> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(ResizeListener { window, closure })
    }
}

/// Host builds have no event loop; ticks and listeners never fire.
#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for BrowserScheduler {
    type Tick = ();
    type Listener = ();
    type Timer = ();

    fn every(&self, _period_ms: u32, _callback: impl FnMut() + 'static) -> Self::Tick {}

    fn after(&self, _delay_ms: u32, _callback: impl FnOnce() + 'static) -> Self::Timer {}

    fn on_resize(&self, _callback: impl FnMut() + 'static) -> Option<Self::Listener> {
        None
    }
}

/// Registered `resize` listener, removed on drop.
#[cfg(target_arch = "wasm32")]
pub struct ResizeListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}

// =============================================================================
// Instrumented implementation for tests
// =============================================================================
