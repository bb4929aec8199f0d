//! Reusable stateful view logic.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::TYPING_INTERVAL_MS;
use crate::core::{BrowserScheduler, Scheduler, TypingProgress};

/// Reveal `text` one character every [`TYPING_INTERVAL_MS`].
///
/// The timer is released once the text is complete, or when the calling
/// component is cleaned up, whichever comes first.
pub fn use_typing_effect(text: &str) -> ReadSignal<String> {
    use_typing_effect_with(&BrowserScheduler, text)
}

pub fn use_typing_effect_with<S: Scheduler>(scheduler: &S, text: &str) -> ReadSignal<String> {
    let (visible, set_visible) = signal(String::new());
    let (done, set_done) = signal(text.is_empty());

    let progress = Rc::new(RefCell::new(TypingProgress::new(text)));
    let tick = scheduler.every(TYPING_INTERVAL_MS, move || {
        let mut progress = progress.borrow_mut();
        if progress.advance() {
            set_visible.set(progress.visible());
        }
        if progress.is_done() {
            set_done.set(true);
        }
    });
    let tick = StoredValue::new_local(Some(tick));

    // The timer cannot be dropped from inside its own callback.
    Effect::new(move |_| {
        if done.get() {
            tick.update_value(|t| {
                t.take();
            });
        }
    });
    on_cleanup(move || {
        tick.update_value(|t| {
            t.take();
        })
    });

    visible
}

/// A flag that stays raised for `duration_ms` after each accepted `start()`.
///
/// `start()` returns `false` and does nothing while the flag is raised. The
/// pending timer is cancelled when the calling component is cleaned up.
pub fn use_cooldown(duration_ms: u32) -> (ReadSignal<bool>, impl Fn() -> bool + Copy + 'static) {
    use_cooldown_with(BrowserScheduler, duration_ms)
}

pub fn use_cooldown_with<S: Scheduler + 'static>(
    scheduler: S,
    duration_ms: u32,
) -> (ReadSignal<bool>, impl Fn() -> bool + Copy + 'static) {
    let (busy, set_busy) = signal(false);
    let scheduler = StoredValue::new_local(scheduler);
    let timer = StoredValue::new_local(None::<S::Timer>);

    let start = move || {
        if busy.get_untracked() {
            return false;
        }
        set_busy.set(true);
        let handle = scheduler.with_value(|s| s.after(duration_ms, move || set_busy.set(false)));
        timer.set_value(Some(handle));
        true
    };

    on_cleanup(move || {
        timer.update_value(|t| {
            t.take();
        })
    });

    (busy, start)
}
