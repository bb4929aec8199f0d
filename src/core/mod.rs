//! Core application logic, independent of the view layer.
//!
//! This module provides:
//! - [`PetStore`] holding the displayed pet and shuffling it
//! - [`wallet`] connection state machine and browser adapter
//! - [`ToastQueue`] behind the [`notify::Notifier`] trait
//! - [`rain::RainGrid`] and [`TypingProgress`] driving the page animations

pub mod error;
pub mod notify;
mod pet;
pub mod rain;
pub mod schedule;
mod typing;
pub mod wallet;

pub use notify::ToastQueue;
pub use pet::PetStore;
pub use rain::{RainAnimation, RainSurface};
pub use schedule::{BrowserScheduler, Scheduler};
pub use typing::TypingProgress;
