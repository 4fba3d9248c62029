//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, observers, canvas,
//! scrolling) from page and component logic. Each browser-facing function has
//! a no-op twin for server rendering.

pub mod color;
pub mod confetti;
pub mod in_view;
pub mod motion;
pub mod scroll;
pub mod timer;
