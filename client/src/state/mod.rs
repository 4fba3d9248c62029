//! Client-side view state.
//!
//! DESIGN
//! ======
//! State types here are plain Rust with no Leptos dependencies; components
//! wrap them in `RwSignal`s and only mutate them through their methods.

pub mod flow;
pub mod reveal;
