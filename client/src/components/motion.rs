//! Wrapper element that plays an enter transition.

use leptos::prelude::*;

use crate::util::in_view::{use_in_view, use_mounted};
use crate::util::motion::{Transition, VisualState, motion_style};

/// What starts the transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionTrigger {
    /// As soon as the element is mounted.
    #[default]
    Mount,
    /// The first time the element scrolls into view, with the viewport
    /// inset by `margin_px`.
    InView { margin_px: i32 },
}

/// `<div>` that renders `initial` until its trigger fires, then transitions
/// to `animate`.
#[component]
pub fn Motion(
    #[prop(optional, into)] class: String,
    initial: VisualState,
    #[prop(default = VisualState::SETTLED)] animate: VisualState,
    #[prop(optional)] transition: Transition,
    #[prop(optional)] trigger: MotionTrigger,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let entered = match trigger {
        MotionTrigger::Mount => use_mounted(),
        MotionTrigger::InView { margin_px } => use_in_view(node_ref, margin_px),
    };

    view! {
        <div
            class=class
            node_ref=node_ref
            style=move || motion_style(initial, animate, transition, entered.get())
        >
            {children()}
        </div>
    }
}
