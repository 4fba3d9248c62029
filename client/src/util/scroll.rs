//! Smooth scrolling to page anchors.

use leptos::prelude::*;

/// Smoothly scroll the page so `target` is in view. No-op before mount.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view(target: NodeRef<leptos::html::Div>) {
    let Some(el) = target.get_untracked() else {
        log::debug!("scroll: anchor not mounted");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_into_view(_target: NodeRef<leptos::html::Div>) {}
