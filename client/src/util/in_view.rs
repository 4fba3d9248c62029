//! One-shot visibility triggers for enter transitions.
//!
//! Both hooks return a signal that flips to `true` exactly once and never
//! back. On the server they stay `false`, so the rendered markup always
//! carries the initial visual state and the browser animates from it.

#[cfg(test)]
#[path = "in_view_test.rs"]
mod in_view_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Frames to wait after mount before leaving the initial state. A node
/// inserted after load has no computed style until one frame has rendered.
pub const MOUNT_SETTLE_FRAMES: u32 = 2;

/// Counts animation frames down to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCountdown {
    remaining: u32,
}

impl FrameCountdown {
    pub const fn new(frames: u32) -> Self {
        Self { remaining: frames }
    }

    /// Record one elapsed frame. Returns `true` once no frames remain.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

/// Flips once `MOUNT_SETTLE_FRAMES` animation frames have passed since mount.
#[cfg(feature = "hydrate")]
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    after_frames(FrameCountdown::new(MOUNT_SETTLE_FRAMES), move || set_mounted.set(true));
    mounted
}

#[cfg(not(feature = "hydrate"))]
pub fn use_mounted() -> ReadSignal<bool> {
    signal(false).0
}

#[cfg(feature = "hydrate")]
fn after_frames(mut countdown: FrameCountdown, done: impl FnOnce() + 'static) {
    request_animation_frame(move || {
        if countdown.tick() {
            done();
        } else {
            after_frames(countdown, done);
        }
    });
}

/// Flips the first time `target` intersects the viewport shrunk by
/// `margin_px` on every side (negative margins require the element to be
/// that far inside the viewport).
#[cfg(feature = "hydrate")]
pub fn use_in_view(target: NodeRef<leptos::html::Div>, margin_px: i32) -> ReadSignal<bool> {
    let (seen, set_seen) = signal(false);
    let observer = StoredValue::new_local(None::<ViewportObserver>);
    Effect::new(move || {
        let Some(el) = target.get() else {
            return;
        };
        if seen.get_untracked() || observer.with_value(Option::is_some) {
            return;
        }
        match ViewportObserver::observe_once(&el, margin_px, move || set_seen.set(true)) {
            Some(active) => observer.set_value(Some(active)),
            // No observer support: show the content rather than hide it forever.
            None => set_seen.set(true),
        }
    });
    on_cleanup(move || {
        observer.update_value(|slot| {
            if let Some(active) = slot.take() {
                active.observer.disconnect();
            }
        });
    });
    seen
}

#[cfg(not(feature = "hydrate"))]
pub fn use_in_view(_target: NodeRef<leptos::html::Div>, _margin_px: i32) -> ReadSignal<bool> {
    signal(false).0
}

#[cfg(feature = "hydrate")]
type IntersectCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(feature = "hydrate")]
struct ViewportObserver {
    observer: web_sys::IntersectionObserver,
    _callback: IntersectCallback,
}

#[cfg(feature = "hydrate")]
impl ViewportObserver {
    fn observe_once(el: &web_sys::Element, margin_px: i32, on_enter: impl Fn() + 'static) -> Option<Self> {
        let callback: IntersectCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .dyn_ref::<web_sys::IntersectionObserverEntry>()
                        .is_some_and(web_sys::IntersectionObserverEntry::is_intersecting)
                });
                if entered {
                    observer.disconnect();
                    on_enter();
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&format!("{margin_px}px"));
        let observer =
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("in_view: IntersectionObserver unavailable: {err:?}");
                    return None;
                }
            };
        observer.observe(el);
        Some(Self { observer, _callback: callback })
    }
}
