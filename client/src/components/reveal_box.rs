//! Click-to-reveal content block.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each block owns a `RevealGate` signal; nothing outside the block can see or
//! change it. Hidden content is rendered blurred under an overlay so layout
//! does not jump when it is revealed.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::motion::{Motion, MotionTrigger};
use crate::state::reveal::RevealGate;
use crate::util::motion::{Transition, VisualState};

/// Viewport inset used by reveal blocks' fade-up.
const REVEAL_MARGIN_PX: i32 = -50;

#[component]
pub fn RevealBox(
    #[prop(into)] title: String,
    /// Extra delay before the fade-up, in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// `false` renders the content revealed with no gate.
    #[prop(default = true)]
    revealable: bool,
    children: Children,
) -> impl IntoView {
    let gate = RwSignal::new(RevealGate::new(revealable));
    let awaits_click = move || gate.with(RevealGate::awaits_click);
    let revealed = move || gate.with(RevealGate::is_revealed);

    let on_click = move |_| {
        if gate.try_update(RevealGate::click).unwrap_or(false) {
            #[cfg(feature = "hydrate")]
            log::debug!("reveal: opened block");
        }
    };

    view! {
        <Motion
            class="reveal-box"
            initial=VisualState::hidden().offset_y(20.0)
            transition=Transition::new(600).delayed(delay_ms)
            trigger=MotionTrigger::InView { margin_px: REVEAL_MARGIN_PX }
        >
            <div
                class="reveal-box__frame"
                class:reveal-box__frame--gated=awaits_click
                on:click=on_click
            >
                <div class="reveal-box__header">
                    <h3 class="reveal-box__title">
                        {move || {
                            if awaits_click() {
                                view! { <IconGlyph icon=Icon::Beaker/> }.into_any()
                            } else {
                                view! { <IconGlyph icon=Icon::Check class="icon--success"/> }.into_any()
                            }
                        }}
                        {title}
                    </h3>
                    <Show when=awaits_click>
                        <span class="reveal-box__hint">"Click to Reveal Data"</span>
                    </Show>
                </div>
                <div class="reveal-box__body">
                    <div class="reveal-box__overlay" class:reveal-box__overlay--gone=revealed>
                        <span class="reveal-box__overlay-label">"Data Obfuscated"</span>
                    </div>
                    <div class="reveal-box__content" class:reveal-box__content--blurred=move || !revealed()>
                        {children()}
                    </div>
                </div>
            </div>
        </Motion>
    }
}
