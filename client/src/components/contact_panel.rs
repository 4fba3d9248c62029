//! Contact disclosure shown after the findings are validated.

#[cfg(test)]
#[path = "contact_panel_test.rs"]
mod contact_panel_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent};
use crate::components::icons::{Icon, IconGlyph};
use crate::components::motion::Motion;
use crate::util::motion::{Transition, VisualState};

/// Number printed on the contact card.
pub const CONTACT_PHONE: &str = "9902299331";
/// Delay of the closing message relative to the card.
const CLOSING_DELAY_MS: u32 = 500;

/// `tel:` URI for a phone number, keeping only dialable characters.
pub fn tel_uri(phone: &str) -> String {
    let digits = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect::<String>();
    format!("tel:{digits}")
}

/// Ghost prompt that swaps to the contact card once clicked.
///
/// `visible` is owned by the flow controller; this component only asks for
/// the reveal through `on_reveal`.
#[component]
pub fn ContactPanel(#[prop(into)] visible: Signal<bool>, #[prop(into)] on_reveal: Callback<()>) -> impl IntoView {
    view! {
        <div class="contact-panel">
            <Show
                when=move || visible.get()
                fallback=move || {
                    view! {
                        <Button variant=ButtonVariant::Ghost class="contact-panel__prompt" on_click=on_reveal>
                            "Report concerns or queries?"
                        </Button>
                    }
                }
            >
                <Motion class="contact-panel__body" initial=VisualState::hidden().scaled(0.98)>
                    <Card class="contact-card">
                        <CardContent>
                            <p class="contact-card__role">"Principal Investigator"</p>
                            <a href=tel_uri(CONTACT_PHONE) class="contact-card__phone">
                                <IconGlyph icon=Icon::Phone/>
                                {CONTACT_PHONE}
                            </a>
                        </CardContent>
                    </Card>
                    <Motion
                        class="contact-panel__closing"
                        initial=VisualState::hidden()
                        transition=Transition::default().delayed(CLOSING_DELAY_MS)
                    >
                        "Happy Valentine's Day"
                        <br/>
                        <span class="contact-panel__nickname">"puchku!!"</span>
                    </Motion>
                </Motion>
            </Show>
        </div>
    }
}
