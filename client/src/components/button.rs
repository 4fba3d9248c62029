//! Pill button primitive.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

/// BEM class list for a variant/size pair plus caller extras.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Solid => "button--solid",
        ButtonVariant::Outline => "button--outline",
        ButtonVariant::Ghost => "button--ghost",
    };
    let size = match size {
        ButtonSize::Default => "",
        ButtonSize::Large => " button--lg",
    };
    let extra = extra.trim();
    if extra.is_empty() {
        format!("button {variant}{size}")
    } else {
        format!("button {variant}{size} {extra}")
    }
}

/// Styled `<button>` that forwards clicks to `on_click`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size, &class)
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
