//! "A Small Statistical Experiment" page.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `FlowController` signal and one `TimerSet`. Every button
//! goes through `dispatch`, which applies the event and then runs the returned
//! effects: timers are scheduled into the set (cleared on unmount), scrolls
//! target the end-of-page anchor, and bursts go to the confetti renderer.
//! Rendering reads `FlowController::sections` only.

#[cfg(test)]
#[path = "experiment_test.rs"]
mod experiment_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::contact_panel::ContactPanel;
use crate::components::icons::{Icon, IconGlyph};
use crate::components::motion::{Motion, MotionTrigger};
use crate::components::reveal_box::RevealBox;
use crate::state::flow::{Effect, FlowController, FlowEvent, Sections, calculate_label, format_p_value, is_significant};
use crate::util::confetti;
use crate::util::motion::{Transition, VisualState};
use crate::util::scroll::scroll_into_view;
use crate::util::timer::TimerSet;

/// Input features listed in the second reveal block, as `(symbol, label)`.
pub const INPUT_FEATURES: [(&str, &str); 3] = [
    ("x₁", "Your cuteness"),
    ("x₂", "Our conversations"),
    ("x₃", "Our intellectual chaos"),
];

/// Significance line under the result value.
pub fn significance_note(p_value: f64) -> &'static str {
    if is_significant(p_value) {
        "p < 0.05 (Significant Result)"
    } else {
        "p ≥ 0.05 (Not Significant)"
    }
}

#[derive(Clone, Copy)]
struct PageHandles {
    flow: RwSignal<FlowController>,
    timers: StoredValue<TimerSet, LocalStorage>,
    end_anchor: NodeRef<leptos::html::Div>,
}

/// Apply `event` and run whatever it produced.
fn dispatch(handles: PageHandles, event: FlowEvent) {
    let Some(effects) = handles.flow.try_update(|flow| flow.apply(event)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    log::debug!(
        "experiment: {event:?} -> {} ({} effect(s))",
        handles.flow.with_untracked(|flow| flow.state().as_str()),
        effects.len()
    );
    for effect in effects {
        run_effect(handles, effect);
    }
}

fn run_effect(handles: PageHandles, effect: Effect) {
    match effect {
        Effect::Schedule { event, delay_ms } => {
            handles.timers.update_value(|timers| {
                timers.schedule(delay_ms, move || dispatch(handles, event));
            });
        }
        Effect::ScrollToEnd { delay_ms } => {
            handles.timers.update_value(|timers| {
                timers.schedule(delay_ms, move || scroll_into_view(handles.end_anchor));
            });
        }
        Effect::Burst(config) => confetti::fire(&config),
    }
}

#[component]
pub fn ExperimentPage() -> impl IntoView {
    let handles = PageHandles {
        flow: RwSignal::new(FlowController::default()),
        timers: StoredValue::new_local(TimerSet::default()),
        end_anchor: NodeRef::new(),
    };
    on_cleanup(move || handles.timers.update_value(TimerSet::cancel_all));

    let flow = handles.flow;
    let sections = Memo::new(move |_| flow.with(FlowController::sections));
    let show = move |pick: fn(&Sections) -> bool| move || sections.with(pick);

    view! {
        <div class="experiment-page">
            <Hero/>
            <main class="experiment-page__main">
                <RevealBox title="Methodology / Initialization">
                    <div class="methodology">
                        <p class="methodology__lead">"Model initialization in progress..."</p>
                        <div class="methodology__dots">
                            <span class="pulse-dot"></span>
                            <span class="pulse-dot pulse-dot--delay-1"></span>
                            <span class="pulse-dot pulse-dot--delay-2"></span>
                        </div>
                        <p class="methodology__note">"Loading emotive parameters..."</p>
                    </div>
                </RevealBox>

                <RevealBox title="Input Features (X)">
                    <ul class="feature-list">
                        {INPUT_FEATURES
                            .into_iter()
                            .map(|(symbol, label)| {
                                view! {
                                    <li class="feature-list__item">
                                        <span class="feature-list__symbol">{symbol}</span>
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </RevealBox>

                <RevealBox title="Hypothesis Testing">
                    <div class="hypotheses">
                        <div class="hypothesis">
                            <h4 class="hypothesis__label">"Null Hypothesis (H₀)"</h4>
                            <p class="hypothesis__text">
                                "You and I remain " <span class="hypothesis__just">"just"</span> " friends."
                            </p>
                            <p class="hypothesis__status">"Status Quo"</p>
                        </div>
                        <div class="hypothesis hypothesis--alternative">
                            <h4 class="hypothesis__label">"Alternative Hypothesis (H₁)"</h4>
                            <p class="hypothesis__text">
                                "Asking you to be my Valentine significantly increases the happiness factor."
                            </p>
                            <p class="hypothesis__status">"Projected Outcome: Optimal"</p>
                        </div>
                    </div>
                </RevealBox>

                <Motion
                    class="calculation"
                    initial=VisualState::hidden()
                    trigger=MotionTrigger::InView { margin_px: 0 }
                >
                    <Show when=show(|s| s.calculate_control)>
                        <CalculateButton handles=handles/>
                    </Show>
                    <Show when=show(|s| s.result_card)>
                        <ResultCard flow=flow/>
                    </Show>
                </Motion>

                <Show when=show(|s| s.conclusion)>
                    <Conclusion handles=handles/>
                </Show>

                <Show when=show(|s| s.success)>
                    <Success handles=handles/>
                </Show>

                <div class="experiment-page__end" node_ref=handles.end_anchor></div>
            </main>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <Motion initial=VisualState::hidden().offset_y(-20.0) transition=Transition::new(800)>
                <div class="hero__badge">"Research Paper No. 143"</div>
                <h1 class="hero__title">"A Small Statistical Experiment"</h1>
                <p class="hero__subtitle">"Subject: " <span class="hero__subject">"Us"</span></p>
                <Motion
                    class="hero__chevron"
                    initial=VisualState::hidden()
                    transition=Transition::new(1000).delayed(1500)
                >
                    <IconGlyph icon=Icon::ChevronDown class="icon--bounce"/>
                </Motion>
            </Motion>
        </header>
    }
}

#[component]
fn CalculateButton(handles: PageHandles) -> impl IntoView {
    let flow = handles.flow;
    let pending = Signal::derive(move || flow.with(FlowController::is_calculating));
    let label = move || flow.with(|f| calculate_label(f.state()));

    view! {
        <Button
            size=ButtonSize::Large
            class="calculate-button"
            disabled=pending
            on_click=Callback::new(move |()| {
                if !pending.get_untracked() {
                    dispatch(handles, FlowEvent::Calculate);
                }
            })
        >
            <span class="calculate-button__inner">
                {move || {
                    if pending.get() {
                        view! { <span class="spinner">"⟳"</span> }.into_any()
                    } else {
                        view! { <IconGlyph icon=Icon::Calculator/> }.into_any()
                    }
                }}
                {label}
            </span>
        </Button>
    }
}

#[component]
fn ResultCard(flow: RwSignal<FlowController>) -> impl IntoView {
    let p_value = move || flow.with(FlowController::p_value);

    view! {
        <Motion initial=VisualState::hidden().scaled(0.8)>
            <Card class="result-card">
                <div class="result-card__badge">
                    <IconGlyph icon=Icon::Beaker/>
                </div>
                <div class="result-card__label">"Result Obtained"</div>
                <div class="result-card__value">{move || p_value().map(format_p_value)}</div>
                <p class="result-card__note">{move || p_value().map(significance_note)}</p>
            </Card>
        </Motion>
    }
}

#[component]
fn Conclusion(handles: PageHandles) -> impl IntoView {
    view! {
        <Motion class="conclusion" initial=VisualState::hidden().offset_y(40.0)>
            <div class="conclusion__text">
                <h2 class="conclusion__title">"Conclusion: Reject H₀"</h2>
                <p class="conclusion__lead">
                    "The data strongly supports H₁." <br/> "Will you validate the findings?"
                </p>
            </div>
            <div class="conclusion__actions">
                <Button
                    variant=ButtonVariant::Outline
                    class="decline-button"
                    on_click=Callback::new(move |()| dispatch(handles, FlowEvent::Decline))
                >
                    "No"
                </Button>
                <Button
                    size=ButtonSize::Large
                    class="accept-button"
                    on_click=Callback::new(move |()| dispatch(handles, FlowEvent::Accept))
                >
                    "Yes, Validate Results"
                </Button>
            </div>
        </Motion>
    }
}

#[component]
fn Success(handles: PageHandles) -> impl IntoView {
    let flow = handles.flow;
    let contact_visible = Signal::derive(move || flow.with(FlowController::contact_visible));

    view! {
        <Motion class="success" initial=VisualState::hidden().scaled(0.9)>
            <div class="success__panel">
                <div class="success__heart">
                    <IconGlyph icon=Icon::Heart class="icon--filled"/>
                </div>
                <h2 class="success__title">"Experiment Successful"</h2>
                <p class="success__lead">"Results validated. Happiness factor increasing exponentially."</p>
            </div>
            <ContactPanel
                visible=contact_visible
                on_reveal=Callback::new(move |()| dispatch(handles, FlowEvent::RevealContact))
            />
        </Motion>
    }
}
