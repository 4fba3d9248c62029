//! Experiment flow: the page-level state machine.
//!
//! DESIGN
//! ======
//! `FlowController::apply` is the only way state changes. It returns the side
//! effects the view has to run (timers, scrolling, confetti) instead of running
//! them, which keeps every transition a pure function of `(state, event)`.
//! Events that do not match the current state are ignored, so a late timer or
//! a double click can never move the flow backwards or skip a stage.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::util::confetti::{BurstConfig, VALIDATION_BURST};

/// The "computed" p-value. It is a constant; nothing is calculated.
pub const RESULT_P_VALUE: f64 = 0.001;
/// Threshold below which a result is reported as significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
/// Simulated calculation time.
pub const CALCULATION_DELAY_MS: u32 = 2000;
/// Pause before scrolling so the newly shown section has been laid out.
pub const SCROLL_DELAY_MS: u32 = 100;

/// High-level stage of the page. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExperimentState {
    #[default]
    Initial,
    Calculating,
    Concluded,
    Accepted,
}

impl ExperimentState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Calculating => "calculating",
            Self::Concluded => "concluded",
            Self::Accepted => "accepted",
        }
    }
}

/// User actions and timer deliveries fed into the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// "Calculate Statistical Significance" clicked.
    Calculate,
    /// The calculation timer elapsed.
    CalculationFinished,
    /// The inert "No" button clicked.
    Decline,
    /// "Yes, Validate Results" clicked.
    Accept,
    /// "Report concerns or queries?" clicked.
    RevealContact,
}

/// Work the view performs after a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Deliver `event` back to the flow after `delay_ms`.
    Schedule { event: FlowEvent, delay_ms: u32 },
    /// Scroll the end-of-page anchor into view after `delay_ms`.
    ScrollToEnd { delay_ms: u32 },
    /// Play a confetti burst.
    Burst(BurstConfig),
}

/// Which page sections render for a given state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sections {
    pub calculate_control: bool,
    pub result_card: bool,
    pub conclusion: bool,
    pub success: bool,
}

/// Owns the experiment state and the flags that hang off it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowController {
    state: ExperimentState,
    p_value: Option<f64>,
    contact_visible: bool,
}

impl FlowController {
    pub fn state(&self) -> ExperimentState {
        self.state
    }

    pub fn p_value(&self) -> Option<f64> {
        self.p_value
    }

    /// Whether the calculate control is pending and must ignore clicks.
    pub fn is_calculating(&self) -> bool {
        self.state == ExperimentState::Calculating
    }

    pub fn contact_visible(&self) -> bool {
        self.contact_visible
    }

    /// Apply `event` and return the effects to run, in order.
    ///
    /// Events that are not valid in the current state leave it untouched and
    /// return no effects.
    pub fn apply(&mut self, event: FlowEvent) -> Vec<Effect> {
        use ExperimentState::{Accepted, Calculating, Concluded, Initial};

        match (self.state, event) {
            (Initial, FlowEvent::Calculate) => {
                self.state = Calculating;
                vec![Effect::Schedule { event: FlowEvent::CalculationFinished, delay_ms: CALCULATION_DELAY_MS }]
            }
            (Calculating, FlowEvent::CalculationFinished) => {
                self.state = Concluded;
                self.p_value = Some(RESULT_P_VALUE);
                vec![Effect::ScrollToEnd { delay_ms: SCROLL_DELAY_MS }]
            }
            (Concluded, FlowEvent::Accept) => {
                self.state = Accepted;
                vec![Effect::Burst(VALIDATION_BURST), Effect::ScrollToEnd { delay_ms: SCROLL_DELAY_MS }]
            }
            (Accepted, FlowEvent::RevealContact) => {
                self.contact_visible = true;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn sections(&self) -> Sections {
        visible_sections(self.state)
    }
}

/// Pure projection from state to rendered sections.
pub fn visible_sections(state: ExperimentState) -> Sections {
    use ExperimentState::{Accepted, Calculating, Concluded, Initial};

    Sections {
        calculate_control: matches!(state, Initial | Calculating),
        result_card: matches!(state, Concluded | Accepted),
        conclusion: state == Concluded,
        success: state == Accepted,
    }
}

/// Label of the calculate control.
pub fn calculate_label(state: ExperimentState) -> &'static str {
    if state == ExperimentState::Calculating {
        "Calculating p-value..."
    } else {
        "Calculate Statistical Significance"
    }
}

pub fn format_p_value(p_value: f64) -> String {
    format!("p = {p_value}")
}

pub fn is_significant(p_value: f64) -> bool {
    p_value < SIGNIFICANCE_LEVEL
}
