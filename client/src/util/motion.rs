//! Enter transitions expressed as inline CSS.
//!
//! DESIGN
//! ======
//! A transition is declared as a pair of visual states plus timing. Before the
//! trigger fires the element renders the `from` state; afterwards it renders
//! the `to` state with a CSS `transition` so the browser interpolates between
//! them. Server rendering always emits the `from` state.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Subset of an element's appearance that transitions animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    /// Vertical offset in pixels; positive moves the element down.
    pub offset_y_px: f64,
    pub scale: f64,
}

impl VisualState {
    /// Fully opaque, in place, unscaled.
    pub const SETTLED: Self = Self { opacity: 1.0, offset_y_px: 0.0, scale: 1.0 };

    /// Transparent, otherwise settled.
    pub const fn hidden() -> Self {
        Self { opacity: 0.0, ..Self::SETTLED }
    }

    pub const fn offset_y(self, offset_y_px: f64) -> Self {
        Self { offset_y_px, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Inline style declarations for this state.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            trim_float(self.opacity),
            trim_float(self.offset_y_px),
            trim_float(self.scale),
        )
    }
}

/// Timing of a transition, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(300)
    }
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Self { duration_ms, delay_ms: 0 }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn css(&self) -> String {
        let Self { duration_ms, delay_ms } = *self;
        format!(
            "transition: opacity {duration_ms}ms ease-out {delay_ms}ms, transform {duration_ms}ms ease-out {delay_ms}ms;"
        )
    }
}

/// Style for an element transitioning `from` -> `to`, depending on whether
/// its trigger has fired.
pub fn motion_style(from: VisualState, to: VisualState, transition: Transition, entered: bool) -> String {
    if entered {
        format!("{} {}", to.css(), transition.css())
    } else {
        from.css()
    }
}

fn trim_float(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_owned() } else { text.to_owned() }
}
