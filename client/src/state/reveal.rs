//! Click-to-reveal gate backing each reveal block.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Local state of one reveal block. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealGate {
    gated: bool,
    state: RevealState,
}

impl RevealGate {
    /// A gated block starts hidden; an ungated one is revealed from the start.
    pub fn new(gated: bool) -> Self {
        let state = if gated { RevealState::Hidden } else { RevealState::Revealed };
        Self { gated, state }
    }

    /// Handle a click. Returns `true` only when this click revealed the block.
    pub fn click(&mut self) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Whether the block should still invite a click.
    pub fn awaits_click(&self) -> bool {
        self.gated && !self.is_revealed()
    }
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new(true)
    }
}
