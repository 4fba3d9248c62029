//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they own at most their own local signals and
//! receive everything page-level through props.

pub mod button;
pub mod card;
pub mod contact_panel;
pub mod icons;
pub mod motion;
pub mod reveal_box;
