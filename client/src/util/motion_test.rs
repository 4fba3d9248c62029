use super::*;

#[test]
fn settled_state_renders_identity_transform() {
    assert_eq!(VisualState::SETTLED.css(), "opacity: 1; transform: translateY(0px) scale(1);");
}

#[test]
fn builders_compose_offsets_and_scale() {
    let state = VisualState::hidden().offset_y(20.0).scaled(0.9);
    assert_eq!(state.opacity, 0.0);
    assert_eq!(state.css(), "opacity: 0; transform: translateY(20px) scale(0.9);");
    assert_eq!(VisualState::hidden().offset_y(-20.0).css(), "opacity: 0; transform: translateY(-20px) scale(1);");
}

#[test]
fn transition_css_carries_duration_and_delay() {
    let transition = Transition::new(600).delayed(150);
    assert_eq!(
        transition.css(),
        "transition: opacity 600ms ease-out 150ms, transform 600ms ease-out 150ms;"
    );
    assert_eq!(Transition::default(), Transition { duration_ms: 300, delay_ms: 0 });
}

#[test]
fn motion_style_holds_initial_state_until_entered() {
    let from = VisualState::hidden().offset_y(40.0);
    let style = motion_style(from, VisualState::SETTLED, Transition::new(500), false);
    assert_eq!(style, from.css());
    assert!(!style.contains("transition"));
}

#[test]
fn motion_style_targets_final_state_once_entered() {
    let style = motion_style(VisualState::hidden(), VisualState::SETTLED, Transition::new(800), true);
    assert!(style.starts_with("opacity: 1;"));
    assert!(style.contains("transition: opacity 800ms ease-out 0ms"));
}
