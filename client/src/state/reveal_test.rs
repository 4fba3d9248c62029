use super::*;

#[test]
fn gated_block_starts_hidden_and_awaits_click() {
    let gate = RevealGate::new(true);
    assert_eq!(gate, RevealGate { gated: true, state: RevealState::Hidden });
    assert!(!gate.is_revealed());
    assert!(gate.awaits_click());
    assert_eq!(RevealGate::default(), gate);
}

#[test]
fn click_reveals_once() {
    let mut gate = RevealGate::new(true);
    assert!(gate.click());
    assert!(gate.is_revealed());
    assert!(!gate.awaits_click());
}

#[test]
fn further_clicks_keep_block_revealed() {
    let mut gate = RevealGate::new(true);
    gate.click();
    for _ in 0..3 {
        assert!(!gate.click());
        assert!(gate.is_revealed());
    }
}

#[test]
fn ungated_block_is_revealed_from_the_start() {
    let mut gate = RevealGate::new(false);
    assert!(gate.is_revealed());
    assert_eq!(gate, RevealGate { gated: false, state: RevealState::Revealed });
    assert!(!gate.awaits_click());
    assert!(!gate.click());
    assert!(gate.is_revealed());
}
