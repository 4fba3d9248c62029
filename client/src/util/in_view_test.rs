use super::*;

#[test]
fn mount_waits_for_a_rendered_frame_before_settling() {
    let mut countdown = FrameCountdown::new(MOUNT_SETTLE_FRAMES);
    assert!(!countdown.is_done());
    assert!(!countdown.tick(), "first frame only computes the initial style");
    assert!(countdown.tick());
    assert!(countdown.is_done());
}

#[test]
fn countdown_stays_done_after_extra_frames() {
    let mut countdown = FrameCountdown::new(1);
    assert!(countdown.tick());
    assert!(countdown.tick());
    assert!(countdown.is_done());
}

#[test]
fn zero_frame_countdown_starts_done() {
    let mut countdown = FrameCountdown::new(0);
    assert!(countdown.is_done());
    assert!(countdown.tick());
}

#[test]
fn server_render_keeps_initial_state() {
    assert!(!use_mounted().get_untracked());
}
