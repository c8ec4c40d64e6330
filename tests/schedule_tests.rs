// Host-side tests for the animation-loop bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod schedule {
    include!("../src/core/schedule.rs");
}

use schedule::*;

#[test]
fn fresh_loop_is_running() {
    assert!(LoopState::default().is_running());
}

#[test]
fn normal_tick_reschedules() {
    let mut s = LoopState::default();
    s.set_pending(Some(7));
    assert!(s.begin_tick());
    assert_eq!(s.end_tick(), TickEnd::Reschedule);
    assert!(s.is_running());
}

#[test]
fn stop_between_frames_cancels_pending_request() {
    let mut s = LoopState::default();
    s.set_pending(Some(42));
    assert_eq!(s.stop(), StopAction::CancelAndRelease(42));
    assert!(!s.is_running());
}

#[test]
fn stop_with_nothing_pending_releases_immediately() {
    let mut s = LoopState::default();
    assert_eq!(s.stop(), StopAction::Release);
}

#[test]
fn stop_inside_tick_defers_release_to_tick_end() {
    let mut s = LoopState::default();
    s.set_pending(Some(3));
    assert!(s.begin_tick());
    // frame body calls stop()
    assert_eq!(s.stop(), StopAction::ReleaseAfterTick);
    assert_eq!(s.end_tick(), TickEnd::Release);
}

#[test]
fn second_stop_is_a_no_op() {
    let mut s = LoopState::default();
    s.set_pending(Some(1));
    assert_eq!(s.stop(), StopAction::CancelAndRelease(1));
    assert_eq!(s.stop(), StopAction::None);
}

#[test]
fn tick_after_stop_skips_frame_body() {
    let mut s = LoopState::default();
    s.set_pending(Some(9));
    _ = s.stop();
    assert!(!s.begin_tick());
}
