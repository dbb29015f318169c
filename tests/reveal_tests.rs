// Host-side tests for one-shot fade-in bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn reveal_fires_exactly_once_per_element() {
    let mut tracker = RevealTracker::new(1, 0.1);
    let events = [true, false, true, false, true];
    let fired = events
        .iter()
        .filter(|&&visible| tracker.on_intersection(0, visible))
        .count();
    assert_eq!(fired, 1);
    assert!(tracker.is_revealed(0));
}

#[test]
fn hidden_notifications_never_reveal() {
    let mut tracker = RevealTracker::new(2, 0.1);
    assert!(!tracker.on_intersection(0, false));
    assert!(!tracker.on_intersection(1, false));
    assert_eq!(tracker.pending(), 2);
}

#[test]
fn elements_are_tracked_independently() {
    let mut tracker = RevealTracker::new(3, 0.1);
    assert!(tracker.on_intersection(2, true));
    assert!(!tracker.is_revealed(0));
    assert!(tracker.on_intersection(0, true));
    assert!(!tracker.on_intersection(2, true));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::new(1, 0.1);
    assert!(!tracker.on_intersection(5, true));
    assert!(!tracker.is_revealed(5));
}

#[test]
fn empty_set_is_a_no_op() {
    let tracker = RevealTracker::new(0, 0.1);
    assert!(tracker.is_empty());
    assert_eq!(tracker.pending(), 0);
}

#[test]
fn threshold_is_clamped_to_unit_range() {
    assert_eq!(RevealTracker::new(1, 1.5).threshold(), 1.0);
    assert_eq!(RevealTracker::new(1, -0.2).threshold(), 0.0);
    assert_eq!(RevealTracker::new(1, 0.1).threshold(), 0.1);
}
