#![allow(missing_docs)]
use strip_cycler::mode_switch::{Edge, ModeSwitch};
use strip_cycler::patterns::MODE_COUNT;

#[test]
fn press_cycle_advances_and_latches_one_event() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);

    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Falling);

    assert_eq!(mode_switch.pattern_index(), 1);
    assert!(mode_switch.poll_and_clear_advance());
    assert!(!mode_switch.poll_and_clear_advance());
}

#[test]
fn falling_edge_without_press_is_ignored() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);

    mode_switch.on_edge(Edge::Falling);

    assert_eq!(mode_switch.pattern_index(), 0);
    assert!(!mode_switch.poll_and_clear_advance());
}

#[test]
fn bounce_during_one_press_advances_once() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);

    // Contact bounce: extra rising edges while the press is already open.
    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Falling);

    assert_eq!(mode_switch.pattern_index(), 1);
    assert!(mode_switch.poll_and_clear_advance());
    assert!(!mode_switch.poll_and_clear_advance());
}

#[test]
fn index_wraps_at_mode_count() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);

    for _ in 0..MODE_COUNT {
        mode_switch.on_edge(Edge::Rising);
        mode_switch.on_edge(Edge::Falling);
    }

    assert_eq!(mode_switch.pattern_index(), 0);
}

#[test]
fn index_stays_in_range_for_every_count() {
    for mode_count in 1..=8 {
        let mode_switch = ModeSwitch::new(mode_count);
        for _ in 0..(3 * mode_count) {
            mode_switch.on_edge(Edge::Rising);
            mode_switch.on_edge(Edge::Falling);
            assert!(mode_switch.pattern_index() < mode_count);
        }
    }
}

#[test]
fn reading_index_does_not_consume_event() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);

    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Falling);

    assert_eq!(mode_switch.pattern_index(), 1);
    assert_eq!(mode_switch.pattern_index(), 1);
    assert!(mode_switch.poll_and_clear_advance());
}

#[test]
fn events_from_separate_presses_coalesce() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);

    // Two full press cycles before the dispatcher gets around to polling:
    // the index moved twice but only one advance event is pending.
    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Falling);
    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Falling);

    assert_eq!(mode_switch.pattern_index(), 2);
    assert!(mode_switch.poll_and_clear_advance());
    assert!(!mode_switch.poll_and_clear_advance());
}
