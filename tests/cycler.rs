#![allow(missing_docs)]
use embassy_time::Duration;
use strip_cycler::cycler::Cycler;
use strip_cycler::led_strip::{Rgb, STRIP_LEN};
use strip_cycler::mode_switch::{Edge, ModeSwitch};
use strip_cycler::patterns::MODE_COUNT;

fn press(mode_switch: &ModeSwitch) {
    mode_switch.on_edge(Edge::Rising);
    mode_switch.on_edge(Edge::Falling);
}

#[test]
fn starts_in_mode_zero() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    let (frame, wait) = cycler.next_frame();

    assert_eq!(cycler.active_mode(), 0);
    assert_eq!(wait, Duration::from_millis(100));
    assert_eq!(frame[0], Rgb::new(31, 0, 0));
    assert_eq!(frame[1], Rgb::new(0, 31, 0));
}

#[test]
fn press_switches_pattern_on_the_next_frame() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    cycler.next_frame();
    press(&mode_switch);
    let (frame, wait) = cycler.next_frame();

    // Mode 1 is the slow fade: its first frame, not a leftover walk frame.
    assert_eq!(cycler.active_mode(), 1);
    assert_eq!(wait, Duration::from_millis(12));
    assert_eq!(frame[0], Rgb::new(31, 0, 15));
}

#[test]
fn frames_are_never_torn_across_a_switch() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    cycler.next_frame();
    press(&mode_switch);
    let (frame, _) = cycler.next_frame();

    // Every pixel belongs to the new pattern: a fade frame is uniform.
    let first = frame[0];
    assert!(frame.iter().all(|pixel| *pixel == first));
}

#[test]
fn without_a_press_the_pattern_keeps_running() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    let (first, _) = cycler.next_frame();
    let (second, _) = cycler.next_frame();

    assert_eq!(cycler.active_mode(), 0);
    // The walk rotated one phase slot between the frames.
    assert_eq!(second[0], first[1]);
    assert_eq!(second[1], first[2]);
}

#[test]
fn advance_is_consumed_exactly_once() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    press(&mode_switch);
    let (first, _) = cycler.next_frame();
    let (second, _) = cycler.next_frame();

    // The second frame continues the fade instead of restarting it.
    assert_eq!(cycler.active_mode(), 1);
    assert_eq!(first[0], Rgb::new(31, 0, 15));
    assert_eq!(second[0], Rgb::new(31, 0, 16));
}

#[test]
fn switching_restarts_the_pattern_from_its_initial_state() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    // Run the walk off its initial phase, then go once around the mode
    // table back to it.
    cycler.next_frame();
    cycler.next_frame();
    for _ in 0..MODE_COUNT - 1 {
        press(&mode_switch);
        cycler.next_frame();
    }
    press(&mode_switch);
    let (frame, _) = cycler.next_frame();

    // Fresh walk at phase zero, not the phase it was left at.
    assert_eq!(cycler.active_mode(), 0);
    assert_eq!(frame[0], Rgb::new(31, 0, 0));
    assert_eq!(frame[1], Rgb::new(0, 31, 0));
}

#[test]
fn presses_between_frames_coalesce_to_the_latest_mode() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    press(&mode_switch);
    press(&mode_switch);
    press(&mode_switch);
    let (_, wait) = cycler.next_frame();

    // Three presses before one frame land directly on mode 3.
    assert_eq!(cycler.active_mode(), 3);
    assert_eq!(wait, Duration::from_millis(12));

    // A fourth full cycle moves on to mode 4; a press with no release
    // changes nothing.
    press(&mode_switch);
    cycler.next_frame();
    assert_eq!(cycler.active_mode(), 4);

    mode_switch.on_edge(Edge::Rising);
    cycler.next_frame();
    assert_eq!(cycler.active_mode(), 4);
}

#[test]
fn all_six_modes_are_reachable() {
    let mode_switch = ModeSwitch::new(MODE_COUNT);
    let mut cycler: Cycler<'_, STRIP_LEN> = Cycler::new(&mode_switch);

    let mut seen = Vec::new();
    for _ in 0..MODE_COUNT {
        cycler.next_frame();
        seen.push(cycler.active_mode());
        press(&mode_switch);
    }
    cycler.next_frame();
    seen.push(cycler.active_mode());

    assert_eq!(seen, [0, 1, 2, 3, 4, 5, 0]);
}
