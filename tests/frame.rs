#![allow(missing_docs)]
use strip_cycler::led_strip::{Frame, Rgb, STRIP_LEN, colors};

#[test]
fn new_frame_is_black() {
    let frame = Frame::<8>::new();

    assert_eq!(Frame::<8>::LEN, 8);
    assert!(frame.iter().all(|pixel| *pixel == colors::BLACK));
}

#[test]
fn filled_frame_repeats_the_color() {
    let frame = Frame::<8>::filled(colors::ORANGE);

    assert!(frame.iter().all(|pixel| *pixel == colors::ORANGE));
}

#[test]
fn pixels_are_indexable_through_deref() {
    let mut frame = Frame::<8>::new();

    frame[0] = colors::RED;
    frame[7] = Rgb::new(1, 2, 3);
    frame[1..4].fill(colors::GREEN);

    assert_eq!(frame[0], colors::RED);
    assert_eq!(frame[2], colors::GREEN);
    assert_eq!(frame[7], Rgb::new(1, 2, 3));
    assert_eq!(frame[4], colors::BLACK);
}

#[test]
fn frame_round_trips_through_array() {
    let array = [Rgb::new(9, 8, 7); 4];

    let frame = Frame::from(array);
    let back: [Rgb; 4] = frame.into();

    assert_eq!(back, array);
}

#[test]
fn default_matches_new() {
    assert_eq!(Frame::<STRIP_LEN>::default(), Frame::<STRIP_LEN>::new());
}
