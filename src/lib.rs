//! Button-cycled animation patterns for NeoPixel-style (WS2812) LED strips on
//! the Pico 1 and 2.
//!
//! A push button steps through a fixed table of six animation modes; the
//! active pattern renders one frame at a time into a [`Frame`](led_strip::Frame)
//! and hands it to a PIO-driven WS2812 strip. The pattern engine itself is
//! synchronous and hardware-free, so the whole mode state machine runs under
//! `cargo test --features host` on the development machine.
//!
//! # Glossary
//!
//! - **Strip**: the physical ordered sequence of addressable LEDs.
//! - **Frame**: one complete set of color values for every pixel, written to
//!   the strip in a single transmission.
//! - **Pattern**: one self-contained animation algorithm, selected by mode
//!   index. See [`patterns`].
//! - **Press cycle**: a button press followed by its matching release. Each
//!   complete cycle advances the mode by one. See [`mode_switch`].
//! - **Advance event**: the one-shot signal a completed press cycle leaves in
//!   the [`ModeSwitch`](mode_switch::ModeSwitch), telling the dispatcher to
//!   drop the active pattern and re-select.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: hardware builds need the ARM runtime
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature for hardware builds");

pub mod cycler;
mod error;
pub mod led_strip;
pub mod mode_switch;
pub mod patterns;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
