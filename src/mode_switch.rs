//! The mode register and the button edge latch that feeds it.
//!
//! A [`ModeSwitch`] lives in a `static` and is shared between exactly two
//! contexts: the button task (the interrupt side), which is the only writer
//! of the press latch and the only setter of the advance flag, and the
//! dispatcher (the main side), which is the only consumer. Each field has a
//! single writer context, so plain atomic loads and stores are all the
//! synchronization needed - adding a second writer to any field would break
//! this invariant.

use portable_atomic::{AtomicBool, AtomicUsize, Ordering};

// ============================================================================
// Edge - logical button transitions
// ============================================================================

/// A logical button transition.
///
/// `Rising` is the button becoming pressed, `Falling` is it being released,
/// regardless of which electrical level the wiring maps a press to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum Edge {
    /// The button went from released to pressed.
    Rising,
    /// The button went from pressed to released.
    Falling,
}

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the mode button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with
    /// pull-down resistors that can cause pins to stay HIGH after button
    /// release. Use ToGround instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    /// Recommended for Pico 2 due to pull-down resistor bug.
    Ground,
}

// ============================================================================
// ModeSwitch - the mode register
// ============================================================================

/// Process-wide mode register: the selected pattern index plus the
/// edge-triggered advance latch.
///
/// Const-constructible so it can live in a `static` and be passed by
/// reference into both the button task and the dispatcher.
///
/// # Example
///
/// ```rust
/// use strip_cycler::mode_switch::{Edge, ModeSwitch};
/// use strip_cycler::patterns::MODE_COUNT;
///
/// static MODE_SWITCH: ModeSwitch = ModeSwitch::new(MODE_COUNT);
///
/// // One complete press cycle...
/// MODE_SWITCH.on_edge(Edge::Rising);
/// MODE_SWITCH.on_edge(Edge::Falling);
///
/// // ...advances the mode and latches exactly one advance event.
/// assert_eq!(MODE_SWITCH.pattern_index(), 1);
/// assert!(MODE_SWITCH.poll_and_clear_advance());
/// assert!(!MODE_SWITCH.poll_and_clear_advance());
/// ```
#[derive(Debug)]
pub struct ModeSwitch {
    /// Currently selected pattern, always in `[0, mode_count)`.
    pattern_index: AtomicUsize,
    /// True between a press and its matching release. Makes the advance
    /// atomic per physical press: extra edges from contact bounce during one
    /// press are ignored.
    press_active: AtomicBool,
    /// Set once per completed press cycle; cleared exactly once by
    /// [`poll_and_clear_advance`](Self::poll_and_clear_advance).
    advance_pending: AtomicBool,
    mode_count: usize,
}

impl ModeSwitch {
    /// Creates a mode register cycling through `mode_count` patterns,
    /// starting at index 0.
    #[must_use]
    pub const fn new(mode_count: usize) -> Self {
        Self {
            pattern_index: AtomicUsize::new(0),
            press_active: AtomicBool::new(false),
            advance_pending: AtomicBool::new(false),
            mode_count,
        }
    }

    /// Feeds one logical button transition into the latch.
    ///
    /// A rising edge opens a press cycle; the matching falling edge closes
    /// it, advancing the pattern index modulo the mode count and latching an
    /// advance event. A falling edge with no open press (noise with no
    /// matching rise) is ignored, as is a second rising edge while a press
    /// is already open (bounce before the matching release).
    ///
    /// Bounded and non-blocking; safe to call from interrupt context.
    pub fn on_edge(&self, edge: Edge) {
        match edge {
            Edge::Rising => {
                if !self.press_active.load(Ordering::Relaxed) {
                    self.press_active.store(true, Ordering::Relaxed);
                }
            }
            Edge::Falling => {
                if self.press_active.load(Ordering::Relaxed) {
                    let next = (self.pattern_index.load(Ordering::Relaxed) + 1) % self.mode_count;
                    self.pattern_index.store(next, Ordering::Relaxed);
                    self.advance_pending.store(true, Ordering::Release);
                    self.press_active.store(false, Ordering::Relaxed);
                }
            }
        }
    }

    /// Consumes a pending advance event, if any.
    ///
    /// This is the single consumption point: each completed press cycle
    /// yields exactly one `true`, and a second call with no intervening
    /// press returns `false`.
    #[must_use]
    pub fn poll_and_clear_advance(&self) -> bool {
        if self.advance_pending.load(Ordering::Acquire) {
            self.advance_pending.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Returns the currently selected pattern index.
    ///
    /// Reading the index does not consume the advance event.
    #[must_use]
    pub fn pattern_index(&self) -> usize {
        self.pattern_index.load(Ordering::Relaxed)
    }

    /// Number of modes this register cycles through.
    #[must_use]
    pub const fn mode_count(&self) -> usize {
        self.mode_count
    }
}

// ============================================================================
// Mode button task (hardware only)
// ============================================================================

#[cfg(not(feature = "host"))]
mod button_task {
    use embassy_rp::gpio::Input;

    use super::{Edge, ModeSwitch, PressedTo};

    fn is_pressed(input: &Input<'static>, pressed_to: PressedTo) -> bool {
        match pressed_to {
            PressedTo::Voltage => input.is_high(),
            PressedTo::Ground => input.is_low(),
        }
    }

    /// Background task watching the mode button and feeding the latch.
    ///
    /// Waits on the pin's edge interrupts, maps each level change through
    /// the wiring to a logical [`Edge`], and calls
    /// [`ModeSwitch::on_edge`]. There is no timing debounce here: the press
    /// latch inside [`ModeSwitch`] is the bounce guard.
    ///
    /// The caller builds the `Input` with the pull matching `pressed_to`
    /// ([`Pull::Up`](embassy_rp::gpio::Pull::Up) for [`PressedTo::Ground`],
    /// [`Pull::Down`](embassy_rp::gpio::Pull::Down) for
    /// [`PressedTo::Voltage`]).
    #[embassy_executor::task]
    pub async fn mode_button_task(
        mut input: Input<'static>,
        pressed_to: PressedTo,
        mode_switch: &'static ModeSwitch,
    ) -> ! {
        loop {
            input.wait_for_any_edge().await;
            let edge = if is_pressed(&input, pressed_to) {
                Edge::Rising
            } else {
                Edge::Falling
            };
            mode_switch.on_edge(edge);
        }
    }
}

#[cfg(not(feature = "host"))]
pub use button_task::mode_button_task;
