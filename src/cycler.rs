//! The dispatcher: selects the active pattern and drives it frame by frame.
//!
//! [`Cycler`] is the synchronous core - it owns the pixel buffer and the
//! active [`Pattern`], consumes advance events from the [`ModeSwitch`], and
//! produces one frame at a time. It has no notion of hardware or real time,
//! so host tests drive it tick by tick. [`run`] is the thin frame-scheduling
//! loop that pairs it with the real strip and timer on hardware.

use embassy_time::Duration;

use crate::led_strip::Frame;
use crate::mode_switch::ModeSwitch;
use crate::patterns::Pattern;

/// The mode dispatcher and frame generator.
///
/// Each advance event discards the active pattern and builds a fresh one
/// from the mode register's current index - no animation state survives a
/// re-dispatch. The advance check happens before any rendering, so an
/// emitted frame is always entirely the old pattern's or entirely the new
/// one's, never torn.
#[derive(Debug)]
pub struct Cycler<'a, const N: usize> {
    mode_switch: &'a ModeSwitch,
    pattern: Pattern,
    active_mode: usize,
    frame: Frame<N>,
}

impl<'a, const N: usize> Cycler<'a, N> {
    /// Creates a dispatcher serving the mode register's current selection.
    #[must_use]
    pub fn new(mode_switch: &'a ModeSwitch) -> Self {
        let active_mode = mode_switch.pattern_index();
        Self {
            mode_switch,
            pattern: Pattern::for_mode(active_mode),
            active_mode,
            frame: Frame::new(),
        }
    }

    /// Produces the next frame and the delay to hold it.
    ///
    /// Consumes a pending advance event first, if any, re-selecting the
    /// pattern from the mode register before rendering; the frame returned
    /// is then the new pattern's first. The worst-case latency from a press
    /// cycle to its effect on the strip is one inter-frame delay.
    pub fn next_frame(&mut self) -> (Frame<N>, Duration) {
        if self.mode_switch.poll_and_clear_advance() {
            self.active_mode = self.mode_switch.pattern_index();
            self.pattern = Pattern::for_mode(self.active_mode);
        }
        let wait = self.pattern.render(&mut self.frame);
        (self.frame, wait)
    }

    /// The mode index the active pattern was built from.
    #[must_use]
    pub const fn active_mode(&self) -> usize {
        self.active_mode
    }
}

// ============================================================================
// Frame-scheduling loop (hardware only)
// ============================================================================

#[cfg(not(feature = "host"))]
mod run_loop {
    use embassy_time::Timer;

    use super::Cycler;
    use crate::led_strip::{LedStrip, STRIP_LEN};

    /// Drives the dispatcher against the real strip, forever.
    ///
    /// One iteration per frame: render, transmit, sleep for the pattern's
    /// inter-frame delay. The advance flag is re-checked on every frame
    /// inside [`Cycler::next_frame`], so a mode switch takes effect within
    /// one frame delay.
    pub async fn run(mut cycler: Cycler<'_, STRIP_LEN>, strip: &LedStrip) -> ! {
        let mut logged_mode = cycler.active_mode();
        defmt::info!("led pattern {}", logged_mode);
        loop {
            let (frame, wait) = cycler.next_frame();
            if cycler.active_mode() != logged_mode {
                logged_mode = cycler.active_mode();
                defmt::info!("led pattern {}", logged_mode);
            }
            strip.write_frame(frame).await;
            Timer::after(wait).await;
        }
    }
}

#[cfg(not(feature = "host"))]
pub use run_loop::run;
