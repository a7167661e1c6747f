//! The pixel buffer and the WS2812 transmission device.
//!
//! [`Frame`] is the in-memory pixel buffer the patterns render into: plain
//! logical RGB, index 0 at the start of the strip. On hardware, [`LedStrip`]
//! owns the PIO WS2812 driver in a background task and serializes frame
//! transmissions over it; the driver's color-order parameter fixes the wire
//! channel order (GRB for WS2812B) per build, so no runtime reordering
//! happens anywhere.
//!
//! This build drives one fixed strip geometry: [`STRIP_LEN`] pixels on
//! GPIO 28, PIO0 state machine 0.

use core::ops::{Deref, DerefMut};

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used by LED strip frames.
pub use smart_leds::RGB8;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Number of pixels on the strip this build is wired for.
pub const STRIP_LEN: usize = 100;

// ============================================================================
// Frame - the pixel buffer
// ============================================================================

/// [`Rgb`] pixel data for the whole strip: one slot per pixel, index 0..N-1
/// in physical order.
///
/// Frames deref to `[Rgb; N]`, so patterns mutate pixels directly (slice
/// `fill` covers whole-buffer writes). The buffer is owned by the dispatcher
/// for its whole life; the button side never touches it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame<N> {
    /// Number of pixels in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame<N>> for [Rgb; N] {
    fn from(frame: Frame<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// LedStrip - the transmission device (hardware only)
// ============================================================================

#[cfg(not(feature = "host"))]
mod strip {
    use embassy_executor::Spawner;
    use embassy_rp::Peri;
    use embassy_rp::bind_interrupts;
    use embassy_rp::peripherals::{DMA_CH0, PIN_28, PIO0};
    use embassy_rp::pio::{InterruptHandler, Pio};
    use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::signal::Signal;
    use portable_atomic::{AtomicBool, Ordering};
    use static_cell::StaticCell;

    use super::{Frame, STRIP_LEN};
    use crate::{Error, Result};

    bind_interrupts!(struct Irqs {
        PIO0_IRQ_0 => InterruptHandler<PIO0>;
    });

    type FrameSignal = Signal<CriticalSectionRawMutex, Frame<STRIP_LEN>>;
    type CompletionSignal = Signal<CriticalSectionRawMutex, ()>;

    static FRAME_SIGNAL: FrameSignal = Signal::new();
    static COMPLETION_SIGNAL: CompletionSignal = Signal::new();
    static STRIP_CLAIMED: AtomicBool = AtomicBool::new(false);
    static STRIP_CELL: StaticCell<LedStrip> = StaticCell::new();

    /// Handle to the single WS2812 strip of this build.
    ///
    /// The PIO driver lives in a background task; this handle hands frames
    /// to it one at a time. The transmission line is a single shared
    /// physical resource, so at most one frame is ever in flight.
    pub struct LedStrip {
        frame_signal: &'static FrameSignal,
        completion_signal: &'static CompletionSignal,
    }

    impl LedStrip {
        /// Claims the strip's pin, PIO, and DMA channel and spawns the
        /// transmission task.
        ///
        /// # Errors
        ///
        /// [`Error::StripClaimed`] on a second claim, [`Error::TaskSpawn`]
        /// if the executor refuses the task. Either way the strip must not
        /// be driven; this is a fatal startup condition.
        pub fn new(
            pin: Peri<'static, PIN_28>,
            pio: Peri<'static, PIO0>,
            dma: Peri<'static, DMA_CH0>,
            spawner: Spawner,
        ) -> Result<&'static Self> {
            if STRIP_CLAIMED.swap(true, Ordering::AcqRel) {
                return Err(Error::StripClaimed);
            }
            spawner
                .spawn(strip_task(pin, pio, dma))
                .map_err(Error::TaskSpawn)?;
            Ok(STRIP_CELL.init(Self {
                frame_signal: &FRAME_SIGNAL,
                completion_signal: &COMPLETION_SIGNAL,
            }))
        }

        /// Transmits a full frame to the strip, returning once it has been
        /// queued on the wire.
        ///
        /// Call once per animation frame; the call takes time roughly
        /// proportional to the pixel count.
        pub async fn write_frame(&self, frame: Frame<STRIP_LEN>) {
            self.frame_signal.signal(frame);
            self.completion_signal.wait().await;
        }

        /// Turns every pixel off.
        pub async fn clear(&self) {
            self.write_frame(Frame::new()).await;
        }
    }

    #[embassy_executor::task]
    async fn strip_task(
        pin: Peri<'static, PIN_28>,
        pio: Peri<'static, PIO0>,
        dma: Peri<'static, DMA_CH0>,
    ) -> ! {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, Irqs);
        let program = PioWs2812Program::new(&mut common);
        let mut driver = PioWs2812::new(&mut common, sm0, dma, pin, &program);
        defmt::info!("WS2812 strip up: {} pixels on GPIO 28", STRIP_LEN);

        loop {
            let frame = FRAME_SIGNAL.wait().await;
            driver.write(&frame).await;
            COMPLETION_SIGNAL.signal(());
        }
    }
}

#[cfg(not(feature = "host"))]
pub use strip::LedStrip;
