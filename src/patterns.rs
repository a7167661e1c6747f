//! The pattern library: four frame-by-frame animation generators.
//!
//! Every pattern follows one contract: [`render`](Pattern::render) writes one
//! complete frame into the caller's buffer, advances the pattern's own
//! animation counters, and returns the delay to hold that frame on the strip.
//! A pattern never sleeps and never touches hardware, so each one is a plain
//! resumable state machine that unit tests can drive tick by tick.
//!
//! Patterns are restartable, not resumable across selections: building a new
//! value starts from the pattern's fixed initial state. The dispatcher in
//! [`cycler`](crate::cycler) relies on this when it re-selects after an
//! advance event.

use embassy_time::Duration;

use crate::led_strip::{Frame, Rgb};

/// Number of entries in the mode table served by [`Pattern::for_mode`].
pub const MODE_COUNT: usize = 6;

/// Black, the off color.
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Derive a per-step frame delay from a total cycle period, rounding to the
/// nearest millisecond in fixed-point integer arithmetic.
///
/// Kept as integer math on purpose: the tick counts the patterns produce are
/// defined by this exact truncation and rounding behavior.
const fn frame_wait_ms(period_ms: u16, steps: u16) -> u16 {
    ((period_ms as u32 * 10 / steps as u32 + 5) / 10) as u16
}

// ============================================================================
// Walk - three colors walking along the strip
// ============================================================================

/// Red, green, and blue walking along the strip.
///
/// Pixels at position `i mod 3` carry one of three colors; every frame the
/// colors rotate one phase slot, so the tri-color sequence appears to march
/// down the strip.
#[derive(Clone, Debug)]
pub struct Walk {
    wait: Duration,
    phase: usize,
}

/// The walking colors, brightness-limited to the 0-31 range.
const WALK_COLORS: [Rgb; 3] = [
    Rgb::new(255 >> 3, 0, 0),
    Rgb::new(0, 255 >> 3, 0),
    Rgb::new(0, 0, 255 >> 3),
];

impl Walk {
    /// Creates a walk stepping once every `period_ms` milliseconds.
    #[must_use]
    pub const fn new(period_ms: u16) -> Self {
        Self {
            wait: Duration::from_millis(period_ms as u64),
            phase: 0,
        }
    }

    /// Writes one frame and rotates the colors one phase slot.
    pub fn render<const N: usize>(&mut self, frame: &mut Frame<N>) -> Duration {
        for (index, pixel) in frame.iter_mut().enumerate() {
            *pixel = WALK_COLORS[(index + self.phase) % 3];
        }
        self.phase = (self.phase + 1) % 3;
        self.wait
    }
}

// ============================================================================
// Fade - triangle-wave cross fade
// ============================================================================

/// A whole-strip cross fade: one RGB triple shared by every pixel, each
/// channel tracing a triangle wave between 0 and 255.
///
/// Channel arithmetic runs in `i16` so the 0/255 boundaries are detected
/// exactly before narrowing back to a byte; the per-channel direction flips
/// only at the boundary values. Displayed channels discard their low 3 bits
/// (effective range 0-31) to keep the strip inside its power budget.
#[derive(Clone, Debug)]
pub struct Fade {
    value: [i16; 3],
    delta: [i16; 3],
    adj: i16,
    wait: Duration,
}

impl Fade {
    /// Creates a fade from the given starting channels.
    ///
    /// `period_ms` is the target time for a full 256-step transition; the
    /// per-frame delay is derived from it with [`frame_wait_ms`] rounding.
    /// `adj` is the per-step channel increment. Channels starting above the
    /// midpoint fade down first, the rest fade up.
    #[must_use]
    pub const fn new(red: u8, grn: u8, blu: u8, period_ms: u16, adj: i16) -> Self {
        const fn initial_delta(channel: u8, adj: i16) -> i16 {
            if channel > 127 { -adj } else { adj }
        }
        Self {
            value: [red as i16, grn as i16, blu as i16],
            delta: [
                initial_delta(red, adj),
                initial_delta(grn, adj),
                initial_delta(blu, adj),
            ],
            adj,
            wait: Duration::from_millis(frame_wait_ms(period_ms, 256) as u64),
        }
    }

    /// Writes one frame, then steps every channel and reflects at the
    /// 0/255 boundaries.
    pub fn render<const N: usize>(&mut self, frame: &mut Frame<N>) -> Duration {
        let shade = Rgb::new(
            (self.value[0] >> 3) as u8,
            (self.value[1] >> 3) as u8,
            (self.value[2] >> 3) as u8,
        );
        frame.fill(shade);

        for channel in 0..3 {
            let mut next = self.value[channel] + self.delta[channel];
            if next >= 255 {
                next = 255;
            } else if next <= 0 {
                next = 0;
            }
            // Edge-triggered at the boundary values exactly.
            if next == 255 {
                self.delta[channel] = -self.adj;
            } else if next == 0 {
                self.delta[channel] = self.adj;
            }
            self.value[channel] = next;
        }
        self.wait
    }

    /// Current raw channel values, before brightness attenuation.
    ///
    /// Exposed so tests can check the triangle wave without decoding the
    /// attenuated frame.
    #[must_use]
    pub const fn channels(&self) -> [i16; 3] {
        self.value
    }
}

// ============================================================================
// Step - single-channel ramps
// ============================================================================

/// Whole-strip single-channel ramps: red climbs 0..=254, then green, then
/// blue, repeating.
///
/// Two nested counters: the channel selector and the channel value. The
/// value wraps to the next channel at 255, so 255 itself is never shown.
#[derive(Clone, Debug)]
pub struct Step {
    wait: Duration,
    channel: usize,
    value: u8,
}

impl Step {
    /// Creates a step ramp whose full single-channel transition targets
    /// `period_ms` milliseconds.
    #[must_use]
    pub const fn new(period_ms: u16) -> Self {
        Self {
            wait: Duration::from_millis(frame_wait_ms(period_ms, 255) as u64),
            channel: 0,
            value: 0,
        }
    }

    /// Writes one frame and bumps the ramp counters.
    pub fn render<const N: usize>(&mut self, frame: &mut Frame<N>) -> Duration {
        let level = self.value >> 3;
        let shade = match self.channel {
            0 => Rgb::new(level, 0, 0),
            1 => Rgb::new(0, level, 0),
            _ => Rgb::new(0, 0, level),
        };
        frame.fill(shade);

        self.value = self.value.wrapping_add(1);
        if self.value == 255 {
            self.value = 0;
            self.channel = (self.channel + 1) % 3;
        }
        self.wait
    }
}

// ============================================================================
// Chase - a single pixel ping-ponging along the strip
// ============================================================================

/// Foreground hue of the chase, cycling red -> green -> blue -> red.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Hue {
    Red,
    Green,
    Blue,
}

impl Hue {
    const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    const fn foreground(self) -> Rgb {
        match self {
            Self::Red => Rgb::new(0x0f, 0, 0),
            Self::Green => Rgb::new(0, 0x0f, 0),
            Self::Blue => Rgb::new(0, 0, 0x0f),
        }
    }

    /// Faint background tint shown behind the runner when enabled.
    const fn background(self) -> Rgb {
        match self {
            Self::Red => Rgb::new(0x00, 0x02, 0x01),
            Self::Green => Rgb::new(0x01, 0x00, 0x02),
            Self::Blue => Rgb::new(0x02, 0x01, 0x00),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    Forward,
    Reverse,
}

/// One bright pixel sweeping back and forth along the strip.
///
/// The runner visits `0..=N-1` then `N-2..=1` with no doubled endpoint
/// frames; the step that brings it back to position 0 after a full round
/// trip advances the hue. The rest of the strip shows black, or a faint
/// per-hue tint when `background_on` is set.
#[derive(Clone, Debug)]
pub struct Chase {
    wait: Duration,
    background_on: bool,
    position: usize,
    direction: Direction,
    hue: Hue,
}

impl Chase {
    /// Creates a chase moving one pixel every `period_ms` milliseconds.
    #[must_use]
    pub const fn new(period_ms: u16, background_on: bool) -> Self {
        Self {
            wait: Duration::from_millis(period_ms as u64),
            background_on,
            position: 0,
            direction: Direction::Forward,
            hue: Hue::Red,
        }
    }

    /// Writes one frame and moves the runner, reversing at the strip ends.
    pub fn render<const N: usize>(&mut self, frame: &mut Frame<N>) -> Duration {
        let foreground = self.hue.foreground();
        let background = if self.background_on {
            self.hue.background()
        } else {
            BLACK
        };
        for (index, pixel) in frame.iter_mut().enumerate() {
            *pixel = if index == self.position {
                foreground
            } else {
                background
            };
        }

        match self.direction {
            Direction::Forward => {
                self.position += 1;
                if self.position + 1 >= N {
                    self.direction = Direction::Reverse;
                }
            }
            Direction::Reverse => {
                self.position = self.position.saturating_sub(1);
                if self.position == 0 {
                    // A full round trip: start the next hue.
                    self.direction = Direction::Forward;
                    self.hue = self.hue.next();
                }
            }
        }
        self.wait
    }
}

// ============================================================================
// Pattern - the tagged union the dispatcher selects from
// ============================================================================

/// One of the four animation algorithms, with its parameters and counters.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Tri-color walk ([`Walk`]).
    Walk(Walk),
    /// Triangle-wave cross fade ([`Fade`]).
    Fade(Fade),
    /// Single-channel ramps ([`Step`]).
    Step(Step),
    /// Ping-pong runner ([`Chase`]).
    Chase(Chase),
}

impl Pattern {
    /// Builds the pattern invocation for a mode index, in its fixed initial
    /// state.
    ///
    /// The table is the six-entry mode cycle of this build: two walk speeds,
    /// a slow and a quick fade, and the chase with and without its
    /// background tint. The index is taken modulo [`MODE_COUNT`], though the
    /// mode register never hands out an out-of-range value.
    #[must_use]
    pub const fn for_mode(mode_index: usize) -> Self {
        match mode_index % MODE_COUNT {
            // Tri-color walk with 100ms separation.
            0 => Self::Walk(Walk::new(100)),
            // Slow fade over 3 seconds.
            1 => Self::Fade(Fade::new(255, 0, 127, 3000, 1)),
            // Tri-color walk with 200ms separation.
            2 => Self::Walk(Walk::new(200)),
            // Quick pulse with 3 second duration.
            3 => Self::Fade(Fade::new(255, 0, 127, 3000, 2)),
            // Color chaser on a black background.
            4 => Self::Chase(Chase::new(100, false)),
            // Color chaser with a faint tinted background.
            _ => Self::Chase(Chase::new(100, true)),
        }
    }

    /// Renders one complete frame, advances the pattern's state, and
    /// returns how long the frame should stay on the strip.
    pub fn render<const N: usize>(&mut self, frame: &mut Frame<N>) -> Duration {
        match self {
            Self::Walk(walk) => walk.render(frame),
            Self::Fade(fade) => fade.render(frame),
            Self::Step(step) => step.render(frame),
            Self::Chase(chase) => chase.render(frame),
        }
    }
}
