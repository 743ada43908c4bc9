//! Top-level SPI slave state machine
//!
//! [`SpiSlave`] owns all state of the peripheral: the bit sampler, the
//! latched select level, the display state, the blink phase divider,
//! and the 8-bit output register. The external driver calls
//! [`SpiSlave::clock_edge`] once per active edge of the serial clock
//! with the sampled pin levels; there is no other way state changes.
//!
//! Evaluation order within one edge:
//!
//! 1. Reset overrides everything and forces the blank pattern.
//! 2. Blink phase advances for the state that was active going into
//!    this edge.
//! 3. A deselected→selected transition starts a fresh frame; the
//!    assertion edge already samples the first bit.
//! 4. While selected, the serial input is shifted into the sampler.
//! 5. A selected→deselected transition terminates the frame: a complete
//!    frame is decoded and latched into the output register, a short
//!    frame is discarded and the previous output held.
//!
//! Segment bits (6..0) therefore only ever change on a deselect edge or
//! under reset. In [`PointMode::Blink`] the decimal-point bit is
//! explicitly time-varying and toggles on every `blink_divider`-th edge
//! while a `DisplayWithPoint` command is latched.

use crate::command::{Command, Frame};
use crate::sampler::BitSampler;
use crate::segments::{encode, BLANK, POINT};

/// Active level of the select/chip-enable input
///
/// SPI chip selects are conventionally active-low, and that is the
/// default; boards that invert the line can configure
/// [`SelectPolarity::ActiveHigh`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectPolarity {
    /// Logic 0 addresses the slave (default)
    ActiveLow,
    /// Logic 1 addresses the slave
    ActiveHigh,
}

impl SelectPolarity {
    /// Map a raw select line level to "slave is addressed"
    pub fn is_selected(self, level: bool) -> bool {
        match self {
            SelectPolarity::ActiveLow => !level,
            SelectPolarity::ActiveHigh => level,
        }
    }

    /// The line level that asserts selection
    pub fn asserted_level(self) -> bool {
        matches!(self, SelectPolarity::ActiveHigh)
    }
}

/// Decimal-point behavior for the `DisplayWithPoint` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointMode {
    /// Decimal point stays lit while the command is latched (default)
    Static,
    /// Decimal point toggles every `blink_divider` clock edges
    Blink,
}

/// Static configuration of the slave
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlaveConfig {
    /// Active level of the select input
    pub select_polarity: SelectPolarity,
    /// Decimal-point interpretation for `DisplayWithPoint`
    pub point_mode: PointMode,
    /// Clock edges per decimal-point toggle in [`PointMode::Blink`];
    /// values below 1 are treated as 1
    pub blink_divider: u8,
}

impl Default for SlaveConfig {
    fn default() -> Self {
        Self {
            select_polarity: SelectPolarity::ActiveLow,
            point_mode: PointMode::Static,
            blink_divider: 1,
        }
    }
}

/// Pin levels sampled on one active clock edge
///
/// `reset` is active-high at this layer; a board-level active-low
/// `rst_n` is the driver's concern.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Signals {
    /// Serial data in (MOSI)
    pub serial_in: bool,
    /// Raw select line level; interpreted per [`SelectPolarity`]
    pub select: bool,
    /// Synchronous reset, active high
    pub reset: bool,
}

/// Display state driven by decoded frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Blank/error indicator (`0x40`); reset state
    Blank,
    /// A digit is shown, decimal point static
    Showing { pattern: u8, point: bool },
    /// A digit is shown, decimal point toggling
    Blinking { pattern: u8 },
}

/// The SPI slave peripheral
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiSlave {
    config: SlaveConfig,
    sampler: BitSampler,
    /// Select state latched on the previous edge
    selected: bool,
    state: DisplayState,
    blink_count: u8,
    output: u8,
}

impl Default for SpiSlave {
    fn default() -> Self {
        Self::new(SlaveConfig::default())
    }
}

impl SpiSlave {
    /// Create a slave in its reset state
    ///
    /// The output register already reads [`BLANK`] before any frame is
    /// processed.
    pub fn new(config: SlaveConfig) -> Self {
        Self {
            config,
            sampler: BitSampler::new(),
            selected: false,
            state: DisplayState::Blank,
            blink_count: 0,
            output: BLANK,
        }
    }

    /// The 8-bit output register: decimal point in bit 7, segments a-g
    /// in bits 6..0
    pub fn output_register(&self) -> u8 {
        self.output
    }

    /// Current display state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// True if the slave latched the select line as asserted on the
    /// previous edge
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Process one active edge of the serial clock
    pub fn clock_edge(&mut self, signals: Signals) {
        if signals.reset {
            self.enter_reset();
            return;
        }

        self.advance_blink();

        let selected = self.config.select_polarity.is_selected(signals.select);
        if selected {
            if !self.selected {
                // Frame start: abandon any partial frame. The assertion
                // edge also samples the first bit.
                self.sampler.clear();
            }
            self.sampler.push(signals.serial_in);
        } else if self.selected {
            // Deselect edge terminates the frame
            if let Some(word) = self.sampler.word() {
                self.latch_frame(Frame::from_word(word));
            }
            // A short frame is discarded; the previous output holds
            self.sampler.clear();
        }
        self.selected = selected;
    }

    fn enter_reset(&mut self) {
        self.sampler.clear();
        self.selected = false;
        self.state = DisplayState::Blank;
        self.blink_count = 0;
        self.output = BLANK;
    }

    fn advance_blink(&mut self) {
        if !matches!(self.state, DisplayState::Blinking { .. }) {
            return;
        }
        self.blink_count += 1;
        if self.blink_count >= self.config.blink_divider.max(1) {
            self.blink_count = 0;
            self.output ^= POINT;
        }
    }

    fn latch_frame(&mut self, frame: Frame) {
        match frame.command {
            Command::DisplayPlain => {
                let pattern = encode(frame.nibble);
                self.state = DisplayState::Showing {
                    pattern,
                    point: false,
                };
                self.output = pattern;
            }
            Command::DisplayWithPoint => {
                let pattern = encode(frame.nibble);
                match self.config.point_mode {
                    PointMode::Static => {
                        self.state = DisplayState::Showing {
                            pattern,
                            point: true,
                        };
                        self.output = pattern | POINT;
                    }
                    PointMode::Blink => {
                        self.state = DisplayState::Blinking { pattern };
                        // Phase starts with the point lit
                        self.blink_count = 0;
                        self.output = pattern | POINT;
                    }
                }
            }
            Command::Invalid => {
                self.state = DisplayState::Blank;
                self.blink_count = 0;
                self.output = BLANK;
            }
        }
    }
}
