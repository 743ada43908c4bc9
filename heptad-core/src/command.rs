//! Command decoding for completed frames
//!
//! A completed 6-bit frame carries a 2-bit command in its top bits and a
//! 4-bit data nibble in its low bits. Only two command codes are
//! defined; the remaining codes blank the display rather than raising an
//! error, since the input domain is closed.

// Wire format command codes (frame bits 5..4)
pub const CMD_DISPLAY_PLAIN: u8 = 0b10;
pub const CMD_DISPLAY_WITH_POINT: u8 = 0b01;

/// Display command carried in the top two bits of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Show the data nibble, decimal point off
    DisplayPlain,
    /// Show the data nibble with the decimal point (static or blinking,
    /// per controller configuration)
    DisplayWithPoint,
    /// Undefined code (`00` or `11`); blanks the display
    Invalid,
}

impl Command {
    /// Decode a 2-bit command code
    ///
    /// Bits above the low two are ignored.
    pub fn from_code(code: u8) -> Self {
        match code & 0b11 {
            CMD_DISPLAY_PLAIN => Command::DisplayPlain,
            CMD_DISPLAY_WITH_POINT => Command::DisplayWithPoint,
            _ => Command::Invalid,
        }
    }
}

/// A decoded frame: command plus data nibble
///
/// The nibble is meaningless when the command is [`Command::Invalid`];
/// the controller ignores it on that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub command: Command,
    pub nibble: u8,
}

impl Frame {
    /// Split a completed 6-bit word into command and nibble
    pub fn from_word(word: u8) -> Self {
        Self {
            command: Command::from_code(word >> 4),
            nibble: word & 0x0F,
        }
    }
}
