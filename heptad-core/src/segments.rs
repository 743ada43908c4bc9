//! Hexadecimal to seven-segment encoding
//!
//! Segment assignment within the output register:
//!
//! ```text
//!      a
//!     ===
//!  f ||  || b      bit: 7  6 5 4 3 2 1 0
//!     =g=               dp g f e d c b a
//!  e ||  || c
//!     ===
//!      d
//! ```

/// Decimal-point bit within the output register
pub const POINT: u8 = 0x80;

/// Blank/error pattern: only the middle segment lit
///
/// Driven on reset and in response to undefined command codes.
pub const BLANK: u8 = 0x40;

/// Standard seven-segment font for hexadecimal digits 0-F
pub const SEGMENT_FONT: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
];

/// Encode a 4-bit value as a seven-segment pattern
///
/// Total over the low nibble; high bits of the argument are ignored.
pub fn encode(nibble: u8) -> u8 {
    SEGMENT_FONT[(nibble & 0x0F) as usize]
}
