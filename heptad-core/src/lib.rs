//! Heptad SPI slave seven-segment display core
//!
//! This crate models a small digital peripheral at clock-edge level: an
//! SPI slave that receives fixed 6-bit frames and drives a hexadecimal
//! seven-segment display with an optional decimal point.
//!
//! # Frame format
//!
//! ```text
//! ┌─────────┬─────────────┐
//! │ COMMAND │ DATA NIBBLE │
//! │ 2 bits  │ 4 bits      │
//! └─────────┴─────────────┘
//! ```
//!
//! Frames are shifted in MSB-first while the slave is selected; the
//! select→deselect transition terminates the frame and latches the
//! output register. Command `10` displays the nibble, `01` displays it
//! with the decimal point (static or blinking, by configuration), and
//! the undefined codes `00`/`11` blank the display to the error
//! pattern `0x40` (middle segment only).
//!
//! The external driver owns the clock: each call to
//! [`SpiSlave::clock_edge`] is one active edge of the serial clock, with
//! the pin levels sampled from [`Signals`]. The 8-bit output register
//! (decimal point in bit 7, segments a-g in bits 6..0) is the only
//! externally observable state.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod controller;
pub mod sampler;
pub mod segments;

pub use command::{Command, Frame};
pub use controller::{DisplayState, PointMode, SelectPolarity, Signals, SlaveConfig, SpiSlave};
pub use sampler::{BitSampler, FRAME_BITS};
pub use segments::{encode, BLANK, POINT, SEGMENT_FONT};
