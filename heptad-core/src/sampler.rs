//! Serial bit accumulation
//!
//! One frame is exactly six bits, shifted in MSB-first: the first bit
//! sampled becomes bit 5 of the completed word. The sampler only
//! accumulates; select gating and frame termination live in the
//! controller.

use heapless::Vec;

/// Bits per frame: 2-bit command + 4-bit data nibble
pub const FRAME_BITS: usize = 6;

/// Bounded MSB-first shift register for one frame
///
/// Bits pushed past the sixth are ignored: the first six bits of a frame
/// win, and the driver is expected to deselect after six edges anyway.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitSampler {
    bits: Vec<u8, FRAME_BITS>,
}

impl BitSampler {
    /// Create an empty sampler
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Shift in one bit (sampled on an active clock edge)
    pub fn push(&mut self, bit: bool) {
        // Saturates at FRAME_BITS; excess bits are dropped
        let _ = self.bits.push(bit as u8);
    }

    /// Discard any partially accumulated frame
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Number of bits accumulated so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if no bits have been accumulated
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True once a full frame has been accumulated
    pub fn is_complete(&self) -> bool {
        self.bits.len() == FRAME_BITS
    }

    /// The completed 6-bit word, MSB-first
    ///
    /// Returns `None` while the frame is incomplete.
    pub fn word(&self) -> Option<u8> {
        if !self.is_complete() {
            return None;
        }
        let mut word = 0u8;
        for &bit in &self.bits {
            word = (word << 1) | bit;
        }
        Some(word)
    }
}
