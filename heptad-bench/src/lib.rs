//! Host-side bus driver for the Heptad display core
//!
//! The core models a synchronous digital peripheral and does nothing on
//! its own; something external has to own the wire state, supply clock
//! edges, and observe the output register. [`BusDriver`] is that
//! external collaborator for host tests: it holds the MOSI, select and
//! reset line levels and implements the frame protocol (select, six
//! MSB-first bits, deselect) and the reset protocol (assert, one edge,
//! release, one edge).

use heptad_core::{SelectPolarity, Signals, SlaveConfig, SpiSlave, FRAME_BITS};

/// Wire-level driver owning an [`SpiSlave`] and its input lines
#[derive(Debug, Clone)]
pub struct BusDriver {
    slave: SpiSlave,
    select_polarity: SelectPolarity,
    mosi: bool,
    select_line: bool,
    reset_line: bool,
}

impl Default for BusDriver {
    fn default() -> Self {
        Self::new(SlaveConfig::default())
    }
}

impl BusDriver {
    /// Create a driver with the slave deselected and reset released
    pub fn new(config: SlaveConfig) -> Self {
        let select_polarity = config.select_polarity;
        Self {
            slave: SpiSlave::new(config),
            select_polarity,
            mosi: false,
            // Line idles at the deasserted level for the configured
            // polarity
            select_line: !select_polarity.asserted_level(),
            reset_line: false,
        }
    }

    /// One active clock edge with the current line levels
    pub fn clock_edge(&mut self) {
        self.slave.clock_edge(Signals {
            serial_in: self.mosi,
            select: self.select_line,
            reset: self.reset_line,
        });
    }

    /// Run `n` edges without touching any line
    pub fn idle_edges(&mut self, n: usize) {
        for _ in 0..n {
            self.clock_edge();
        }
    }

    /// Reset protocol: assert across one edge, release, one more edge
    pub fn pulse_reset(&mut self) {
        self.reset_line = true;
        self.clock_edge();
        self.reset_line = false;
        self.clock_edge();
    }

    /// Send one complete frame: 2-bit command, 4-bit nibble, MSB-first
    ///
    /// Asserts select for six bit edges, then deasserts and runs the
    /// latch edge. Arguments are masked to their field widths.
    pub fn transfer(&mut self, command: u8, nibble: u8) {
        let word = (command & 0b11) << 4 | (nibble & 0x0F);
        self.set_selected(true);
        for i in (0..FRAME_BITS).rev() {
            self.mosi = (word >> i) & 1 == 1;
            self.clock_edge();
        }
        self.end_frame();
    }

    /// Shift raw bits with select asserted, without terminating the
    /// frame
    ///
    /// For exercising short and overlong frames; follow with
    /// [`BusDriver::end_frame`].
    pub fn shift_bits(&mut self, bits: &[bool]) {
        self.set_selected(true);
        for &bit in bits {
            self.mosi = bit;
            self.clock_edge();
        }
    }

    /// Deassert select and run the latch edge
    pub fn end_frame(&mut self) {
        self.set_selected(false);
        self.clock_edge();
    }

    /// The slave's 8-bit output register
    pub fn output(&self) -> u8 {
        self.slave.output_register()
    }

    /// The modeled peripheral
    pub fn slave(&self) -> &SpiSlave {
        &self.slave
    }

    fn set_selected(&mut self, asserted: bool) {
        self.select_line = asserted == self.select_polarity.asserted_level();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heptad_core::BLANK;

    #[test]
    fn test_transfer_latches_output() {
        let mut bus = BusDriver::default();
        bus.pulse_reset();
        bus.transfer(0b10, 0x3);
        assert_eq!(bus.output(), 0x4F);
    }

    #[test]
    fn test_pulse_reset_blanks_display() {
        let mut bus = BusDriver::default();
        bus.transfer(0b10, 0x8);
        bus.pulse_reset();
        assert_eq!(bus.output(), BLANK);
    }

    #[test]
    fn test_line_idles_deselected() {
        let mut bus = BusDriver::default();
        // Idle edges between frames must not start a frame
        bus.idle_edges(10);
        bus.transfer(0b10, 0x1);
        assert_eq!(bus.output(), 0x06);
    }
}
