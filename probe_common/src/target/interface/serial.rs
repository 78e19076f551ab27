//! Generic interface for a serial port

use core::fmt::Write;

/// Serial port parity bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Odd,
    Even,
}

/// Serial port configuration. Frames always carry 8 data bits and 1 stop bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub parity: Parity,
    /// Baud rate (in bit times per second)
    pub baud_rate: u32,
}

/// Default serial port config
pub const DEFAULT_CONFIG: Config = Config {
    parity: Parity::None,
    baud_rate: 115200,
};

/// Serial port
pub trait Port: Write {
    /// Total number of serial ports in system
    const PORT_CNT: usize;

    /// Opens a serial port and applies the default configuration. Returns
    /// `None` if there's no port with that number.
    fn new(number: usize) -> Option<Self> where Self: Sized;
    /// Configures the serial port
    fn configure(&mut self, config: &Config);
    /// Writes data to the serial port
    fn write(&mut self, data: &[u8]);
}
