//! Implements the Intel 8250 UART chip

use core::fmt::Write;
use super::ll::io_port::Port as IoPort;
pub use crate::target::interface::serial::{
    Config,
    Parity,
    DEFAULT_CONFIG,
    Port as IfPort,
};

const SERIAL_PORT_CNT: usize = 4;
const IO_PORTS_PER_SERIAL_PORT: usize = 8;

/// Base IO ports for COM1..COM4
const PORT_BASES: [u16; SERIAL_PORT_CNT] = [0x3f8, 0x2f8, 0x3e8, 0x2e8];

/// Frequency of the UART clock divided by 16
const BASE_BAUD: u32 = 115200;

// register offsets
const DATA: usize = 0;
const INTERRUPT_ENABLE: usize = 1;
const LINE_CONTROL: usize = 3;
const MODEM_CONTROL: usize = 4;
const LINE_STATUS: usize = 5;

const LINE_STATUS_THR_EMPTY: u8 = 1 << 5;
const LINE_CONTROL_DLAB: u8 = 1 << 7;

/// Serial port structure
pub struct SerialPort {
    io_ports: [IoPort; IO_PORTS_PER_SERIAL_PORT],
}

impl SerialPort {
    fn write_byte(&self, byte: u8) {
        while self.io_ports[LINE_STATUS].read() & LINE_STATUS_THR_EMPTY == 0 {
            core::hint::spin_loop();
        }
        self.io_ports[DATA].write(byte);
    }
}

impl IfPort for SerialPort {
    const PORT_CNT: usize = SERIAL_PORT_CNT;

    fn new(number: usize) -> Option<Self> {
        let base = *PORT_BASES.get(number)?;
        // SAFETY: these are the legacy COM port registers, and they are only
        // driven through this structure
        let io_ports = core::array::from_fn(|i| unsafe { IoPort::new(base + i as u16) });

        let mut port = SerialPort { io_ports };
        port.configure(&DEFAULT_CONFIG);
        Some(port)
    }

    fn configure(&mut self, config: &Config) {
        // set baud rate
        let divider = (BASE_BAUD / config.baud_rate.clamp(1, BASE_BAUD)) as u16;
        self.io_ports[LINE_CONTROL].write(LINE_CONTROL_DLAB);
        self.io_ports[DATA].write((divider & 0xff) as u8);
        self.io_ports[INTERRUPT_ENABLE].write((divider >> 8) as u8);

        // 8 data bits, 1 stop bit
        let parity = match config.parity {
            Parity::None => 0b000,
            Parity::Odd => 0b001,
            Parity::Even => 0b011,
        };
        self.io_ports[LINE_CONTROL].write(0b11 | (parity << 3));

        // disable all interrupts
        self.io_ports[INTERRUPT_ENABLE].write(0);

        // disable modem control
        self.io_ports[MODEM_CONTROL].write(0);
    }

    fn write(&mut self, data: &[u8]) {
        for &byte in data {
            self.write_byte(byte);
        }
    }
}

impl Write for SerialPort {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        IfPort::write(self, s.as_bytes());
        Ok(())
    }
}
