use core::arch::asm;

/// Byte-wide x86 I/O port
pub struct Port {
    number: u16,
}

impl Port {
    /// Instantiates a [Port]
    ///
    /// # Safety
    /// Writing to an arbitrary I/O port can reconfigure any device in the
    /// system. The caller must make sure that `number` belongs to the device it
    /// intends to drive, and that no other [Port] for the same number is in
    /// use.
    pub unsafe fn new(number: u16) -> Port {
        Port { number }
    }

    pub fn read(&self) -> u8 {
        let value: u8;
        // SAFETY: see [Port::new]
        unsafe {
            asm!("in al, dx", in("dx") self.number, out("al") value, options(nomem, nostack, preserves_flags));
        }
        value
    }

    pub fn write(&self, value: u8) {
        // SAFETY: see [Port::new]
        unsafe {
            asm!("out dx, al", in("dx") self.number, in("al") value, options(nomem, nostack, preserves_flags));
        }
    }
}
