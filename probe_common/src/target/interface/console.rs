//! Generic interface for a character-oriented output device

use crate::util::{int_fmt::{self, INT_BUF_LEN}, ucs2::Ucs2Chunks};

/// Console interface error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The text passed to [`Console::output_wide`] has no NUL sentinel or
    /// isn't valid UCS-2
    MalformedText,
    /// The device reported a failure; carries the platform status code
    Device(usize),
}

pub type Result<T> = core::result::Result<T, Error>;

/// Printed in place of a number that couldn't be formatted
pub const FORMAT_ERROR_PLACEHOLDER: &str = "<error>";

pub trait Console {
    /// Clears the screen and resets the device to its default state
    fn reset(&mut self) -> Result<()>;

    /// Outputs NUL-terminated UCS-2 text. Anything after the first NUL is
    /// ignored.
    fn output_wide(&mut self, text: &[u16]) -> Result<()>;

    /// Outputs a string. Characters that UCS-2 can't represent are replaced
    /// with `?`.
    fn print(&mut self, text: &str) -> Result<()> {
        for chunk in Ucs2Chunks::new(text) {
            self.output_wide(&chunk)?;
        }
        Ok(())
    }

    /// Outputs the decimal representation of a number. If it can't be
    /// formatted, [`FORMAT_ERROR_PLACEHOLDER`] is printed instead.
    fn print_int(&mut self, value: i64) -> Result<()> {
        let mut buffer = [0u16; INT_BUF_LEN];
        self.print_int_with(value, &mut buffer)
    }

    /// Same as [`Console::print_int`], but formats into a caller-supplied
    /// scratch buffer
    fn print_int_with(&mut self, value: i64, buffer: &mut [u16]) -> Result<()> {
        match int_fmt::format_int(value, buffer) {
            Ok(_) => self.output_wide(buffer),
            Err(error) => {
                log::warn!("failed to format {value}: {error:?}");
                self.print(FORMAT_ERROR_PLACEHOLDER)
            },
        }
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn output_wide(&mut self, text: &[u16]) -> Result<()> {
        (**self).output_wide(text)
    }
}
