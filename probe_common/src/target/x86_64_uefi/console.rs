//! Implements the console interface on top of the UEFI Simple Text Output
//! Protocol

use uefi::{proto::console::text::Output, CStr16};
use crate::util::ucs2::with_nul;
pub use crate::target::interface::console::{
    Error,
    Result,
    FORMAT_ERROR_PLACEHOLDER,
    Console as IfConsole,
};

impl From<uefi::Error> for Error {
    fn from(value: uefi::Error) -> Self {
        Error::Device(value.status().0)
    }
}

impl IfConsole for Output {
    fn reset(&mut self) -> Result<()> {
        Ok(Output::reset(self, false)?)
    }

    fn output_wide(&mut self, text: &[u16]) -> Result<()> {
        let text = with_nul(text).ok_or(Error::MalformedText)?;
        let text = CStr16::from_u16_with_nul(text).map_err(|_| Error::MalformedText)?;
        Ok(self.output_string(text)?)
    }
}

impl From<Error> for uefi::Status {
    fn from(value: Error) -> Self {
        match value {
            Error::MalformedText => uefi::Status::INVALID_PARAMETER,
            Error::Device(status) => uefi::Status(status),
        }
    }
}
