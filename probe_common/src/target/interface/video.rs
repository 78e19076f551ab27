//! Generic platform-independent interface for display mode enumeration

use derive_more::Display;

/// Video interface error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The platform has no graphics output
    NotSupported,
    /// No mode with that index
    NoSuchMode(u32),
    /// The device reported a failure; carries the platform status code
    Device(usize),
}

pub type Result<T> = core::result::Result<T, Error>;

/// Display resolution in pixels
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{}x{}", width, height)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl From<(usize, usize)> for Resolution {
    fn from((width, height): (usize, usize)) -> Self {
        Resolution { width, height }
    }
}

/// Describes a single display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInfo {
    /// Index under which the firmware knows this mode
    pub index: u32,
    pub resolution: Resolution,
    /// Number of pixels per line of video memory. This might be larger than the
    /// horizontal resolution.
    pub stride: usize,
}

pub trait ModeSource {
    /// Number of modes the adapter supports. Valid indices are
    /// `0..mode_count()`.
    fn mode_count(&self) -> u32;

    /// Gets the parameters of the mode with the given index
    fn query_mode(&self, index: u32) -> Result<ModeInfo>;

    /// Index of the mode that's currently set, if known
    fn current_mode(&self) -> Option<u32>;
}
