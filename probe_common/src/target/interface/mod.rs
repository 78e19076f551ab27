//! Target abstractions.
//!
//! Platform-independent traits for everything the applications need from the
//! firmware.

pub mod console;
pub mod serial;
pub mod video;
