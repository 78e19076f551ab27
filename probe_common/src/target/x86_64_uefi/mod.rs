//! UEFI implementations of the target interfaces

pub mod console;
pub mod firmware;
pub mod video;

#[cfg(target_arch = "x86_64")]
pub mod ll;
#[cfg(target_arch = "x86_64")]
pub mod serial;
