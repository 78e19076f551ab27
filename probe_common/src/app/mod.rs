//! Application bodies, written against the target interfaces so that the boot
//! binaries stay thin and the logic can be exercised off-firmware

pub mod hello;
pub mod modes;
