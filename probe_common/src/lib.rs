#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod target;
pub mod util;
