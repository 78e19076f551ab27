//! Platform (target) abstractions and implementations.
//!
//! This module has two main submodules:
//!   - [`interface`] contains traits that the application code is written
//!     against, along with the plain data types they exchange;
//!   - [`current`] contains the implementations for the firmware the binaries
//!     run on, which is UEFI on x86_64.
//!
//! Components from the [`current`] module re-export the matching items from
//! the [`interface`] module: traits under an alias beginning with `If` (short
//! for "interface"), structs under their actual names. Import both the trait
//! and the implementation:
//! ```
//! use probe_common::target::current::{console::*, video::*};
//! ```
//!
//! The application code only sees the [`interface`] traits, which is what lets
//! it run against test doubles on the host.

pub mod interface;
pub mod x86_64_uefi;

pub use x86_64_uefi as current;
