//! Various utility functions

pub mod int_fmt;
pub mod logger;
pub mod ucs2;
