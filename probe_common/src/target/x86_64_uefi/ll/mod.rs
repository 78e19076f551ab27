//! Low-level x86_64 primitives

pub mod io_port;
