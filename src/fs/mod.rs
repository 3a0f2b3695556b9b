//! Filesystem utilities for mazewalk.
//!
//! Reports written with `--output` go through [`atomic_write_file`] so a
//! reader never sees a half-written JSON document.

pub mod atomic;

pub use atomic::atomic_write_file;
