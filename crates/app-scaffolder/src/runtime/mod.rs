//! Subprocess plumbing and the external toolchain seam
//!
//! This module provides:
//! - Streamed subprocess execution without timeouts
//! - The `Toolchain` trait for dependency install and native platform steps

pub mod command;
pub mod toolchain;

pub use command::run_streaming;
pub use toolchain::{SystemToolchain, Toolchain};
