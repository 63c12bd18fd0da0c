//! Utility functions shared across the crate.
//!
//! This module provides common utilities for:
//! - String/byte codec for the 8-bit alphabet
//! - Data formatting

pub mod codec;
pub mod format;

pub use codec::{bytes_to_string, string_to_bytes};
pub use format::{format_bytes, hex_string};
