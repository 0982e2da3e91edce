//! Foundation types and traits for HWPM.
//!
//! This crate contains the platform-agnostic core types shared by all HWPM
//! crates: colors, the rendering backend trait, configuration, and error
//! types.

pub mod backend;
pub mod config;
pub mod error;
