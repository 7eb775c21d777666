//! Common error definitions for rust_motion_planning
//!
//! This module provides the foundational error type used across
//! the state-space and motion-validity components of this crate.

pub mod error;

pub use error::*;
