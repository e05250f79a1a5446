//! Arbor Core
//!
//! This crate contains shared utilities for the Arbor workspace.

pub mod alloc;
pub mod logging;
