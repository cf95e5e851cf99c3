//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the UI crate:
//! - Math types and rectangle helpers
//! - Stable handles for layers, elements and roots
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
