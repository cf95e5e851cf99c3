//! # Core Module
//!
//! Concrete configuration types for building interfaces from files, plus
//! re-exports of the configuration trait they implement.

pub mod config;

pub use config::{
    InterfaceConfig,
    RootConfig,
    RootSizing,
    LayoutConfig,
    WidgetConfig,
};
pub use crate::config::{Config, ConfigError, ConfigFormat};
