//! Configuration module for bill-sync
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BillPaths;
pub use settings::Settings;
