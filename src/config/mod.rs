//! Configuration module for paycheck-cli
//!
//! - Data directory resolution
//! - User display settings

pub mod paths;
pub mod settings;

pub use paths::PaycheckPaths;
pub use settings::Settings;
