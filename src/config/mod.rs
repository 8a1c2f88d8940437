//! Configuration module for Mahana Budget
//!
//! - Data directory resolution
//! - User settings (currency, setup flag, cycle overflow policy)

pub mod paths;
pub mod settings;

pub use paths::MahanaPaths;
pub use settings::Settings;
