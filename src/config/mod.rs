//! Configuration root and persisted settings.

pub mod root;
pub mod settings;

pub use root::ConfigRoot;
pub use settings::Settings;
