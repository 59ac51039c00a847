pub mod config;
pub mod format;
pub mod generator;
pub mod target;

pub use config::PatternConfig;
pub use generator::PatternGenerator;
pub use target::ThemeTarget;
