pub mod config;
pub mod log;
pub mod prompt;
pub mod theme;
