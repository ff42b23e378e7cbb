//! Configuration management module
//!
//! Responsible for loading and validating the demo binary's configuration

pub mod settings;

pub use settings::Settings;
