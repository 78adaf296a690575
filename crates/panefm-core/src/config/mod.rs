//! User-facing configuration (TOML-based settings).

pub mod settings;

pub use settings::{Config, GeneralConfig};
