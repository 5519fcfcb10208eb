//! Configuration loaded from `.fleet-secrets.toml`.

pub mod settings;

pub use settings::Settings;
