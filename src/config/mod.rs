//! Configuration module for scaffolds
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SCAFFOLDS_*)
//! 3. Explicit `--config <path>`
//! 4. User config (`<config_dir>/scaffolds/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_layered, user_config_path, ConfigWarning};
pub use types::{Config, EmptyInputPolicy, InputConfig, OutputConfig, OutputFormat};

/// Apply environment variable overrides (SCAFFOLDS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // SCAFFOLDS_FORMAT
    if let Some(format) = lookup("SCAFFOLDS_FORMAT").and_then(|v| OutputFormat::parse(&v)) {
        config.output.format = format;
    }

    // SCAFFOLDS_PRETTY
    if let Some(val) = lookup("SCAFFOLDS_PRETTY") {
        config.output.pretty = val.to_lowercase() != "false" && val != "0";
    }

    // SCAFFOLDS_EMPTY_INPUT
    if let Some(policy) = lookup("SCAFFOLDS_EMPTY_INPUT").and_then(|v| EmptyInputPolicy::parse(&v))
    {
        config.input.empty = policy;
    }

    config
}
