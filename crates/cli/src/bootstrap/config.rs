use anyhow::Context;
use dnsprobe_domain::{CliOverrides, Config};

/// Loads the layered configuration and rejects it before any network work
/// if it cannot drive a lookup.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
