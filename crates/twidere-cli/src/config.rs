//! Config file loading and saving.
//!
//! The file is TOML holding a [`TwitterConfig`]; every key is optional.
//! Command-line flags and `TWIDERE_*` variables override what it contains.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;
use twidere_api::TwitterConfig;

use crate::GlobalArgs;

/// Where the config lives when neither `--config` nor `TWIDERE_CONFIG` is set.
pub fn default_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set; pass --config")?;
    Ok(PathBuf::from(home).join(".config/twidere/config.toml"))
}

/// Resolve the config path from the global arguments.
pub fn resolve_path(args: &GlobalArgs) -> Result<PathBuf> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => default_path(),
    }
}

/// Read the config file; a missing file yields the defaults.
pub fn load_file(path: &Path) -> Result<TwitterConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(TwitterConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

/// Write `config` to `path`, creating parent directories.
pub fn save(path: &Path, config: &TwitterConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

/// Store an access token in the file at `path`, leaving its other keys as
/// written. Flag and environment overrides never reach the file.
pub fn save_access_token(path: &Path, token: &str, secret: &str) -> Result<()> {
    let stored = load_file(path)?.with_access_token(token, secret);
    save(path, &stored)
}

/// Apply flag and environment overrides on top of the file.
#[must_use]
pub fn apply_overrides(mut config: TwitterConfig, args: &GlobalArgs) -> TwitterConfig {
    if let Some(root) = &args.api_root {
        config = config.with_api_root(root);
    }
    if let Some(key) = &args.consumer_key {
        config.consumer_key.clone_from(key);
    }
    if let Some(secret) = &args.consumer_secret {
        config.consumer_secret.clone_from(secret);
    }
    if args.access_token.is_some() {
        config.access_token.clone_from(&args.access_token);
    }
    if args.access_token_secret.is_some() {
        config.access_token_secret.clone_from(&args.access_token_secret);
    }
    config
}

/// Load the effective configuration; fails without consumer credentials.
pub fn load(args: &GlobalArgs) -> Result<(PathBuf, TwitterConfig)> {
    let path = resolve_path(args)?;
    let config = apply_overrides(load_file(&path)?, args);
    if config.consumer_key.is_empty() || config.consumer_secret.is_empty() {
        bail!(
            "consumer key and secret are not configured; set them in {} or via \
             TWIDERE_CONSUMER_KEY / TWIDERE_CONSUMER_SECRET",
            path.display()
        );
    }
    Ok((path, config))
}
