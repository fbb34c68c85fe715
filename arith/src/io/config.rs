//! Binary configuration stored in `arith.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::ops::{Calculator, PowerCheck};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "arith.toml";

/// Binary configuration (TOML).
///
/// Missing fields default, and so does a missing file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArithConfig {
    /// Tracing directive used when `RUST_LOG` is unset (e.g. `info`, `arith=debug`).
    pub log_level: String,

    /// How `power` detects undefined results.
    pub power_check: PowerCheck,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            power_check: PowerCheck::default(),
        }
    }
}

impl ArithConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level must be non-empty"));
        }
        EnvFilter::try_new(&self.log_level).map_err(|err| {
            anyhow!(
                "log_level {:?} is not a valid directive: {}",
                self.log_level,
                err
            )
        })?;
        Ok(())
    }

    pub fn calculator(&self) -> Calculator {
        Calculator::new(self.power_check)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ArithConfig::default()`.
pub fn load_config(path: &Path) -> Result<ArithConfig> {
    if !path.exists() {
        let cfg = ArithConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ArithConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Write the default config to `path`.
///
/// An existing file is left alone unless `force` is set. Returns whether the
/// file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, keeping it");
        return Ok(false);
    }
    write_config(path, &ArithConfig::default())?;
    Ok(true)
}

/// Validate `cfg` and replace `path` with it via a sibling temp file + rename.
pub fn write_config(path: &Path, cfg: &ArithConfig) -> Result<()> {
    cfg.validate()?;
    let mut toml_text = toml::to_string_pretty(cfg).context("serialize config toml")?;
    toml_text.push('\n');

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    }
    let staged = path.with_extension("toml.tmp");
    fs::write(&staged, toml_text).with_context(|| format!("write {}", staged.display()))?;
    fs::rename(&staged, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
