use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use maint_core::schedule::{DEFAULT_DUE_SOON_MILES, DEFAULT_DUE_SOON_MONTHS};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MaintConfig {
    #[serde(default)]
    pub vehicle: VehicleSection,
    #[serde(default)]
    pub thresholds: ThresholdSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VehicleSection {
    /// Default vehicle file used when --vehicle is not given
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ThresholdSection {
    pub due_soon_miles: Option<f64>,
    pub due_soon_months: Option<f64>,
}

impl ThresholdSection {
    pub fn due_soon_miles_or_default(&self) -> f64 {
        self.due_soon_miles.unwrap_or(DEFAULT_DUE_SOON_MILES)
    }

    pub fn due_soon_months_or_default(&self) -> f64 {
        self.due_soon_months.unwrap_or(DEFAULT_DUE_SOON_MONTHS)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("MAINT_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn read_config(path: &Path) -> anyhow::Result<MaintConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("maint"));
        }
    }
    Ok(home_dir()?.join(".config").join("maint"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
