//! Application context for the maint CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use maint_core::store::{load_doc, VehicleDoc};
use maint_core::Vehicle;

use crate::cli::Cli;
use crate::config::{read_config, resolve_config_path, MaintConfig};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<MaintConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn config(&self) -> anyhow::Result<&MaintConfig> {
        self.config.get_or_try_init(|| {
            let config_path = resolve_config_path()?;
            if config_path.exists() {
                read_config(&config_path)
            } else {
                Ok(MaintConfig::default())
            }
        })
    }

    /// Resolve the vehicle file path: --vehicle flag (or MAINT_VEHICLE
    /// env, handled by clap) first, then the config file default.
    pub fn vehicle_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref path) = self.cli.vehicle {
            return Ok(PathBuf::from(path));
        }
        if let Some(ref path) = self.config()?.vehicle.path {
            return Ok(PathBuf::from(path));
        }
        Err(anyhow::anyhow!(
            "No vehicle file provided.\nHint: pass --vehicle, set MAINT_VEHICLE, or add a [vehicle] path to the config file."
        ))
    }

    /// Load the vehicle document for editing, along with its path.
    pub fn load_doc(&self) -> anyhow::Result<(PathBuf, VehicleDoc)> {
        let path = self.vehicle_path()?;
        let doc = load_doc(&path)?;
        Ok((path, doc))
    }

    /// Load the vehicle ready for evaluation.
    pub fn load_vehicle(&self) -> anyhow::Result<Vehicle> {
        let (_, doc) = self.load_doc()?;
        Ok(doc.to_vehicle())
    }

    /// Effective due-soon mileage threshold: flag, else config, else default.
    pub fn due_soon_miles(&self, flag: Option<f64>) -> anyhow::Result<f64> {
        match flag {
            Some(miles) => Ok(miles),
            None => Ok(self.config()?.thresholds.due_soon_miles_or_default()),
        }
    }

    /// Effective due-soon month threshold: flag, else config, else default.
    pub fn due_soon_months(&self, flag: Option<f64>) -> anyhow::Result<f64> {
        match flag {
            Some(months) => Ok(months),
            None => Ok(self.config()?.thresholds.due_soon_months_or_default()),
        }
    }
}
