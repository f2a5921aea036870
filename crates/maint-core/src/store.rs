//! The on-disk vehicle document and its read-modify-write operations.
//!
//! A vehicle file is a single YAML document with named sections
//! (`car`, `state`, `rules`, `history`). Edits operate on the typed
//! in-memory [`VehicleDoc`] and are written back wholesale with an
//! atomic temp-file rename; the evaluation aggregate is rebuilt from the
//! saved document on the next load.

use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MaintError, Result};
use crate::model::{Car, HistoryEntry, Rule};
use crate::vehicle::Vehicle;

/// Explicit state overrides stored alongside the car record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_date: Option<NaiveDate>,
}

/// The complete vehicle document as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDoc {
    pub car: Car,
    #[serde(default)]
    pub state: VehicleState,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rules: Vec<Rule>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<HistoryEntry>,
}

/// Hand-written files sometimes carry `history:` with no entries, which
/// YAML parses as null rather than an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl VehicleDoc {
    /// Fresh document for a newly tracked vehicle. State starts at the
    /// purchase mileage unless an explicit override is given.
    pub fn new(car: Car, current_miles: Option<f64>, as_of_date: Option<NaiveDate>) -> Self {
        let state = VehicleState {
            current_miles: current_miles.or(Some(car.purchase_miles)),
            as_of_date,
        };
        Self {
            car,
            state,
            rules: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Materialize the evaluation aggregate.
    pub fn to_vehicle(&self) -> Vehicle {
        Vehicle::new(
            self.car.clone(),
            self.rules.clone(),
            self.history.clone(),
            self.state.current_miles,
            self.state.as_of_date,
        )
    }

    pub fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn replace_rule(&mut self, index: usize, rule: Rule) -> Result<()> {
        let len = self.rules.len();
        let slot = self
            .rules
            .get_mut(index)
            .ok_or(MaintError::IndexOutOfRange {
                list: "rule",
                index,
                len,
            })?;
        *slot = rule;
        Ok(())
    }

    pub fn remove_rule(&mut self, index: usize) -> Result<Rule> {
        if index >= self.rules.len() {
            return Err(MaintError::IndexOutOfRange {
                list: "rule",
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    pub fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    pub fn replace_history(&mut self, index: usize, entry: HistoryEntry) -> Result<()> {
        let len = self.history.len();
        let slot = self
            .history
            .get_mut(index)
            .ok_or(MaintError::IndexOutOfRange {
                list: "history",
                index,
                len,
            })?;
        *slot = entry;
        Ok(())
    }

    pub fn remove_history(&mut self, index: usize) -> Result<HistoryEntry> {
        if index >= self.history.len() {
            return Err(MaintError::IndexOutOfRange {
                list: "history",
                index,
                len: self.history.len(),
            });
        }
        Ok(self.history.remove(index))
    }

    pub fn set_current_miles(&mut self, miles: f64) {
        self.state.current_miles = Some(miles);
    }

    pub fn set_as_of_date(&mut self, date: NaiveDate) {
        self.state.as_of_date = Some(date);
    }

    pub fn update_car(&mut self, car: Car) {
        self.car = car;
    }
}

/// Load a vehicle document from a YAML file.
pub fn load_doc(path: &Path) -> Result<VehicleDoc> {
    let contents = fs::read_to_string(path)
        .map_err(|err| MaintError::Storage(format!("{}: {}", path.display(), err)))?;
    let doc = serde_yaml::from_str(&contents)
        .map_err(|err| MaintError::Document(format!("{}: {}", path.display(), err)))?;
    Ok(doc)
}

/// Write a vehicle document back to disk atomically.
pub fn save_doc(path: &Path, doc: &VehicleDoc) -> Result<()> {
    let contents = serde_yaml::to_string(doc)?;
    let temp_path = path.with_extension("yaml.tmp");
    fs::write(&temp_path, contents)
        .map_err(|err| MaintError::Storage(format!("{}: {}", temp_path.display(), err)))?;
    rename_with_fallback(&temp_path, path)?;
    Ok(())
}

/// Load a vehicle ready for evaluation.
pub fn load_vehicle(path: &Path) -> Result<Vehicle> {
    Ok(load_doc(path)?.to_vehicle())
}

/// Create a new vehicle file with empty rules and history.
pub fn create_vehicle(
    path: &Path,
    car: Car,
    current_miles: Option<f64>,
    as_of_date: Option<NaiveDate>,
) -> Result<()> {
    if path.exists() {
        return Err(MaintError::InvalidInput(format!(
            "vehicle file already exists: {}",
            path.display()
        )));
    }
    save_doc(path, &VehicleDoc::new(car, current_miles, as_of_date))
}

/// Remove a vehicle file from disk.
pub fn delete_vehicle(path: &Path) -> Result<()> {
    fs::remove_file(path)
        .map_err(|err| MaintError::Storage(format!("{}: {}", path.display(), err)))?;
    Ok(())
}

/// Atomically rename a file, with fallback for platforms where rename
/// fails if the target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the
/// destination already exists. This function handles that case by removing
/// the destination first and retrying. If the rename ultimately fails, the
/// temp file is cleaned up.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
