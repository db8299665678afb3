//! Remembers the last warm-up percentage list between runs.
//!
//! The list is stored as a JSON array of fractions. Reading never fails: a missing,
//! unreadable or malformed file yields the caller's fallback list.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{calculator_error::CalculatorError, warmup::WarmupPercentages};

const APP_DIR: &str = "barbell-rs";
const FILE_NAME: &str = "warmup.json";

#[derive(Clone, Debug)]
pub struct PercentageStore {
    path: PathBuf,
}

impl PercentageStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PercentageStore { path: path.into() }
    }

    /// Store in the platform config directory, e.g. `~/.config/barbell-rs/warmup.json`.
    ///
    /// # Errors
    /// If the platform has no config directory.
    pub fn default_location() -> Result<Self, CalculatorError> {
        let dir = dirs::config_dir().ok_or(CalculatorError::NoConfigDir)?;
        Ok(PercentageStore::new(dir.join(APP_DIR).join(FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored list, or `fallback` when nothing usable is stored.
    #[must_use]
    pub fn load_or(&self, fallback: &WarmupPercentages) -> WarmupPercentages {
        match self.try_load() {
            Ok(Some(percentages)) => percentages,
            Ok(None) => fallback.clone(),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ignoring stored warm-up percentages"
                );
                fallback.clone()
            }
        }
    }

    fn try_load(&self) -> Result<Option<WarmupPercentages>, CalculatorError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored warm-up percentages");
                return Ok(None);
            }
            Err(source) => {
                return Err(CalculatorError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(Some(serde_json::from_str::<WarmupPercentages>(&content)?))
    }

    ///
    /// # Errors
    /// If the directory cannot be created or the file cannot be written.
    ///
    pub fn save(&self, percentages: &WarmupPercentages) -> Result<(), CalculatorError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CalculatorError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(percentages)?;
        std::fs::write(&self.path, content).map_err(|source| CalculatorError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), %percentages, "saved warm-up percentages");
        Ok(())
    }
}
