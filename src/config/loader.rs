//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading decomposition
//! scheme configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{SalaryConfig, SchemeConfig, SchemeMetadata, StatutoryRevision};

/// Loads and provides access to scheme configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to resolve the calculation configuration in
/// force on a given date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/standard/
/// ├── scheme.yaml          # Scheme metadata
/// └── revisions/
///     └── 2024-04-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
/// let config = loader.config_for(date).unwrap();
/// println!("PF rate: {}", config.pf_percent);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any revision carries a negative ratio, rate or amount
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load scheme.yaml
        let scheme_path = path.join("scheme.yaml");
        let metadata = Self::load_yaml::<SchemeMetadata>(&scheme_path)?;

        // Load all revision files from the revisions directory
        let revisions_dir = path.join("revisions");
        let revisions = Self::load_revisions(&revisions_dir)?;

        for revision in &revisions {
            revision.to_config().validate()?;
        }

        info!(
            scheme = %metadata.code,
            revisions = revisions.len(),
            "Loaded scheme configuration"
        );

        let config = SchemeConfig::new(metadata, revisions);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all revision files from the revisions directory.
    fn load_revisions(revisions_dir: &Path) -> EngineResult<Vec<StatutoryRevision>> {
        let revisions_dir_str = revisions_dir.display().to_string();

        if !revisions_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: revisions_dir_str,
            });
        }

        let entries = fs::read_dir(revisions_dir).map_err(|_| EngineError::ConfigNotFound {
            path: revisions_dir_str.clone(),
        })?;

        let mut revisions = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: revisions_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let revision = Self::load_yaml::<StatutoryRevision>(&path)?;
                revisions.push(revision);
            }
        }

        if revisions.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no revision files found)", revisions_dir_str),
            });
        }

        Ok(revisions)
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Resolves the calculation configuration in force on a given date.
    ///
    /// The method finds the most recent revision that is effective on or
    /// before the given date.
    ///
    /// # Arguments
    ///
    /// * `date` - The date for which to resolve the configuration
    ///
    /// # Returns
    ///
    /// Returns the resolved [`SalaryConfig`], or `RevisionNotFound` if no
    /// revision is effective on or before the date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    /// let config = loader.config_for(date)?;
    /// println!("Professional tax: {}", config.pt);
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn config_for(&self, date: NaiveDate) -> EngineResult<SalaryConfig> {
        self.config
            .revision_for(date)
            .map(StatutoryRevision::to_config)
            .ok_or(EngineError::RevisionNotFound { date })
    }
}
