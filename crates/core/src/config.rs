//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store. Request
//! handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_PATIENT_DATA_FILE, DEFAULT_STATIC_DIR};
use crate::{PatientError, PatientResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    patient_data_file: PathBuf,
    static_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::InvalidInput` if `patient_data_file` is empty.
    pub fn new(patient_data_file: PathBuf, static_dir: Option<PathBuf>) -> PatientResult<Self> {
        if patient_data_file.as_os_str().is_empty() {
            return Err(PatientError::InvalidInput(
                "patient data file cannot be empty".into(),
            ));
        }

        Ok(Self {
            patient_data_file,
            static_dir,
        })
    }

    /// Build a configuration from optional raw values, typically environment variables.
    ///
    /// A missing or whitespace-only data file falls back to [`DEFAULT_PATIENT_DATA_FILE`].
    /// A missing static directory falls back to [`DEFAULT_STATIC_DIR`]; an empty one disables
    /// static file serving.
    pub fn from_env_values(
        patient_data_file: Option<String>,
        static_dir: Option<String>,
    ) -> PatientResult<Self> {
        let patient_data_file = patient_data_file
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PATIENT_DATA_FILE.into());

        let static_dir = match static_dir {
            None => Some(PathBuf::from(DEFAULT_STATIC_DIR)),
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(PathBuf::from(v.trim())),
        };

        Self::new(PathBuf::from(patient_data_file), static_dir)
    }

    pub fn patient_data_file(&self) -> &Path {
        &self.patient_data_file
    }

    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_data_file() {
        let err = CoreConfig::new(PathBuf::new(), None).expect_err("empty path should fail");
        assert!(matches!(err, PatientError::InvalidInput(_)));
    }

    #[test]
    fn test_from_env_values_uses_defaults() {
        let cfg = CoreConfig::from_env_values(None, None).expect("defaults should be valid");
        assert_eq!(cfg.patient_data_file(), Path::new(DEFAULT_PATIENT_DATA_FILE));
        assert_eq!(cfg.static_dir(), Some(Path::new(DEFAULT_STATIC_DIR)));
    }

    #[test]
    fn test_from_env_values_blank_data_file_falls_back() {
        let cfg = CoreConfig::from_env_values(Some("   ".into()), Some("public".into()))
            .expect("blank data file should fall back to default");
        assert_eq!(cfg.patient_data_file(), Path::new(DEFAULT_PATIENT_DATA_FILE));
        assert_eq!(cfg.static_dir(), Some(Path::new("public")));
    }

    #[test]
    fn test_from_env_values_empty_static_dir_disables_serving() {
        let cfg = CoreConfig::from_env_values(Some("ward.json".into()), Some(String::new()))
            .expect("config should be valid");
        assert_eq!(cfg.patient_data_file(), Path::new("ward.json"));
        assert_eq!(cfg.static_dir(), None);
    }
}
