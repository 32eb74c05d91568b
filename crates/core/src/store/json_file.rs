//! Patient store backed by a single JSON file.
//!
//! The file holds one JSON array of records. Every operation reads the whole file, works on the
//! parsed array and, for mutations, overwrites the whole file with a pretty-printed copy:
//!
//! ```text
//! [
//!   {
//!     "room": "12A",
//!     "name": "Jane Doe",
//!     "complaint": "fever",
//!     "treatments": "ibuprofen",
//!     "id": 1718000000000
//!   }
//! ]
//! ```
//!
//! A mutex held across the read-modify-write sequence keeps writers in this process from
//! clobbering each other. Other processes writing the same file are not coordinated.

use super::RecordBackend;
use crate::config::CoreConfig;
use crate::constants::EMPTY_STORE;
use crate::ids::IdGenerator;
use crate::patient::Patient;
use crate::{PatientError, PatientResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    ids: IdGenerator,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating it with an empty array if it does not exist.
    ///
    /// An existing file is left as it is and only parsed on first use.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::FileRead` if the file's presence cannot be determined, or
    /// `PatientError::FileWrite` if the empty store cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> PatientResult<Self> {
        let path = path.into();

        match fs::metadata(&path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::write(&path, EMPTY_STORE).map_err(PatientError::FileWrite)?;
                tracing::info!("initialised empty patient store at {}", path.display());
            }
            Err(e) => return Err(PatientError::FileRead(e)),
        }

        Ok(Self {
            path,
            ids: IdGenerator::new(),
            lock: Mutex::new(()),
        })
    }

    /// Opens the store named by `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> PatientResult<Self> {
        Self::open(cfg.patient_data_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> PatientResult<Vec<Patient>> {
        let contents = fs::read_to_string(&self.path).map_err(PatientError::FileRead)?;
        serde_json::from_str(&contents).map_err(PatientError::Deserialization)
    }

    fn save(&self, patients: &[Patient]) -> PatientResult<()> {
        let json = serde_json::to_string_pretty(patients).map_err(PatientError::Serialization)?;
        fs::write(&self.path, json).map_err(PatientError::FileWrite)?;
        tracing::debug!(
            "wrote {} patient(s) to {}",
            patients.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl RecordBackend for JsonFileStore {
    fn read_all(&self) -> PatientResult<Vec<Patient>> {
        let _guard = self.lock.lock().map_err(|_| PatientError::StoreUnavailable)?;
        self.load()
    }

    fn modify<R, F>(&self, f: F) -> PatientResult<R>
    where
        F: FnOnce(&mut Vec<Patient>) -> PatientResult<R>,
    {
        let _guard = self.lock.lock().map_err(|_| PatientError::StoreUnavailable)?;
        let mut patients = self.load()?;
        let result = f(&mut patients)?;
        self.save(&patients)?;
        Ok(result)
    }

    fn ids(&self) -> &IdGenerator {
        &self.ids
    }
}
