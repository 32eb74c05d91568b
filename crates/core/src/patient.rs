//! Patient records and the rules for accepting submitted data.
//!
//! Required fields are presence-checked only. Their values are kept verbatim, so `treatments`
//! may be a string, a list, or any other JSON value a client chooses to send.

use crate::{PatientError, PatientResult};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

pub const CUSTOM_FIELDS_KEY: &str = "customFields";

/// A stored patient record.
///
/// The record is held as the JSON object read from the store, so keys this service never
/// writes, explicit `null`s and key order all survive a list or a rewrite. Only `id` is
/// required, and it must be an integer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Patient {
    id: i64,
    record: Map<String, Value>,
}

impl Patient {
    /// Build a new record from validated fields.
    pub fn new(id: i64, fields: PatientFields) -> Self {
        let mut record = Map::new();
        record.insert("room".into(), fields.room);
        record.insert("name".into(), fields.name);
        record.insert("complaint".into(), fields.complaint);
        record.insert("treatments".into(), fields.treatments);
        record.insert("id".into(), Value::from(id));
        if let Some(custom) = fields.custom_fields {
            record.insert(CUSTOM_FIELDS_KEY.into(), custom);
        }
        Self { id, record }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Value stored under `key`, if the record has one.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    pub fn custom_fields(&self) -> Option<&Value> {
        self.get(CUSTOM_FIELDS_KEY)
    }

    /// The record as stored.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.record
    }

    /// Replace the required fields and custom fields in place.
    ///
    /// `id` and any other stored keys keep their values and positions. A field the record lacks
    /// is appended. Custom fields are removed when `fields` carries none.
    pub fn apply(&mut self, fields: PatientFields) {
        self.record.insert("room".into(), fields.room);
        self.record.insert("name".into(), fields.name);
        self.record.insert("complaint".into(), fields.complaint);
        self.record.insert("treatments".into(), fields.treatments);
        match fields.custom_fields {
            Some(custom) => {
                self.record.insert(CUSTOM_FIELDS_KEY.into(), custom);
            }
            None => {
                self.record.shift_remove(CUSTOM_FIELDS_KEY);
            }
        }
    }
}

impl TryFrom<Map<String, Value>> for Patient {
    type Error = PatientError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = record
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| PatientError::InvalidInput("record id must be an integer".into()))?;
        Ok(Self { id, record })
    }
}

impl Serialize for Patient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}
/// Submitted patient data before validation. Unknown keys are discarded on deserialisation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PatientDraft {
    #[serde(default)]
    pub room: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub complaint: Option<Value>,
    #[serde(default)]
    pub treatments: Option<Value>,
    #[serde(rename = "customFields", default)]
    pub custom_fields: Option<Value>,
}

impl PatientDraft {
    /// Read a draft from a JSON value.
    ///
    /// Anything other than a JSON object yields an empty draft, which then fails validation.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => serde_json::from_value(Value::Object(map)).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Read a draft from a raw request body. Malformed JSON yields an empty draft.
    pub fn from_json_slice(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    /// Check the required fields and normalise custom fields.
    ///
    /// # Errors
    ///
    /// Returns `PatientError::MissingRequiredFields` if any of `room`, `name`, `complaint` or
    /// `treatments` is missing or falsy.
    pub fn validate(self) -> PatientResult<PatientFields> {
        fn required(value: Option<Value>) -> PatientResult<Value> {
            value
                .filter(is_truthy)
                .ok_or(PatientError::MissingRequiredFields)
        }

        Ok(PatientFields {
            room: required(self.room)?,
            name: required(self.name)?,
            complaint: required(self.complaint)?,
            treatments: required(self.treatments)?,
            custom_fields: self.custom_fields.filter(has_entries),
        })
    }
}

/// Validated fields ready to be written to a record.
#[derive(Clone, Debug, PartialEq)]
pub struct PatientFields {
    pub room: Value,
    pub name: Value,
    pub complaint: Value,
    pub treatments: Value,
    pub custom_fields: Option<Value>,
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` are falsy, everything else (empty arrays
/// and objects included) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether a custom fields value has at least one entry worth keeping.
pub fn has_entries(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}
