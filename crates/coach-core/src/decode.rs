//! Collection envelope decoding.
//!
//! List endpoints answer in several shapes: a bare array, `{data: [...]}`,
//! `{plans: [...]}`, `{meals: [...]}` and so on. Responses are classified
//! once here so callers only ever see typed records. Unknown shapes fail in
//! [`DecodeMode::Strict`] and degrade to an empty list, with a warning, in
//! [`DecodeMode::Lenient`].

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AdminError, Result};

/// Object keys that may carry a collection, in lookup order.
pub const COLLECTION_KEYS: &[&str] = &[
    "data",
    "items",
    "plans",
    "meals",
    "supplements",
    "workouts",
];

/// How to treat responses that match no known envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Unknown shapes and undecodable records are errors.
    Strict,
    /// Unknown shapes become empty lists and bad records are skipped.
    Lenient,
}

impl Default for DecodeMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

impl DecodeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(format!("Invalid decode mode: {s}")),
        }
    }
}

/// A recognized collection response.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Bare(Vec<Value>),
    Keyed { key: &'static str, records: Vec<Value> },
}

impl Envelope {
    /// Classifies a response body.
    pub fn classify(value: Value) -> Result<Self> {
        match value {
            Value::Array(records) => Ok(Self::Bare(records)),
            Value::Object(mut map) => {
                for key in COLLECTION_KEYS {
                    if matches!(map.get(*key), Some(Value::Array(_))) {
                        if let Some(Value::Array(records)) = map.remove(*key) {
                            return Ok(Self::Keyed { key, records });
                        }
                    }
                }
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                Err(AdminError::UnexpectedShape {
                    found: format!("object with keys [{}]", keys.join(", ")),
                })
            }
            other => Err(AdminError::UnexpectedShape {
                found: describe(&other).to_string(),
            }),
        }
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::Bare(records) | Self::Keyed { records, .. } => records,
        }
    }
}

/// Decodes a collection response into typed records.
pub fn decode_collection<T: DeserializeOwned>(value: Value, mode: DecodeMode) -> Result<Vec<T>> {
    let records = match Envelope::classify(value) {
        Ok(envelope) => envelope.into_records(),
        Err(error) if mode == DecodeMode::Lenient => {
            warn!("Treating unrecognized collection as empty: {error}");
            return Ok(Vec::new());
        }
        Err(error) => return Err(error),
    };

    let mut decoded = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value(record) {
            Ok(item) => decoded.push(item),
            Err(source) if mode == DecodeMode::Strict => {
                return Err(AdminError::Decode {
                    what: format!("record {index}"),
                    source,
                })
            }
            Err(source) => warn!("Skipping undecodable record {index}: {source}"),
        }
    }
    Ok(decoded)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
