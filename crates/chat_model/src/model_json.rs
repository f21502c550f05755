//! The model <-> JSON map capability shared by every chat model.
//!
//! Each model implements [`ModelToJson`] to produce its wire map and
//! [`ModelFromJson`] to rebuild itself from one. `ModelToJson` is object safe,
//! so callers holding a mixed bag of models can hand them to [`encode_all`]
//! without knowing their concrete types.
//!
//! ```
//! use chat_model::model_json::{ModelFromJson, ModelToJson};
//! use chat_model::pin_info::MessagePinInfo;
//!
//! let info = MessagePinInfo::new("u1", 1_700_000_000_000);
//! let map = info.to_json();
//! assert_eq!(MessagePinInfo::from_json(&map).unwrap(), info);
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ModelError;

/// String-keyed, loosely-typed map as it crosses the boundary.
pub type JsonMap = Map<String, Value>;

/// Key used in errors that refer to the whole input rather than one field.
pub const ROOT_KEY: &str = "$";

pub trait ModelToJson: Send + Sync {
    fn to_json(&self) -> JsonMap;

    fn to_value(&self) -> Value {
        Value::Object(self.to_json())
    }
}

pub trait ModelFromJson: Sized {
    fn from_json(map: &JsonMap) -> Result<Self, ModelError>;

    fn from_value(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Self::from_json(map),
            _ => Err(ModelError::wrong_type(ROOT_KEY, "object")),
        }
    }

    fn from_json_str(text: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}

// -----------------------------------------------------------------------------
// Dispatcher
// -----------------------------------------------------------------------------

/// Encode a heterogeneous collection of models, preserving order.
pub fn encode_all(models: &[&dyn ModelToJson]) -> Vec<Value> {
    models.iter().map(|m| m.to_value()).collect()
}

/// Decode a list of wire maps into `T`, stopping at the first malformed entry.
///
/// The error key is prefixed with the entry index, e.g. `[2].pinTime`.
pub fn decode_all<T: ModelFromJson>(values: &[Value]) -> Result<Vec<T>, ModelError> {
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            T::from_value(value).map_err(|err| {
                debug!(index = idx, %err, "rejected list entry");
                err.nested(&format!("[{idx}]"))
            })
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Field extraction
// -----------------------------------------------------------------------------

pub fn require<'a>(map: &'a JsonMap, key: &str) -> Result<&'a Value, ModelError> {
    match map.get(key) {
        // null counts as absent
        None | Some(Value::Null) => Err(ModelError::missing(key)),
        Some(value) => Ok(value),
    }
}

pub fn require_str(map: &JsonMap, key: &str) -> Result<String, ModelError> {
    require(map, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ModelError::wrong_type(key, "string"))
}

pub fn require_i64(map: &JsonMap, key: &str) -> Result<i64, ModelError> {
    match require(map, key)? {
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(v),
            None if n.is_u64() => Err(ModelError::MalformedInput {
                key: key.to_string(),
                reason: "integer out of range".to_string(),
            }),
            None => Err(ModelError::wrong_type(key, "integer")),
        },
        _ => Err(ModelError::wrong_type(key, "integer")),
    }
}

pub fn require_object<'a>(map: &'a JsonMap, key: &str) -> Result<&'a JsonMap, ModelError> {
    require(map, key)?
        .as_object()
        .ok_or_else(|| ModelError::wrong_type(key, "object"))
}
