use thiserror::Error;

use crate::model_json::ROOT_KEY;

/// Errors a model codec can return while decoding.
///
/// Encoding never fails: a constructed model is always representable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required key is missing or holds a value of the wrong type.
    #[error("malformed input at `{key}`: {reason}")]
    MalformedInput { key: String, reason: String },

    /// The input text was not JSON at all.
    #[error("JSON error: {0}")]
    Json(String),
}

impl ModelError {
    pub fn missing(key: impl Into<String>) -> Self {
        ModelError::MalformedInput {
            key: key.into(),
            reason: "required key is missing".to_string(),
        }
    }

    pub fn wrong_type(key: impl Into<String>, expected: &str) -> Self {
        ModelError::MalformedInput {
            key: key.into(),
            reason: format!("expected {expected}"),
        }
    }

    /// The offending key, if this is a `MalformedInput`.
    pub fn key(&self) -> Option<&str> {
        match self {
            ModelError::MalformedInput { key, .. } => Some(key),
            ModelError::Json(_) => None,
        }
    }

    /// Re-roots the offending key under `parent`, e.g. `pinTime` -> `pinInfo.pinTime`.
    pub fn nested(self, parent: &str) -> Self {
        match self {
            ModelError::MalformedInput { key, reason } if key == ROOT_KEY => ModelError::MalformedInput {
                key: parent.to_string(),
                reason,
            },
            ModelError::MalformedInput { key, reason } => ModelError::MalformedInput {
                key: format!("{parent}.{key}"),
                reason,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> ModelError {
        ModelError::Json(err.to_string())
    }
}
