//! Runs the `chat_model` codecs over whole JSON documents for the CLI.

use anyhow::{Context, Result};
use chat_model::ModelError;
use chat_model::model_json::{ModelFromJson, ModelToJson};
use chat_model::pin_event::{FetchPinnedMessagesParams, MessagePinChanged, PinMessageParams};
use chat_model::pin_info::MessagePinInfo;
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// The models the CLI knows how to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ModelKind {
    PinInfo,
    PinChanged,
    PinMessage,
    FetchPinnedMessages,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::PinInfo,
        ModelKind::PinChanged,
        ModelKind::PinMessage,
        ModelKind::FetchPinnedMessages,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ModelKind::PinInfo => "pin-info",
            ModelKind::PinChanged => "pin-changed",
            ModelKind::PinMessage => "pin-message",
            ModelKind::FetchPinnedMessages => "fetch-pinned-messages",
        }
    }
}

/// Turn a typed document (the model's serde layout) into its wire map.
pub fn encode_document(kind: ModelKind, input: &str) -> Result<Value> {
    debug!(model = kind.as_str(), "encoding document");
    match kind {
        ModelKind::PinInfo => encode_as::<MessagePinInfo>(input),
        ModelKind::PinChanged => encode_as::<MessagePinChanged>(input),
        ModelKind::PinMessage => encode_as::<PinMessageParams>(input),
        ModelKind::FetchPinnedMessages => encode_as::<FetchPinnedMessagesParams>(input),
    }
}

/// Validate a wire map and return its canonical re-encoding.
pub fn decode_document(kind: ModelKind, input: &str) -> Result<Value, ModelError> {
    debug!(model = kind.as_str(), "decoding document");
    let decoded = match kind {
        ModelKind::PinInfo => decode_as::<MessagePinInfo>(input),
        ModelKind::PinChanged => decode_as::<MessagePinChanged>(input),
        ModelKind::PinMessage => decode_as::<PinMessageParams>(input),
        ModelKind::FetchPinnedMessages => decode_as::<FetchPinnedMessagesParams>(input),
    };
    if let Err(err) = &decoded {
        warn!(model = kind.as_str(), %err, "rejected input");
    }
    decoded
}

fn encode_as<T>(input: &str) -> Result<Value>
where
    T: DeserializeOwned + ModelToJson,
{
    let model: T = serde_json::from_str(input)
        .with_context(|| format!("input is not a valid {}", std::any::type_name::<T>()))?;
    Ok(model.to_value())
}

fn decode_as<T>(input: &str) -> Result<Value, ModelError>
where
    T: ModelFromJson + ModelToJson,
{
    Ok(T::from_json_str(input)?.to_value())
}
