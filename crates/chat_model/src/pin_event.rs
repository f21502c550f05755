//! Models that carry pin information across the boundary: the pin-changed
//! event and the argument maps of the pin/unpin/fetch calls.

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ModelError;
use crate::model_json::{
    JsonMap, ModelFromJson, ModelToJson, require_i64, require_object, require_str,
};
use crate::pin_info::MessagePinInfo;

pub const MESSAGE_ID: &str = "messageId";
pub const CONVERSATION_ID: &str = "conversationId";
pub const PIN_OPERATION: &str = "pinOperation";
pub const PIN_INFO: &str = "pinInfo";
pub const MSG_ID: &str = "msgId";
pub const CONV_ID: &str = "convId";

/// Sent on the wire as its ordinal, in serde and JSON Schema alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum PinOperation {
    Pin,
    Unpin,
}

impl PinOperation {
    pub const fn ordinal(self) -> i64 {
        match self {
            PinOperation::Pin => 0,
            PinOperation::Unpin => 1,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(PinOperation::Pin),
            1 => Some(PinOperation::Unpin),
            _ => None,
        }
    }
}

impl From<PinOperation> for i64 {
    fn from(op: PinOperation) -> i64 {
        op.ordinal()
    }
}

impl TryFrom<i64> for PinOperation {
    type Error = ModelError;

    fn try_from(ordinal: i64) -> Result<Self, Self::Error> {
        PinOperation::from_ordinal(ordinal).ok_or_else(|| ModelError::MalformedInput {
            key: PIN_OPERATION.to_string(),
            reason: format!("unknown pin operation {ordinal}"),
        })
    }
}

impl JsonSchema for PinOperation {
    fn schema_name() -> Cow<'static, str> {
        "PinOperation".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "0 = pin, 1 = unpin",
            "type": "integer",
            "enum": [0, 1]
        })
    }
}

/// Emitted when a message becomes pinned or unpinned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessagePinChanged {
    pub message_id: String,
    pub conversation_id: String,
    pub pin_operation: PinOperation,
    pub pin_info: MessagePinInfo,
}

impl ModelToJson for MessagePinChanged {
    fn to_json(&self) -> JsonMap {
        let mut map = JsonMap::new();
        map.insert(MESSAGE_ID.to_string(), json!(self.message_id));
        map.insert(CONVERSATION_ID.to_string(), json!(self.conversation_id));
        map.insert(PIN_OPERATION.to_string(), json!(self.pin_operation.ordinal()));
        map.insert(PIN_INFO.to_string(), self.pin_info.to_value());
        map
    }
}

impl ModelFromJson for MessagePinChanged {
    fn from_json(map: &JsonMap) -> Result<Self, ModelError> {
        let pin_operation = PinOperation::try_from(require_i64(map, PIN_OPERATION)?)?;
        let pin_info = MessagePinInfo::from_json(require_object(map, PIN_INFO)?)
            .map_err(|err| err.nested(PIN_INFO))?;

        Ok(Self {
            message_id: require_str(map, MESSAGE_ID)?,
            conversation_id: require_str(map, CONVERSATION_ID)?,
            pin_operation,
            pin_info,
        })
    }
}

/// Arguments of both the pin and unpin calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PinMessageParams {
    pub msg_id: String,
}

impl ModelToJson for PinMessageParams {
    fn to_json(&self) -> JsonMap {
        let mut map = JsonMap::new();
        map.insert(MSG_ID.to_string(), json!(self.msg_id));
        map
    }
}

impl ModelFromJson for PinMessageParams {
    fn from_json(map: &JsonMap) -> Result<Self, ModelError> {
        Ok(Self {
            msg_id: require_str(map, MSG_ID)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FetchPinnedMessagesParams {
    pub conv_id: String,
}

impl ModelToJson for FetchPinnedMessagesParams {
    fn to_json(&self) -> JsonMap {
        let mut map = JsonMap::new();
        map.insert(CONV_ID.to_string(), json!(self.conv_id));
        map
    }
}

impl ModelFromJson for FetchPinnedMessagesParams {
    fn from_json(map: &JsonMap) -> Result<Self, ModelError> {
        Ok(Self {
            conv_id: require_str(map, CONV_ID)?,
        })
    }
}
