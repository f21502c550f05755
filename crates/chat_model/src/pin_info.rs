use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ModelError;
use crate::model_json::{JsonMap, ModelFromJson, ModelToJson, require_i64, require_str};

pub const OPERATOR_ID: &str = "operatorId";
pub const PIN_TIME: &str = "pinTime";

/// Who pinned a message, and when.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessagePinInfo {
    pub operator_id: String, // user that pinned the message
    pub pin_time: i64,       // ms since epoch
}

impl MessagePinInfo {
    pub fn new(operator_id: impl Into<String>, pin_time: i64) -> Self {
        Self {
            operator_id: operator_id.into(),
            pin_time,
        }
    }

    /// `pin_time` as a UTC timestamp, `None` if it is outside chrono's range.
    pub fn pinned_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.pin_time)
    }
}

impl ModelToJson for MessagePinInfo {
    fn to_json(&self) -> JsonMap {
        let mut map = JsonMap::new();
        map.insert(OPERATOR_ID.to_string(), json!(self.operator_id));
        map.insert(PIN_TIME.to_string(), json!(self.pin_time));
        map
    }
}

impl ModelFromJson for MessagePinInfo {
    fn from_json(map: &JsonMap) -> Result<Self, ModelError> {
        Ok(Self {
            operator_id: require_str(map, OPERATOR_ID)?,
            pin_time: require_i64(map, PIN_TIME)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn obj(value: Value) -> JsonMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn encode_uses_wire_keys_only() {
        let info = MessagePinInfo::new("u1", 1_700_000_000_000);
        assert_eq!(
            info.to_value(),
            json!({"operatorId": "u1", "pinTime": 1_700_000_000_000i64})
        );
        assert_eq!(info.to_json().len(), 2);
    }

    #[test]
    fn decode_populates_fields() {
        let info = MessagePinInfo::from_json(&obj(json!({
            "operatorId": "u1",
            "pinTime": 1_700_000_000_000i64
        })))
        .unwrap();
        assert_eq!(info.operator_id, "u1");
        assert_eq!(info.pin_time, 1_700_000_000_000);
    }

    #[test]
    fn decode_empty_map_fails() {
        let err = MessagePinInfo::from_json(&JsonMap::new()).unwrap_err();
        assert!(matches!(err, ModelError::MalformedInput { .. }));
        assert_eq!(err.key(), Some(OPERATOR_ID));
    }

    #[test]
    fn decode_missing_pin_time_fails() {
        let err = MessagePinInfo::from_json(&obj(json!({"operatorId": "u1"}))).unwrap_err();
        assert_eq!(err, ModelError::missing(PIN_TIME));
    }

    #[test]
    fn decode_rejects_wrong_types() {
        for bad in [
            json!({"operatorId": 7, "pinTime": 1}),
            json!({"operatorId": "u1", "pinTime": "1"}),
            json!({"operatorId": "u1", "pinTime": 1.25}),
            json!({"operatorId": "u1", "pinTime": true}),
        ] {
            let err = MessagePinInfo::from_value(&bad).unwrap_err();
            assert!(matches!(err, ModelError::MalformedInput { .. }), "{bad} -> {err:?}");
        }
    }

    #[test]
    fn decode_ignores_unknown_keys() {
        let info = MessagePinInfo::from_value(&json!({
            "operatorId": "u2",
            "pinTime": 5,
            "extra": "ignored"
        }))
        .unwrap();
        assert_eq!(info, MessagePinInfo::new("u2", 5));
        assert!(!info.to_json().contains_key("extra"));
    }

    #[test]
    fn round_trips_both_ways() {
        let info = MessagePinInfo::new("operator", -42);
        assert_eq!(MessagePinInfo::from_json(&info.to_json()).unwrap(), info);

        let map = obj(json!({"operatorId": "u1", "pinTime": 1_700_000_000_000i64}));
        assert_eq!(MessagePinInfo::from_json(&map).unwrap().to_json(), map);
    }

    #[test]
    fn serde_layout_matches_wire_map() {
        let info = MessagePinInfo::new("u1", 10);
        assert_eq!(serde_json::to_value(&info).unwrap(), info.to_value());
    }

    #[test]
    fn pinned_at_converts_millis() {
        let info = MessagePinInfo::new("u1", 1_700_000_000_000);
        assert_eq!(info.pinned_at().unwrap().timestamp(), 1_700_000_000);
        assert!(MessagePinInfo::new("u1", i64::MAX).pinned_at().is_none());
    }
}
