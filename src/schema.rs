use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Error};
use chat_model::pin_event::{FetchPinnedMessagesParams, MessagePinChanged, PinMessageParams};
use chat_model::pin_info::MessagePinInfo;
use schemars::{Schema, schema_for};
use tracing::info;

use crate::codec::ModelKind;

pub fn schema_of(kind: ModelKind) -> Schema {
    match kind {
        ModelKind::PinInfo => schema_for!(MessagePinInfo),
        ModelKind::PinChanged => schema_for!(MessagePinChanged),
        ModelKind::PinMessage => schema_for!(PinMessageParams),
        ModelKind::FetchPinnedMessages => schema_for!(FetchPinnedMessagesParams),
    }
}

/// Write `<model>.schema.json` for every model into `out_dir`.
pub fn write_schema(out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("could not create `{}`", out_dir.display()))?;

    let mut written = Vec::with_capacity(ModelKind::ALL.len());
    for kind in ModelKind::ALL {
        let json = serde_json::to_string_pretty(&schema_of(kind))?;
        let path = out_dir.join(format!("{}.schema.json", kind.as_str()));
        fs::write(&path, json)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_model::ModelToJson;
    use chat_model::pin_event::PinOperation;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn validator(kind: ModelKind) -> jsonschema::Validator {
        let schema = serde_json::to_value(schema_of(kind)).unwrap();
        jsonschema::validator_for(&schema).unwrap()
    }

    #[test]
    fn writes_one_file_per_model() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("schemas");
        let written = write_schema(&out).unwrap();
        assert_eq!(written.len(), ModelKind::ALL.len());
        assert!(out.join("pin-info.schema.json").exists());
        assert!(out.join("fetch-pinned-messages.schema.json").exists());
    }

    #[test]
    fn pin_info_schema_requires_both_fields() {
        let schema: Value = serde_json::to_value(schema_of(ModelKind::PinInfo)).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&Value::from("operatorId")));
        assert!(required.contains(&Value::from("pinTime")));
    }

    #[test]
    fn pin_changed_schema_accepts_wire_events() {
        let validator = validator(ModelKind::PinChanged);
        for op in [PinOperation::Pin, PinOperation::Unpin] {
            let event = MessagePinChanged {
                message_id: "m1".into(),
                conversation_id: "c1".into(),
                pin_operation: op,
                pin_info: MessagePinInfo::new("u1", 1_700_000_000_000),
            };
            let wire = event.to_value();
            assert!(validator.is_valid(&wire), "schema rejected {wire}");
        }

        let mut named = MessagePinChanged {
            message_id: "m1".into(),
            conversation_id: "c1".into(),
            pin_operation: PinOperation::Pin,
            pin_info: MessagePinInfo::new("u1", 1),
        }
        .to_value();
        named["pinOperation"] = json!("Pin");
        assert!(!validator.is_valid(&named));
        named["pinOperation"] = json!(2);
        assert!(!validator.is_valid(&named));
    }

    #[test]
    fn call_param_schemas_accept_wire_maps() {
        let pin = PinMessageParams { msg_id: "m1".into() }.to_value();
        assert!(validator(ModelKind::PinMessage).is_valid(&pin));

        let fetch = FetchPinnedMessagesParams { conv_id: "c1".into() }.to_value();
        assert!(validator(ModelKind::FetchPinnedMessages).is_valid(&fetch));

        let info = MessagePinInfo::new("u1", 7).to_value();
        assert!(validator(ModelKind::PinInfo).is_valid(&info));
        assert!(!validator(ModelKind::PinInfo).is_valid(&json!({"operatorId": "u1"})));
    }
}
