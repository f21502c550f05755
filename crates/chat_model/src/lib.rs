pub mod error;
pub mod model_json;
pub mod pin_event;
pub mod pin_info;

pub use error::ModelError;
pub use model_json::{JsonMap, ModelFromJson, ModelToJson};
pub use pin_info::MessagePinInfo;
