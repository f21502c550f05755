pub mod codec;
pub mod config;
pub mod logger;
pub mod schema;
