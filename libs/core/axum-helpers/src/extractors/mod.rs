//! Extractors whose rejections are rendered as error envelopes.

pub mod json_body;
pub mod query_params;
pub mod uuid_path;
pub mod validated_json;

pub use json_body::JsonBody;
pub use query_params::QueryParams;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
