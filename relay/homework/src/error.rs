use clients_practicum::RequestFailedError;
use thiserror::Error;

/// The review API answered with JSON of an unexpected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("expected a JSON object, got {found}")]
    NotAMapping { found: &'static str },

    #[error("the \"{0}\" key is missing")]
    MissingField(&'static str),

    #[error("the \"{field}\" key should contain {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown homework status \"{0}\"")]
    UnknownStatus(String),
}

/// Anything that can abort a poll cycle. Send failures never show up here.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Request(#[from] RequestFailedError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// JSON type name for error messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
