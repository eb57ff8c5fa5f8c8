use serde_json::Value;

use crate::error::{json_type, SchemaError};

/// Review API answer that passed the shape checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    /// Homework records in server order, still untyped
    pub homeworks: Vec<Value>,
    /// Server time of the answer; the next request's `from_date`
    pub current_date: i64,
}

/// Checks that `body` is an object with a `homeworks` list and an integer `current_date`.
pub fn check_response(body: Value) -> Result<ValidatedResponse, SchemaError> {
    let mut map = match body {
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::NotAMapping {
                found: json_type(&other),
            })
        }
    };

    let homeworks = map
        .remove("homeworks")
        .ok_or(SchemaError::MissingField("homeworks"))?;
    let current_date = map
        .remove("current_date")
        .ok_or(SchemaError::MissingField("current_date"))?;

    let homeworks = match homeworks {
        Value::Array(items) => items,
        other => {
            return Err(SchemaError::WrongType {
                field: "homeworks",
                expected: "a list",
                found: json_type(&other),
            })
        }
    };

    let current_date = current_date.as_i64().ok_or(SchemaError::WrongType {
        field: "current_date",
        expected: "an integer timestamp",
        found: json_type(&current_date),
    })?;

    Ok(ValidatedResponse {
        homeworks,
        current_date,
    })
}
