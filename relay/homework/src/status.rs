use std::str::FromStr;

use serde_json::Value;

use crate::error::{json_type, SchemaError};

/// Review verdict of a homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Sentence shown to the student for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(SchemaError::UnknownStatus(other.to_string())),
        }
    }
}

/// Builds the notification text for one homework record.
pub fn parse_status(record: &Value) -> Result<String, SchemaError> {
    let record = record.as_object().ok_or(SchemaError::NotAMapping {
        found: json_type(record),
    })?;

    let name = record
        .get("homework_name")
        .ok_or(SchemaError::MissingField("homework_name"))?;
    let name = name.as_str().ok_or(SchemaError::WrongType {
        field: "homework_name",
        expected: "a string",
        found: json_type(name),
    })?;

    let status = record
        .get("status")
        .ok_or(SchemaError::MissingField("status"))?;
    let status: HomeworkStatus = match status {
        Value::String(s) => s.parse()?,
        other => return Err(SchemaError::UnknownStatus(other.to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
