// crates/agriverse-core/src/error.rs

use serde::Serialize;
use thiserror::Error;

/// Error type shared by every Agriverse calculator.
///
/// Serializes externally tagged in camelCase, e.g.
/// `{"invalidInput":{"field":"periodDays","reason":"..."}}`.
#[derive(Debug, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AgriverseError {
    /// A numeric input fell outside its documented domain.
    ///
    /// `field` names the offending input using its wire (camelCase) name so
    /// callers can point the user at the right form field.
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// Serialization/deserialization error (JSON form snapshots).
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AgriverseError {
    /// Shorthand for building an `InvalidInput` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AgriverseError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// The failing field, if this is an input validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AgriverseError::InvalidInput { field, .. } => Some(field),
            AgriverseError::Serialization(_) => None,
        }
    }
}

impl From<serde_json::Error> for AgriverseError {
    fn from(e: serde_json::Error) -> Self {
        AgriverseError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = AgriverseError::invalid("periodDays", "45 is not an offered staking period");
        assert_eq!(
            err.to_string(),
            "Invalid input for `periodDays`: 45 is not an offered staking period"
        );
        assert_eq!(err.field(), Some("periodDays"));
    }

    #[test]
    fn test_invalid_input_serializes_with_field() {
        let err = AgriverseError::invalid("flightsPerYear", "-1 is negative");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["invalidInput"]["field"], "flightsPerYear");
        assert_eq!(value["invalidInput"]["reason"], "-1 is negative");
    }

    #[test]
    fn test_serialization_error_serializes_message() {
        let err = AgriverseError::Serialization("bad json".to_string());
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({ "serialization": "bad json" })
        );
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: AgriverseError = parse.unwrap_err().into();
        assert!(matches!(err, AgriverseError::Serialization(_)));
        assert_eq!(err.field(), None);
    }
}
