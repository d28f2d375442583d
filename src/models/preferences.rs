use serde::Deserialize;
use serde_json::Value;

use super::schema::{PropertyKind, SchemaDescription, SchemaProperty};
use crate::errors::AppError;

const CHECK_ALTERNATIVE: &str = "checkAlternative";
const ALTERNATIVE_DATE: &str = "alternativeDate";
const ALTERNATIVE_ROOM: &str = "alternativeRoom";

/// Follow-up instructions collected through one elicitation.
///
/// When `check_alternative` is false the alternative fields carry no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativePreferences {
    pub check_alternative: bool,
    pub alternative_date: Option<String>,
    pub alternative_room: Option<String>,
}

/// Wire shape of an answer. Unknown fields are ignored; `checkAlternative`
/// must be a real boolean when present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPreferences {
    #[serde(default = "default_true")]
    check_alternative: bool,
    #[serde(default)]
    alternative_date: Option<String>,
    #[serde(default)]
    alternative_room: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for AlternativePreferences {
    fn default() -> Self {
        Self {
            check_alternative: true,
            alternative_date: None,
            alternative_room: None,
        }
    }
}

impl AlternativePreferences {
    pub fn schema() -> SchemaDescription {
        SchemaDescription {
            title: "BookingPreferences",
            properties: vec![
                SchemaProperty {
                    name: CHECK_ALTERNATIVE,
                    kind: PropertyKind::Boolean,
                    nullable: false,
                    description: "Set to false when the guest does not want to provide alternative options and prefers to cancel the booking attempt.",
                    default: Value::Bool(true),
                },
                SchemaProperty {
                    name: ALTERNATIVE_DATE,
                    kind: PropertyKind::String,
                    nullable: true,
                    description: "Optional alternative check-in date in ISO format (YYYY-MM-DD).",
                    default: Value::Null,
                },
                SchemaProperty {
                    name: ALTERNATIVE_ROOM,
                    kind: PropertyKind::String,
                    nullable: true,
                    description: "Optional alternative room type such as standard, deluxe, or suite.",
                    default: Value::Null,
                },
            ],
        }
    }

    /// Coerce a raw elicitation answer. Missing and unknown fields fall back
    /// to defaults; a field of the wrong type is an error, never a default.
    pub fn validate(raw: &Value) -> Result<Self, AppError> {
        if !raw.is_object() {
            return Err(AppError::SchemaValidation(format!(
                "expected an object, got {raw}"
            )));
        }

        let parsed: RawPreferences = serde_json::from_value(raw.clone())
            .map_err(|e| AppError::SchemaValidation(e.to_string()))?;

        Ok(Self {
            check_alternative: parsed.check_alternative,
            alternative_date: parsed.alternative_date,
            alternative_room: parsed.alternative_room,
        })
    }
}
