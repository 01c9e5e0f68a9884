//! Chatbot customization payload and its schema check.
//!
//! The payload arrives as arbitrary JSON. [`CustomizationPayload::parse`]
//! walks the object field by field and collects every problem as a
//! [`ValidationIssue`] instead of stopping at the first one, so clients can
//! highlight all offending inputs at once.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issue code for a value of the wrong JSON type (or a missing value).
pub const ISSUE_INVALID_TYPE: &str = "invalid_type";

/// Marker used as `received` when a required field is absent.
const RECEIVED_UNDEFINED: &str = "undefined";

/// The customization fields a chatbot owner may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationPayload {
    pub display_branding: bool,
    pub chat_title: String,
    pub chat_message_place_holder: String,
}

/// One schema violation found in a request body.
///
/// `path` lists the keys leading to the offending value; an empty path means
/// the body itself was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: String,
    pub expected: String,
    pub received: String,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    fn invalid_type(path: Vec<String>, expected: &str, received: &str) -> Self {
        let message = if received == RECEIVED_UNDEFINED {
            "Required".to_string()
        } else {
            format!("Expected {expected}, received {received}")
        };
        Self {
            code: ISSUE_INVALID_TYPE.to_string(),
            expected: expected.to_string(),
            received: received.to_string(),
            path,
            message,
        }
    }
}

/// JSON type name as reported in [`ValidationIssue::received`].
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl CustomizationPayload {
    /// Validate a decoded JSON body and build the payload from it.
    ///
    /// Unknown keys are ignored. On failure every field problem is returned,
    /// in declaration order.
    pub fn parse(body: &Value) -> Result<Self, Vec<ValidationIssue>> {
        let Some(object) = body.as_object() else {
            return Err(vec![ValidationIssue::invalid_type(
                Vec::new(),
                "object",
                json_type_name(body),
            )]);
        };

        let mut issues = Vec::new();
        let display_branding = bool_field(object, "displayBranding", &mut issues);
        let chat_title = string_field(object, "chatTitle", &mut issues);
        let chat_message_place_holder = string_field(object, "chatMessagePlaceHolder", &mut issues);

        match (display_branding, chat_title, chat_message_place_holder) {
            (Some(display_branding), Some(chat_title), Some(chat_message_place_holder))
                if issues.is_empty() =>
            {
                Ok(Self {
                    display_branding,
                    chat_title,
                    chat_message_place_holder,
                })
            }
            _ => Err(issues),
        }
    }
}

fn bool_field(
    object: &Map<String, Value>,
    key: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<bool> {
    match object.get(key) {
        Some(Value::Bool(b)) => Some(*b),
        other => {
            issues.push(type_issue(key, "boolean", other));
            None
        }
    }
}

fn string_field(
    object: &Map<String, Value>,
    key: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        other => {
            issues.push(type_issue(key, "string", other));
            None
        }
    }
}

fn type_issue(key: &str, expected: &str, found: Option<&Value>) -> ValidationIssue {
    let received = found.map_or(RECEIVED_UNDEFINED, json_type_name);
    ValidationIssue::invalid_type(vec![key.to_string()], expected, received)
}
