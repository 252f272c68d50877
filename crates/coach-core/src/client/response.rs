use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{AdminError, Result};

/// Parsed body of a backend response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    /// Returns the JSON payload, failing when the backend answered with text.
    pub fn into_json(self, path: &str) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) => Err(AdminError::UnexpectedShape {
                found: format!("text response from {path}: {}", preview(&text)),
            }),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// String field of a JSON response, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.as_json()?.get(name)?.as_str()
    }

    /// Fails when the body carries `success: false`. Bodies without the
    /// flag are treated as accepted.
    pub fn require_success(&self, action: &str) -> Result<()> {
        let Some(value) = self.as_json() else {
            return Ok(());
        };
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let message = self
                .field("message")
                .or_else(|| self.field("error"))
                .unwrap_or("the server did not accept the change")
                .to_string();
            return Err(AdminError::Rejected {
                action: action.to_string(),
                message,
            });
        }
        Ok(())
    }

    /// Fails unless the body carries `success: true`. Plan saves and
    /// plan edits only count once the backend confirms them this way.
    pub fn require_success_flag(&self, action: &str) -> Result<()> {
        self.require_success(action)?;
        let confirmed = self
            .as_json()
            .and_then(|value| value.get("success"))
            .and_then(Value::as_bool)
            == Some(true);
        if confirmed {
            return Ok(());
        }
        let message = self
            .field("message")
            .map(|message| format!("the server did not confirm the change ({message})"))
            .unwrap_or_else(|| "the server did not confirm the change".to_string());
        Err(AdminError::Rejected {
            action: action.to_string(),
            message,
        })
    }
}

/// What the backend said about a created or saved record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Saved {
    pub id: Option<String>,
    pub message: Option<String>,
}

impl Saved {
    /// Picks the new record's id and message out of a response.
    pub fn from_response(response: &ApiResponse) -> Self {
        let json = response.as_json();
        let id = json.and_then(|value| {
            ["_id", "id"]
                .iter()
                .find_map(|key| value.get(*key))
                .or_else(|| {
                    ["data", "plan", "category", "workout", "meal", "supplement"]
                        .iter()
                        .find_map(|key| value.get(*key)?.get("_id"))
                })
                .and_then(Value::as_str)
                .map(str::to_owned)
        });
        Self {
            id,
            message: response.field("message").map(str::to_owned),
        }
    }
}

/// Turns a raw status, content type and body into the fetch contract's
/// result.
pub fn interpret(status: StatusCode, content_type: Option<&str>, body: &[u8]) -> Result<ApiResponse> {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));

    let data = if is_json {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Some(ApiResponse::Json(value)),
            Err(source) if status.is_success() => {
                return Err(AdminError::Decode {
                    what: "JSON response".to_string(),
                    source,
                })
            }
            Err(_) => None,
        }
    } else {
        Some(ApiResponse::Text(String::from_utf8_lossy(body).into_owned()))
    };

    if status.is_success() {
        // Non-JSON parse failures returned above; text always parses.
        return data.ok_or_else(|| AdminError::UnexpectedShape {
            found: "empty response".to_string(),
        });
    }

    let message = data
        .as_ref()
        .and_then(ApiResponse::as_json)
        .and_then(|value| value.get("error"))
        .and_then(error_text)
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| "Request failed".to_string());

    Err(AdminError::Api {
        status: status.as_u16(),
        message,
    })
}

fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 80;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn success_json_is_parsed() {
        let response = interpret(StatusCode::OK, JSON, br#"{"data":[]}"#).unwrap();
        assert_eq!(response, ApiResponse::Json(json!({"data": []})));
    }

    #[test]
    fn success_text_is_returned_verbatim() {
        let response = interpret(StatusCode::OK, Some("text/html"), b"<p>ok</p>").unwrap();
        assert_eq!(response, ApiResponse::Text("<p>ok</p>".to_string()));
    }

    #[test]
    fn error_field_becomes_message() {
        let error = interpret(
            StatusCode::BAD_REQUEST,
            JSON,
            br#"{"error":"Name is required"}"#,
        )
        .unwrap_err();
        match error {
            AdminError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Name is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_uses_status_text() {
        let error = interpret(StatusCode::INTERNAL_SERVER_ERROR, Some("text/plain"), b"boom")
            .unwrap_err();
        assert_eq!(error.user_message(), "Internal Server Error");
    }

    #[test]
    fn json_error_without_field_uses_status_text() {
        let error = interpret(StatusCode::NOT_FOUND, JSON, br#"{"message":"nope"}"#).unwrap_err();
        assert_eq!(error.user_message(), "Not Found");
    }

    #[test]
    fn unknown_status_falls_back_to_generic_message() {
        let status = StatusCode::from_u16(599).unwrap();
        let error = interpret(status, None, b"").unwrap_err();
        assert_eq!(error.user_message(), "Request failed");
    }

    #[test]
    fn malformed_json_on_success_is_a_decode_error() {
        let error = interpret(StatusCode::OK, JSON, b"{not json").unwrap_err();
        assert!(matches!(error, AdminError::Decode { .. }));
    }

    #[test]
    fn success_false_is_rejected() {
        let response = ApiResponse::Json(json!({"success": false, "message": "Duplicate name"}));
        let error = response.require_success("Create category").unwrap_err();
        assert_eq!(error.to_string(), "Create category was rejected: Duplicate name");
    }

    #[test]
    fn missing_success_flag_is_accepted() {
        let response = ApiResponse::Json(json!({"message": "Meal plan saved successfully"}));
        assert!(response.require_success("Save").is_ok());
        assert!(ApiResponse::Text("OK".into()).require_success("Save").is_ok());
    }

    #[test]
    fn confirmed_changes_need_the_success_flag() {
        let queued = ApiResponse::Json(json!({"message": "queued"}));
        let error = queued.require_success_flag("Add meal").unwrap_err();
        assert!(matches!(error, AdminError::Rejected { .. }));
        assert!(error.to_string().contains("queued"));

        assert!(ApiResponse::Text("OK".into()).require_success_flag("Add meal").is_err());
        assert!(ApiResponse::Json(json!({"success": true}))
            .require_success_flag("Add meal")
            .is_ok());
    }
}
