//! Result helpers shared by the tool definitions.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: String) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Deserialize tool call arguments into the tool's parameter struct.
///
/// Missing arguments are treated as an empty object, so required fields
/// surface as `invalid_params`.
pub fn parse_arguments<T: DeserializeOwned>(args: Option<JsonObject>) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(args.unwrap_or_default()))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create a success result with a text summary plus structured content.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(summary)],
        structured_content: serde_json::to_value(data).ok(),
        is_error: Some(false),
        meta: None,
    }
}

/// Text of the first content item (tests only).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_result() {
        let result = structured_result("ok".to_string(), &serde_json::json!({ "a": 1 }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "ok");
        assert_eq!(result.structured_content.unwrap()["a"], 1);
    }

    #[test]
    fn test_error_result() {
        let result = error_result("nope".to_string());
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "nope");
    }

    #[test]
    fn test_parse_arguments_reports_invalid_params() {
        #[derive(Debug, serde::Deserialize)]
        struct Params {
            #[allow(dead_code)]
            path: String,
        }

        let err = parse_arguments::<Params>(None).unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("path"));
    }
}
