use serde::{Deserialize, Serialize};

/// Success envelope wrapping every API response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub meta: Meta,
    pub response: T,
}

/// Response metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging_details: Option<PagingDetails>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PagingDetails {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub items_per_page: u32,
}

/// Error envelope returned with non-success responses.
///
/// `Meta` is required so that arbitrary JSON error bodies are not mistaken for
/// API error reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResult {
    pub meta: Meta,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_messages: Vec<ErrorMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub(crate) fn as_query(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiResponse, ErrorResult};

    #[test]
    fn error_result_parses_api_error_body() {
        let body = r#"{
            "Meta": {
                "Errors": {
                    "ErrorCode": "InvalidInput",
                    "ErrorMessages": [
                        { "Field": "AccountId", "Message": "AccountId is invalid" }
                    ],
                    "TraceCode": "abc123"
                },
                "HttpStatus": "BadRequest",
                "HttpStatusCode": 400
            }
        }"#;
        let result: ErrorResult = serde_json::from_str(body).expect("must parse");
        let errors = result.meta.errors.expect("must carry errors");
        assert_eq!(errors.error_code.as_deref(), Some("InvalidInput"));
        assert_eq!(errors.error_messages[0].field.as_deref(), Some("AccountId"));
        assert_eq!(result.meta.http_status_code, Some(400));
    }

    #[test]
    fn error_result_requires_meta() {
        assert!(serde_json::from_str::<ErrorResult>(r#"{"error":"boom"}"#).is_err());
    }

    #[test]
    fn envelope_tolerates_missing_meta() {
        let parsed: ApiResponse<u32> = serde_json::from_str(r#"{"Response": 7}"#).unwrap();
        assert_eq!(parsed.response, 7);
        assert!(parsed.meta.errors.is_none());
    }
}
