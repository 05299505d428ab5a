use crate::{models::ErrorResult, validation::ValidationError};

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum PaySimpleError {
    /// Payload failed client-side validation; the request was never sent.
    #[error("validation failed: {}", join_violations(.0))]
    Validation(Vec<ValidationError>),
    /// Non-success HTTP status returned by the PaySimple API.
    #[error(transparent)]
    Remote(RemoteError),
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Request payload could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    /// A success response body did not match the expected shape.
    #[error("deserialization error: {source}; body: {body}")]
    Deserialization {
        /// Raw response body that failed to parse.
        body: String,
        source: serde_json::Error,
    },
    /// Every attempt in the retry budget failed.
    #[error("request failed after {} attempts: {}", .failures.len(), join_failures(.failures))]
    RetriesExhausted {
        /// One entry per attempt, in attempt order.
        failures: Vec<PaySimpleError>,
    },
    /// Missing or invalid credentials or client settings.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PaySimpleError {
    /// Returns the remote error when this is a non-success API response.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(remote) => Some(remote),
            _ => None,
        }
    }

    /// Returns the validation violations when the payload was rejected locally.
    pub fn violations(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Validation(violations) => Some(violations),
            _ => None,
        }
    }

    pub(crate) fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Non-success response from the PaySimple API.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The body parsed as the API error envelope.
    #[error("http error {status}{}", describe_reported(.result))]
    Reported { status: u16, result: ErrorResult },
    /// The body could not be parsed; the raw text is kept for diagnostics.
    #[error("http error {status}: error deserializing response: {body} ({cause})")]
    Unparsed {
        status: u16,
        body: String,
        #[source]
        cause: serde_json::Error,
    },
}

impl RemoteError {
    /// HTTP status code of the failed response.
    pub fn status(&self) -> u16 {
        match self {
            Self::Reported { status, .. } | Self::Unparsed { status, .. } => *status,
        }
    }

    /// Parsed error envelope, if the body was well-formed.
    pub fn error_result(&self) -> Option<&ErrorResult> {
        match self {
            Self::Reported { result, .. } => Some(result),
            Self::Unparsed { .. } => None,
        }
    }

    /// Raw body text, if the body could not be parsed.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Reported { .. } => None,
            Self::Unparsed { body, .. } => Some(body),
        }
    }
}

fn describe_reported(result: &ErrorResult) -> String {
    let Some(errors) = &result.meta.errors else {
        return String::new();
    };
    let mut description = String::new();
    if let Some(code) = &errors.error_code {
        description.push_str(&format!(" ({code})"));
    }
    for message in &errors.error_messages {
        match &message.field {
            Some(field) => description.push_str(&format!("; {field}: {}", message.message)),
            None => description.push_str(&format!("; {}", message.message)),
        }
    }
    description
}

fn join_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_failures(failures: &[PaySimpleError]) -> String {
    failures
        .iter()
        .enumerate()
        .map(|(index, failure)| format!("[attempt {}] {failure}", index + 1))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::{PaySimpleError, RemoteError};
    use crate::{models::ErrorResult, validation::ValidationError};

    fn unparsed(status: u16) -> RemoteError {
        let cause = serde_json::from_str::<ErrorResult>("oops").expect_err("must not parse");
        RemoteError::Unparsed {
            status,
            body: "oops".to_owned(),
            cause,
        }
    }

    #[test]
    fn validation_display_lists_every_violation() {
        let err = PaySimpleError::Validation(vec![
            ValidationError::new("CustomerId", "CustomerId is required"),
            ValidationError::new("BankName", "BankName is required"),
        ]);
        let text = err.to_string();
        assert!(text.contains("CustomerId is required"));
        assert!(text.contains("BankName is required"));
        assert_eq!(err.violations().map(<[_]>::len), Some(2));
    }

    #[test]
    fn unparsed_remote_error_exposes_raw_body() {
        let remote = unparsed(502);
        assert_eq!(remote.status(), 502);
        assert_eq!(remote.raw_body(), Some("oops"));
        assert!(remote.error_result().is_none());
        assert!(std::error::Error::source(&remote).is_some());
    }

    #[test]
    fn reported_remote_error_describes_api_messages() {
        let result: ErrorResult = serde_json::from_str(
            r#"{"Meta":{"Errors":{"ErrorCode":"InvalidInput","ErrorMessages":[{"Field":"Amount","Message":"too small"},{"Message":"declined"}]}}}"#,
        )
        .unwrap();
        let remote = RemoteError::Reported {
            status: 400,
            result,
        };
        assert_eq!(
            remote.to_string(),
            "http error 400 (InvalidInput); Amount: too small; declined"
        );
        assert!(std::error::Error::source(&remote).is_none());

        let bare = RemoteError::Reported {
            status: 500,
            result: ErrorResult::default(),
        };
        assert_eq!(bare.to_string(), "http error 500");
    }

    #[test]
    fn exhausted_display_numbers_attempts() {
        let err = PaySimpleError::RetriesExhausted {
            failures: vec![
                PaySimpleError::Remote(unparsed(500)),
                PaySimpleError::Remote(unparsed(503)),
            ],
        };
        let text = err.to_string();
        assert!(text.starts_with("request failed after 2 attempts"));
        assert!(text.contains("[attempt 1] http error 500"));
        assert!(text.contains("[attempt 2] http error 503"));
    }

    #[test]
    fn only_configuration_errors_are_fatal() {
        assert!(PaySimpleError::Configuration("missing".to_owned()).is_fatal());
        assert!(!PaySimpleError::Remote(unparsed(500)).is_fatal());
    }
}
