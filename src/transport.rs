//! Signed HTTP transport with bounded retry.
//!
//! Every attempt builds its own `reqwest::Client`, signs the request with a
//! fresh `Authorization` value and drops the client when it finishes, so no
//! connection state survives between attempts or calls.

use std::{fmt, sync::Arc, time::Duration};

use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::time::sleep;

use crate::{
    error::RemoteError, models::ErrorResult, serialization, ClientOptions, PaySimpleError, Result,
    SignatureGenerator,
};

const APPLICATION_JSON: &str = "application/json";

/// Status and body of a successful response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Issues signed JSON requests against the PaySimple API.
#[derive(Clone)]
pub struct Transport {
    signer: Arc<dyn SignatureGenerator>,
    options: ClientOptions,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("signer", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl Transport {
    pub fn new(signer: Arc<dyn SignatureGenerator>, options: ClientOptions) -> Self {
        Self { signer, options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Sends a request with an already encoded JSON body and returns the raw
    /// 2xx response.
    pub async fn send(&self, method: Method, url: &str, body: Option<String>) -> Result<RawResponse> {
        let attempts = self.options.retry_count;
        if attempts <= 1 {
            return self.attempt(&method, url, body.as_deref()).await;
        }

        let mut failures = Vec::with_capacity(attempts);
        for attempt in 0..attempts {
            if attempt > 0 {
                self.wait_before_retry(attempt).await;
            }

            match self.attempt(&method, url, body.as_deref()).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        attempt = attempt + 1,
                        attempts,
                        %method,
                        url,
                        error = %err,
                        "paysimple request attempt failed"
                    );
                    failures.push(err);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(attempts, %method, url, "paysimple request retries exhausted");

        Err(PaySimpleError::RetriesExhausted { failures })
    }

    /// Sends an optional payload and decodes the response body as `Resp`.
    ///
    /// A body that does not decode fails with
    /// [`PaySimpleError::Deserialization`]; it is not retried because the HTTP
    /// exchange itself succeeded.
    pub async fn send_typed<Req, Resp>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Req>,
    ) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = body.map(serialization::serialize).transpose()?;
        let response = self.send(method, url, body).await?;
        serialization::deserialize(&response.body)
    }

    pub async fn get<Resp: DeserializeOwned>(&self, url: &str) -> Result<Resp> {
        self.send_typed::<(), Resp>(Method::GET, url, None).await
    }

    pub async fn get_raw(&self, url: &str) -> Result<RawResponse> {
        self.send(Method::GET, url, None).await
    }

    pub async fn post<Req, Resp>(&self, url: &str, payload: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.send_typed(Method::POST, url, Some(payload)).await
    }

    pub async fn put<Req, Resp>(&self, url: &str, payload: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.send_typed(Method::PUT, url, Some(payload)).await
    }

    /// PUT without a body, decoding the response.
    pub async fn put_empty<Resp: DeserializeOwned>(&self, url: &str) -> Result<Resp> {
        self.send_typed::<(), Resp>(Method::PUT, url, None).await
    }

    /// PUT without a body, ignoring the response content.
    pub async fn put_raw(&self, url: &str) -> Result<RawResponse> {
        self.send(Method::PUT, url, None).await
    }

    pub async fn delete(&self, url: &str) -> Result<RawResponse> {
        self.send(Method::DELETE, url, None).await
    }

    async fn attempt(&self, method: &Method, url: &str, body: Option<&str>) -> Result<RawResponse> {
        let authorization = self.signer.generate_signature()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .min_tls_version(self.options.min_tls_version.into())
            .build()
            .map_err(PaySimpleError::Transport)?;

        let mut request = http
            .request(method.clone(), url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::ACCEPT, APPLICATION_JSON);
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, APPLICATION_JSON)
                .body(body.to_owned());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%method, url, has_body = body.is_some(), "sending paysimple request");

        let response = request.send().await.map_err(PaySimpleError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(PaySimpleError::Transport)?;

        if status.is_success() {
            return Ok(RawResponse {
                status: status.as_u16(),
                body,
            });
        }

        Err(remote_error(status, body))
    }

    /// Fixed delay between attempts.
    async fn wait_before_retry(&self, attempt: usize) {
        let delay = Duration::from_millis(self.options.retry_delay_ms);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempt = attempt + 1,
            delay_ms = self.options.retry_delay_ms,
            "retrying paysimple request"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = attempt;

        sleep(delay).await;
    }
}

fn remote_error(status: StatusCode, body: String) -> PaySimpleError {
    let status = status.as_u16();
    let remote = match serde_json::from_str::<ErrorResult>(&body) {
        Ok(result) => RemoteError::Reported { status, result },
        Err(cause) => RemoteError::Unparsed {
            status,
            body,
            cause,
        },
    };
    PaySimpleError::Remote(remote)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::StatusCode;

    use super::{remote_error, Transport};
    use crate::{error::RemoteError, ClientOptions, PaySimpleError, Result, SignatureGenerator};

    struct MissingCredentials;

    impl SignatureGenerator for MissingCredentials {
        fn generate_signature(&self) -> Result<String> {
            Err(PaySimpleError::Configuration("no credentials".to_owned()))
        }
    }

    #[test]
    fn parseable_error_body_is_reported() {
        let err = remote_error(
            StatusCode::BAD_REQUEST,
            r#"{"Meta":{"Errors":{"ErrorCode":"InvalidInput","ErrorMessages":[]},"HttpStatusCode":400}}"#
                .to_owned(),
        );
        match err {
            PaySimpleError::Remote(RemoteError::Reported { status, result }) => {
                assert_eq!(status, 400);
                assert_eq!(
                    result.meta.errors.and_then(|e| e.error_code).as_deref(),
                    Some("InvalidInput")
                );
            }
            other => panic!("expected reported remote error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_keeps_raw_text() {
        let err = remote_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>".to_owned());
        let remote = err.as_remote().expect("must be remote");
        assert_eq!(remote.status(), 502);
        assert_eq!(remote.raw_body(), Some("<html>bad gateway</html>"));
    }

    #[tokio::test]
    async fn configuration_errors_skip_the_retry_loop() {
        let transport = Transport::new(
            Arc::new(MissingCredentials),
            ClientOptions {
                retry_count: 5,
                retry_delay_ms: 60_000,
                ..ClientOptions::default()
            },
        );
        let err = transport
            .get_raw("http://127.0.0.1:9/never")
            .await
            .expect_err("must fail");
        assert!(matches!(err, PaySimpleError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_signer() {
        let transport = Transport::new(Arc::new(MissingCredentials), ClientOptions::default());
        assert!(format!("{transport:?}").contains("<redacted>"));
    }
}
