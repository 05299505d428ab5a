use std::{fmt, sync::Arc};

use crate::{
    services::{AccountService, CustomerService, PaymentService, ScheduleService},
    ClientOptions, Credentials, Environment, HmacSigner, PaySimpleError, Result,
    SignatureGenerator, Transport, Validate, Validator,
};

/// API version prefix shared by every endpoint.
const API_PREFIX: &str = "/v4";

/// HTTP client for the PaySimple v4 API.
///
/// Cloning is cheap; clones share the signer and configuration, which are
/// read-only after construction.
#[derive(Clone)]
pub struct PaySimpleClient {
    base_url: String,
    signer: Arc<dyn SignatureGenerator>,
    transport: Transport,
    validator: Validator,
}

impl fmt::Debug for PaySimpleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaySimpleClient")
            .field("base_url", &self.base_url)
            .field("signer", &"<redacted>")
            .field("options", self.transport.options())
            .finish()
    }
}

impl PaySimpleClient {
    /// Creates a production client from API credentials.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_environment(Environment::Production, Credentials::new(username, api_key))
    }

    /// Creates a sandbox client from API credentials.
    pub fn sandbox(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_environment(Environment::Sandbox, Credentials::new(username, api_key))
    }

    pub fn with_environment(environment: Environment, credentials: Credentials) -> Self {
        Self::with_base_url(environment.base_url(), credentials)
    }

    /// Creates a client against an explicit host, e.g. a proxy or a mock server.
    ///
    /// A trailing slash is ignored.
    pub fn with_base_url(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_signer(base_url, Arc::new(HmacSigner::new(credentials)))
    }

    /// Creates a client that signs requests with a custom generator.
    pub fn with_signer(base_url: impl Into<String>, signer: Arc<dyn SignatureGenerator>) -> Self {
        let options = ClientOptions::default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            validator: Validator::new(options.validation_policy),
            transport: Transport::new(Arc::clone(&signer), options),
            signer,
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `PAYSIMPLE_USERNAME`: API user name
    /// - `PAYSIMPLE_API_KEY`: API key
    /// - `PAYSIMPLE_ENVIRONMENT`: optional, `production` (default) or `sandbox`
    /// - `PAYSIMPLE_BASE_URL`: optional, overrides the environment host
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paysimple::PaySimpleClient;
    ///
    /// let client = PaySimpleClient::from_env().expect("missing PAYSIMPLE_* env vars");
    /// ```
    pub fn from_env() -> Result<Self> {
        let username = required_env("PAYSIMPLE_USERNAME")?;
        let api_key = required_env("PAYSIMPLE_API_KEY")?;

        let environment = match optional_env("PAYSIMPLE_ENVIRONMENT") {
            Some(value) => Environment::parse(&value).ok_or_else(|| {
                PaySimpleError::Configuration(format!(
                    "PAYSIMPLE_ENVIRONMENT must be 'production' or 'sandbox', got '{value}'"
                ))
            })?,
            None => Environment::default(),
        };

        let credentials = Credentials::new(username, api_key);
        Ok(match optional_env("PAYSIMPLE_BASE_URL") {
            Some(base_url) => Self::with_base_url(base_url, credentials),
            None => Self::with_environment(environment, credentials),
        })
    }

    /// Applies client options such as timeout, retry and validation policy.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.validator = Validator::new(opts.validation_policy);
        self.transport = Transport::new(Arc::clone(&self.signer), opts);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        self.transport.options()
    }

    /// Underlying transport, for endpoints without a typed wrapper.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn customers(&self) -> CustomerService<'_> {
        CustomerService::new(self)
    }

    pub fn payments(&self) -> PaymentService<'_> {
        PaymentService::new(self)
    }

    pub fn accounts(&self) -> AccountService<'_> {
        AccountService::new(self)
    }

    pub fn schedules(&self) -> ScheduleService<'_> {
        ScheduleService::new(self)
    }

    /// Full URL for a resource path such as `/customer/12`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    pub(crate) fn ensure_valid<T: Validate>(&self, payload: &T) -> Result<()> {
        self.validator.ensure_valid(payload)
    }
}

fn required_env(name: &str) -> Result<String> {
    let value = std::env::var(name)
        .map_err(|_| PaySimpleError::Configuration(format!("missing {name} environment variable")))?;
    if value.trim().is_empty() {
        return Err(PaySimpleError::Configuration(format!(
            "{name} is set but empty"
        )));
    }
    Ok(value)
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::PaySimpleClient;
    use crate::{ClientOptions, Credentials, ValidationPolicy};

    #[test]
    fn endpoint_joins_base_url_and_version() {
        let client = PaySimpleClient::with_base_url(
            "http://localhost:8080/",
            Credentials::new("user", "key"),
        );
        assert_eq!(client.endpoint("/customer/7"), "http://localhost:8080/v4/customer/7");
    }

    #[test]
    fn sandbox_uses_sandbox_host() {
        let client = PaySimpleClient::sandbox("user", "key");
        assert_eq!(client.base_url(), "https://sandbox-api.paysimple.com");
        assert_eq!(
            PaySimpleClient::new("user", "key").base_url(),
            "https://api.paysimple.com"
        );
    }

    #[test]
    fn with_options_updates_validation_policy() {
        let client = PaySimpleClient::new("user", "key").with_options(ClientOptions {
            validation_policy: ValidationPolicy::Strict,
            retry_count: 3,
            ..ClientOptions::default()
        });
        assert_eq!(client.validator().policy(), ValidationPolicy::Strict);
        assert_eq!(client.options().retry_count, 3);
    }

    #[test]
    fn debug_redacts_credentials() {
        let client = PaySimpleClient::new("user", "secret-api-key");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-api-key"));
    }
}
