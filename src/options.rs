use crate::ValidationPolicy;

/// Production API host.
pub const PRODUCTION_BASE_URL: &str = "https://api.paysimple.com";
/// Sandbox API host.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.paysimple.com";

/// PaySimple deployment the client talks to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Base URL for this environment, without a trailing slash.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }

    /// Parses `production` / `sandbox` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "live" => Some(Self::Production),
            "sandbox" => Some(Self::Sandbox),
            _ => None,
        }
    }
}

/// Minimum TLS protocol version accepted by the transport.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TlsVersion {
    #[default]
    Tls12,
    Tls13,
}

impl From<TlsVersion> for reqwest::tls::Version {
    fn from(version: TlsVersion) -> Self {
        match version {
            TlsVersion::Tls12 => reqwest::tls::Version::TLS_1_2,
            TlsVersion::Tls13 => reqwest::tls::Version::TLS_1_3,
        }
    }
}

/// Configures HTTP timeout, retry and validation behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total number of attempts per request. Values of 0 or 1 mean a single attempt.
    pub retry_count: usize,
    /// Fixed delay between attempts in milliseconds.
    pub retry_delay_ms: u64,
    /// Lowest TLS version the transport will negotiate.
    pub min_tls_version: TlsVersion,
    /// Rule generation applied before mutating calls.
    pub validation_policy: ValidationPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            retry_count: 1,
            retry_delay_ms: 1_000,
            min_tls_version: TlsVersion::Tls12,
            validation_policy: ValidationPolicy::Permissive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientOptions, Environment, TlsVersion};
    use crate::ValidationPolicy;

    #[test]
    fn defaults_are_single_attempt_tls12_permissive() {
        let options = ClientOptions::default();
        assert_eq!(options.retry_count, 1);
        assert_eq!(options.retry_delay_ms, 1_000);
        assert_eq!(options.min_tls_version, TlsVersion::Tls12);
        assert_eq!(options.validation_policy, ValidationPolicy::Permissive);
    }

    #[test]
    fn environment_parse_is_case_insensitive() {
        assert_eq!(Environment::parse(" Sandbox "), Some(Environment::Sandbox));
        assert_eq!(Environment::parse("PRODUCTION"), Some(Environment::Production));
        assert_eq!(Environment::parse("staging"), None);
        assert!(Environment::Sandbox.base_url().contains("sandbox"));
    }
}
