//! `Authorization` header generation.
//!
//! PaySimple authenticates server-to-server calls with an HMAC-SHA256 of the
//! current timestamp keyed by the account's API key:
//!
//! ```text
//! PSSERVER accessid=<username>; timestamp=<rfc3339>; signature=<base64 hmac>
//! ```

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{PaySimpleError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Produces a fresh `Authorization` header value for every request attempt.
pub trait SignatureGenerator: Send + Sync {
    fn generate_signature(&self) -> Result<String>;
}

/// API user name and key issued by PaySimple.
#[derive(Clone, Eq, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Default `PSSERVER` signer.
#[derive(Clone, Debug)]
pub struct HmacSigner {
    credentials: Credentials,
}

impl HmacSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Builds the header value for an explicit timestamp.
    pub fn signature_at(&self, timestamp: DateTime<Utc>) -> Result<String> {
        let username = self.credentials.username.trim();
        let api_key = self.credentials.api_key.trim();
        if username.is_empty() {
            return Err(PaySimpleError::Configuration(
                "PaySimple username is missing".to_owned(),
            ));
        }
        if api_key.is_empty() {
            return Err(PaySimpleError::Configuration(
                "PaySimple API key is missing".to_owned(),
            ));
        }

        let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut mac = HmacSha256::new_from_slice(api_key.as_bytes())
            .map_err(|err| PaySimpleError::Configuration(format!("invalid API key: {err}")))?;
        mac.update(timestamp.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        Ok(format!(
            "PSSERVER accessid={username}; timestamp={timestamp}; signature={signature}"
        ))
    }
}

impl SignatureGenerator for HmacSigner {
    fn generate_signature(&self) -> Result<String> {
        self.signature_at(Utc::now())
    }
}
