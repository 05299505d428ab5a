//! `paysimple` is an async client for the PaySimple v4 payments REST API.
//!
//! Requests are signed with the `PSSERVER` HMAC scheme, retried on failure
//! according to [`ClientOptions`], and payloads are validated locally before
//! they are sent. Resources are reached through typed services:
//! - [`PaySimpleClient::customers`]
//! - [`PaySimpleClient::accounts`]
//! - [`PaySimpleClient::payments`]
//! - [`PaySimpleClient::schedules`]

mod client;
mod error;
mod options;
mod signature;
mod transport;
mod validation;

pub mod models;
pub mod query;
pub mod serialization;
pub mod services;

pub use client::PaySimpleClient;
pub use error::{PaySimpleError, RemoteError};
pub use options::{ClientOptions, Environment, TlsVersion, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use query::{
    CustomerListOptions, CustomerSort, PaymentListOptions, PaymentSort, ScheduleListOptions,
    ScheduleSort,
};
pub use signature::{Credentials, HmacSigner, SignatureGenerator};
pub use transport::{RawResponse, Transport};
pub use validation::{Rule, Validate, ValidationError, ValidationPolicy, Validator};

pub type Result<T> = std::result::Result<T, PaySimpleError>;
