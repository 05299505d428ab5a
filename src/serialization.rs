//! JSON encoding used for request and response bodies.

use serde::{de::DeserializeOwned, Serialize};

use crate::{PaySimpleError, Result};

/// Encodes a payload as a JSON request body.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(PaySimpleError::Serialization)
}

/// Decodes a JSON response body, keeping the text on failure.
pub fn deserialize<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| PaySimpleError::Deserialization {
        body: body.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{deserialize, serialize};
    use crate::{models::Address, PaySimpleError};

    #[test]
    fn malformed_input_keeps_body() {
        let err = deserialize::<Address>("{not json").expect_err("must fail");
        match err {
            PaySimpleError::Deserialization { body, .. } => assert_eq!(body, "{not json"),
            other => panic!("expected deserialization error, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_are_omitted() {
        let address = Address {
            city: Some("Denver".to_owned()),
            ..Address::default()
        };
        let json = serialize(&address).expect("must encode");
        assert_eq!(json, r#"{"City":"Denver"}"#);
    }
}
