use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{self, Rule, Validate, ValidationPolicy};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub shipping_same_as_billing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Hits returned by the global search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResults {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

fn billing_zip(customer: &Customer) -> Option<&str> {
    customer
        .billing_address
        .as_ref()
        .and_then(|address| address.zip_code.as_deref())
}

impl Validate for Customer {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new("FirstName", "FirstName is required", |c: &Customer| {
            validation::is_present(&c.first_name)
        }),
        Rule::new(
            "FirstName",
            "FirstName cannot exceed 150 characters",
            |c: &Customer| validation::max_chars(&c.first_name, 150),
        ),
        Rule::new("LastName", "LastName is required", |c: &Customer| {
            validation::is_present(&c.last_name)
        }),
        Rule::new(
            "LastName",
            "LastName cannot exceed 150 characters",
            |c: &Customer| validation::max_chars(&c.last_name, 150),
        ),
        Rule::new(
            "Company",
            "Company cannot exceed 50 characters",
            |c: &Customer| c.company.as_deref().map_or(true, |v| validation::max_chars(v, 50)),
        ),
        Rule::new(
            "Email",
            "Email cannot exceed 100 characters",
            |c: &Customer| c.email.as_deref().map_or(true, |v| validation::max_chars(v, 100)),
        ),
        Rule::new(
            "BillingAddress.ZipCode",
            "ZipCode must be a valid US or CA postal code, acceptable formats are 11111, 11111-1111, A1A1A1, or A1A 1A1",
            |c: &Customer| billing_zip(c).map_or(true, validation::is_us_or_ca_postal_code),
        )
        .only(ValidationPolicy::Strict),
        Rule::new(
            "BillingAddress.ZipCode",
            "ZipCode cannot exceed 10 characters",
            |c: &Customer| billing_zip(c).map_or(true, validation::is_short_postal_code),
        )
        .only(ValidationPolicy::Permissive),
    ];
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{Address, Customer};
    use crate::{serialization, ValidationPolicy, Validator};

    fn customer() -> Customer {
        Customer {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            ..Customer::default()
        }
    }

    fn messages(customer: &Customer, policy: ValidationPolicy) -> Vec<&'static str> {
        Validator::new(policy)
            .validate(customer)
            .into_iter()
            .map(|violation| violation.message)
            .collect()
    }

    #[test]
    fn named_customer_is_valid() {
        assert!(messages(&customer(), ValidationPolicy::Permissive).is_empty());
        assert!(messages(&customer(), ValidationPolicy::Strict).is_empty());
    }

    #[test]
    fn missing_names_are_reported_together() {
        let messages = messages(&Customer::default(), ValidationPolicy::Permissive);
        assert_eq!(
            messages,
            vec!["FirstName is required", "LastName is required"]
        );
    }

    #[test]
    fn long_company_and_email_are_rejected() {
        let customer = Customer {
            company: Some("c".repeat(51)),
            email: Some(format!("{}@example.com", "e".repeat(100))),
            ..customer()
        };
        let messages = messages(&customer, ValidationPolicy::Permissive);
        assert!(messages.contains(&"Company cannot exceed 50 characters"));
        assert!(messages.contains(&"Email cannot exceed 100 characters"));
    }

    #[test]
    fn billing_zip_follows_policy() {
        let customer = Customer {
            billing_address: Some(Address {
                zip_code: Some("SW1A 1AA".to_owned()),
                ..Address::default()
            }),
            ..customer()
        };
        assert!(messages(&customer, ValidationPolicy::Permissive).is_empty());
        assert_eq!(messages(&customer, ValidationPolicy::Strict).len(), 1);
    }

    #[test]
    fn serialization_round_trip_preserves_fields() {
        let original = Customer {
            id: 42,
            middle_name: Some("King".to_owned()),
            company: Some("Analytical Engines".to_owned()),
            billing_address: Some(Address {
                street_address1: Some("1 Main St".to_owned()),
                city: Some("Denver".to_owned()),
                state_code: Some("CO".to_owned()),
                zip_code: Some("80202".to_owned()),
                country: Some("US".to_owned()),
                ..Address::default()
            }),
            shipping_same_as_billing: true,
            email: Some("ada@example.com".to_owned()),
            phone: Some("3035550100".to_owned()),
            created_on: Some(Utc.with_ymd_and_hms(2015, 10, 21, 16, 29, 0).unwrap()),
            ..customer()
        };
        let json = serialization::serialize(&original).unwrap();
        assert!(json.contains(r#""FirstName":"Ada""#));
        let decoded: Customer = serialization::deserialize(&json).unwrap();
        assert_eq!(decoded, original);
    }
}
