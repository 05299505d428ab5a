use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{self, Rule, Validate, ValidationPolicy};

/// Fields shared by every payment account type.
pub trait Account {
    fn customer_id(&self) -> i64;
}

fn has_customer<T: Account>(account: &T) -> bool {
    account.customer_id() > 0
}

const ACCOUNT_NUMBER_MESSAGE: &str =
    "AccountNumber must be numeric string and must be between 4 and 100 digits";

/// Bank (ACH) account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ach {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_checking_account: bool,
    #[serde(default)]
    pub routing_number: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Account for Ach {
    fn customer_id(&self) -> i64 {
        self.customer_id
    }
}

impl Validate for Ach {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new("CustomerId", "CustomerId is required", has_customer::<Ach>),
        Rule::new("AccountNumber", ACCOUNT_NUMBER_MESSAGE, |a: &Ach| {
            validation::is_bank_account_number(&a.account_number)
        })
        .only(ValidationPolicy::Strict),
        Rule::new("AccountNumber", ACCOUNT_NUMBER_MESSAGE, |a: &Ach| {
            validation::is_bank_account_number_or_masked(&a.account_number)
        })
        .only(ValidationPolicy::Permissive),
        Rule::new("BankName", "BankName is required", |a: &Ach| {
            validation::is_present(&a.bank_name)
        }),
        Rule::new(
            "BankName",
            "BankName cannot exceed 100 characters",
            |a: &Ach| validation::max_chars(&a.bank_name, 100),
        ),
        Rule::new(
            "RoutingNumber",
            "RoutingNumber must be a 9 digit number",
            |a: &Ach| validation::is_routing_number(&a.routing_number),
        ),
    ];
}

/// Card network reported for a credit card account.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Issuer {
    Visa,
    Master,
    Amex,
    Discover,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditCard {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub credit_card_number: String,
    /// `MM/YYYY`.
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Issuer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Account for CreditCard {
    fn customer_id(&self) -> i64 {
        self.customer_id
    }
}

impl Validate for CreditCard {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new("CustomerId", "CustomerId is required", has_customer::<CreditCard>),
        Rule::new(
            "CreditCardNumber",
            "CreditCardNumber is required",
            |c: &CreditCard| validation::is_present(&c.credit_card_number),
        ),
        Rule::new(
            "CreditCardNumber",
            "CreditCardNumber is invalid",
            |c: &CreditCard| validation::is_card_number(&c.credit_card_number),
        )
        .only(ValidationPolicy::Strict),
        Rule::new(
            "CreditCardNumber",
            "CreditCardNumber is invalid",
            |c: &CreditCard| validation::is_card_number_or_masked(&c.credit_card_number),
        )
        .only(ValidationPolicy::Permissive),
        Rule::new(
            "ExpirationDate",
            "ExpirationDate is required",
            |c: &CreditCard| validation::is_present(&c.expiration_date),
        ),
        Rule::new(
            "ExpirationDate",
            "ExpirationDate must be in a \"MM/YYYY\" format",
            |c: &CreditCard| validation::is_expiration_date(&c.expiration_date),
        ),
        Rule::new(
            "BillingZipCode",
            "BillingZipCode must be a valid US or CA postal code, acceptable formats are 11111, 11111-1111, A1A1A1, or A1A 1A1",
            |c: &CreditCard| {
                c.billing_zip_code
                    .as_deref()
                    .map_or(true, validation::is_us_or_ca_postal_code)
            },
        )
        .only(ValidationPolicy::Strict),
        Rule::new(
            "BillingZipCode",
            "BillingZipCode cannot exceed 10 characters",
            |c: &CreditCard| {
                c.billing_zip_code
                    .as_deref()
                    .map_or(true, validation::is_short_postal_code)
            },
        )
        .only(ValidationPolicy::Permissive),
    ];
}

/// Every account registered for a customer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountList {
    #[serde(default)]
    pub ach_accounts: Vec<Ach>,
    #[serde(default)]
    pub credit_card_accounts: Vec<CreditCard>,
}
