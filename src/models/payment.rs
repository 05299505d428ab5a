use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{self, Rule, Validate};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "ACH")]
    Ach,
    #[serde(rename = "CC")]
    CreditCard,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Chargeback,
    Failed,
    Pending,
    Posted,
    RefundSettled,
    Returned,
    Reversed,
    ReverseNsf,
    ReversePosted,
    Settled,
    Voided,
}

impl PaymentStatus {
    pub(crate) fn as_query(self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Chargeback => "chargeback",
            Self::Failed => "failed",
            Self::Pending => "pending",
            Self::Posted => "posted",
            Self::RefundSettled => "refundsettled",
            Self::Returned => "returned",
            Self::Reversed => "reversed",
            Self::ReverseNsf => "reversensf",
            Self::ReversePosted => "reverseposted",
            Self::Settled => "settled",
            Self::Voided => "voided",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub account_id: i64,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default)]
    pub is_debit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    /// Card security code; only sent on credit card payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_auth_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_schedule_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl Validate for Payment {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new("AccountId", "AccountId is required", |p: &Payment| {
            p.account_id > 0
        }),
        Rule::new("Amount", "Amount must be greater than 0", |p: &Payment| {
            p.amount > Decimal::ZERO
        }),
        Rule::new("Cvv", "Cvv must be a 3 or 4 digit number", |p: &Payment| {
            p.cvv.as_deref().map_or(true, |cvv| validation::is_digits(cvv, 3, 4))
        }),
    ];
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::{Payment, PaymentStatus, PaymentType};
    use crate::{serialization, Validator};

    fn payment() -> Payment {
        Payment {
            account_id: 3,
            amount: Decimal::from_str("10.50").unwrap(),
            ..Payment::default()
        }
    }

    #[test]
    fn account_and_amount_are_required() {
        let messages: Vec<_> = Validator::default()
            .validate(&Payment::default())
            .into_iter()
            .map(|violation| violation.message)
            .collect();
        assert_eq!(
            messages,
            vec!["AccountId is required", "Amount must be greater than 0"]
        );
        assert!(Validator::default().validate(&payment()).is_empty());
    }

    #[test]
    fn cvv_must_be_three_or_four_digits() {
        for (cvv, ok) in [("123", true), ("1234", true), ("12", false), ("12a", false)] {
            let payment = Payment {
                cvv: Some(cvv.to_owned()),
                ..payment()
            };
            assert_eq!(Validator::default().validate(&payment).is_empty(), ok, "{cvv}");
        }
    }

    #[test]
    fn amount_is_a_json_number() {
        let json = serialization::serialize(&payment()).unwrap();
        assert!(json.contains(r#""Amount":10.50"#), "{json}");
    }

    #[test]
    fn amounts_keep_every_digit() {
        let original = Payment {
            amount: Decimal::from_str("1234567890123456.78").unwrap(),
            ..payment()
        };
        let json = serialization::serialize(&original).unwrap();
        assert!(json.contains(r#""Amount":1234567890123456.78"#), "{json}");

        let back: Payment = serialization::deserialize(&json).unwrap();
        assert_eq!(back, original);
        assert_eq!(back.amount.to_string(), "1234567890123456.78");
    }

    #[test]
    fn round_trip_preserves_fields() {
        let original = Payment {
            id: 99,
            customer_id: 4,
            is_debit: true,
            payment_date: NaiveDate::from_ymd_opt(2015, 10, 21),
            payment_type: Some(PaymentType::CreditCard),
            status: Some(PaymentStatus::Authorized),
            cvv: Some("999".to_owned()),
            description: Some("Flux capacitor".to_owned()),
            ..payment()
        };
        let json = serialization::serialize(&original).unwrap();
        assert!(json.contains(r#""PaymentType":"CC""#));
        assert!(json.contains(r#""PaymentDate":"2015-10-21""#));
        assert_eq!(serialization::deserialize::<Payment>(&json).unwrap(), original);
    }

    #[test]
    fn integer_amounts_deserialize() {
        let payment: Payment =
            serialization::deserialize(r#"{"AccountId": 1, "Amount": 100}"#).unwrap();
        assert_eq!(payment.amount, Decimal::from(100));
    }
}
