use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{Rule, Validate};

/// How often a schedule executes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ExecutionFrequency {
    Daily,
    Weekly,
    BiWeekly,
    FirstofMonth,
    SpecificDayofMonth,
    LastofMonth,
    Quarterly,
    SemiAnnually,
    Annually,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Active,
    PauseUntil,
    Expired,
    Suspended,
}

impl ScheduleStatus {
    pub(crate) fn as_query(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::PauseUntil => "pauseuntil",
            Self::Expired => "expired",
            Self::Suspended => "suspended",
        }
    }
}

/// Fields shared by every schedule type.
pub trait Schedule {
    fn account_id(&self) -> i64;
    fn payment_amount(&self) -> Decimal;
    fn start_date(&self) -> Option<NaiveDate>;
    fn end_date(&self) -> Option<NaiveDate>;
}

fn has_account<T: Schedule>(schedule: &T) -> bool {
    schedule.account_id() > 0
}

fn has_payment_amount<T: Schedule>(schedule: &T) -> bool {
    schedule.payment_amount() > Decimal::ZERO
}

fn ends_after_start<T: Schedule>(schedule: &T) -> bool {
    match (schedule.start_date(), schedule.end_date()) {
        (Some(start), Some(end)) => end >= start,
        _ => true,
    }
}

/// Rule set of every schedule type, followed by the type's own rules.
macro_rules! schedule_rules {
    ($ty:ty $(, $extra:expr)* $(,)?) => {
        &[
            Rule::new("AccountId", "AccountId is required", has_account::<$ty>),
            Rule::new(
                "PaymentAmount",
                "PaymentAmount must be greater than 0",
                has_payment_amount::<$ty>,
            ),
            Rule::new(
                "EndDate",
                "EndDate cannot be before StartDate",
                ends_after_start::<$ty>,
            ),
            $($extra,)*
        ]
    };
}

macro_rules! impl_schedule {
    ($ty:ty) => {
        impl Schedule for $ty {
            fn account_id(&self) -> i64 {
                self.account_id
            }

            fn payment_amount(&self) -> Decimal {
                self.payment_amount
            }

            fn start_date(&self) -> Option<NaiveDate> {
                self.start_date
            }

            fn end_date(&self) -> Option<NaiveDate> {
                self.end_date
            }
        }
    };
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringPayment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub account_id: i64,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub payment_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_frequency_type: Option<ExecutionFrequency>,
    /// Day of week or month, depending on the frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_frequency_parameter: Option<u8>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_payment_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_status: Option<ScheduleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_schedule_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_until_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl_schedule!(RecurringPayment);

impl Validate for RecurringPayment {
    const RULES: &'static [Rule<Self>] = schedule_rules!(RecurringPayment);
}

/// Recurring payment that retires a fixed total over a number of payments.
///
/// Carries every [`RecurringPayment`] field at the top level, as the API does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentPlan {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub account_id: i64,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub payment_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_frequency_type: Option<ExecutionFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_frequency_parameter: Option<u8>,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_payment_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_status: Option<ScheduleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_schedule_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_until_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub total_due_amount: Decimal,
    #[serde(default)]
    pub total_number_of_payments: u32,
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_remaining: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_payments_made: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_payments_remaining: Option<u32>,
}

impl_schedule!(PaymentPlan);

impl Validate for PaymentPlan {
    const RULES: &'static [Rule<Self>] = schedule_rules!(
        PaymentPlan,
        Rule::new(
            "TotalDueAmount",
            "TotalDueAmount must be greater than 0",
            |p: &PaymentPlan| p.total_due_amount > Decimal::ZERO,
        ),
        Rule::new(
            "TotalNumberOfPayments",
            "TotalNumberOfPayments must be greater than 0",
            |p: &PaymentPlan| p.total_number_of_payments > 0,
        ),
    );
}

/// All schedules for a customer or merchant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentScheduleList {
    #[serde(default)]
    pub payment_plans: Vec<PaymentPlan>,
    #[serde(default)]
    pub recurring_payments: Vec<RecurringPayment>,
}
