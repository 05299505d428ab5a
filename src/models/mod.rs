//! Request and response models for the PaySimple v4 API.
//!
//! Field names follow the API's PascalCase JSON. Amounts are [`Decimal`]s sent
//! as JSON numbers.
//!
//! [`Decimal`]: rust_decimal::Decimal

mod account;
mod common;
mod customer;
mod payment;
mod schedule;

pub use account::{Account, AccountList, Ach, CreditCard, Issuer};
pub use common::{
    ApiResponse, ErrorDetails, ErrorMessage, ErrorResult, Meta, PagingDetails, SortDirection,
};
pub use customer::{Address, Customer, SearchResults};
pub use payment::{Payment, PaymentStatus, PaymentType};
pub use schedule::{
    ExecutionFrequency, PaymentPlan, PaymentScheduleList, RecurringPayment, Schedule,
    ScheduleStatus,
};
