//! Typed wrappers over the REST resources.
//!
//! Services borrow a [`PaySimpleClient`](crate::PaySimpleClient) and only build
//! URLs; signing, retry and error mapping live in the transport. Mutating calls
//! validate their payload first and never reach the network when it is invalid.

mod account;
mod customer;
mod payment;
mod schedule;

pub use account::AccountService;
pub use customer::CustomerService;
pub use payment::PaymentService;
pub use schedule::ScheduleService;

pub(crate) const CUSTOMER: &str = "/customer";
pub(crate) const PAYMENT: &str = "/payment";
pub(crate) const ACH: &str = "/account/ach";
pub(crate) const CREDIT_CARD: &str = "/account/creditcard";
pub(crate) const PAYMENT_PLAN: &str = "/paymentplan";
pub(crate) const RECURRING_PAYMENT: &str = "/recurringpayment";
pub(crate) const PAYMENT_SCHEDULE: &str = "/paymentschedule";
pub(crate) const GLOBAL_SEARCH: &str = "/globalsearch";
