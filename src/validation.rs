//! Client-side payload validation.
//!
//! Each payload type carries one immutable rule set ([`Validate::RULES`]).
//! Rules are evaluated independently and every violation is reported, so a
//! caller sees all problems with a payload at once. Rules shared by a family of
//! types (every account needs a customer, every schedule needs an account) are
//! generic predicates over the family trait and appear in each member's set.
//!
//! Two rule generations exist. [`ValidationPolicy::Strict`] accepts raw values
//! only. [`ValidationPolicy::Permissive`] also accepts the masked values the
//! API returns for sensitive fields, and loosens postal codes.

use std::fmt;

use crate::{PaySimpleError, Result};

/// Rule generation used to validate payloads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ValidationPolicy {
    /// Raw digits only; US/CA postal code formats.
    Strict,
    /// Raw or masked sensitive fields; postal codes up to 10 characters.
    #[default]
    Permissive,
}

/// A single failed rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Field check with the message reported when it fails.
pub struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: fn(&T) -> bool,
    policy: Option<ValidationPolicy>,
}

impl<T> Rule<T> {
    /// A rule that applies under every policy.
    pub const fn new(field: &'static str, message: &'static str, check: fn(&T) -> bool) -> Self {
        Self {
            field,
            message,
            check,
            policy: None,
        }
    }

    /// Restricts the rule to one policy.
    pub const fn only(mut self, policy: ValidationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    fn applies(&self, policy: ValidationPolicy) -> bool {
        self.policy.map_or(true, |only| only == policy)
    }

    fn evaluate(&self, payload: &T) -> Option<ValidationError> {
        if (self.check)(payload) {
            None
        } else {
            Some(ValidationError::new(self.field, self.message))
        }
    }
}

/// Payload types with a client-side rule set.
pub trait Validate: Sized + 'static {
    const RULES: &'static [Rule<Self>];
}

/// Evaluates rule sets under a fixed policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Returns every violated rule. An empty list means the payload is valid.
    pub fn validate<T: Validate>(&self, payload: &T) -> Vec<ValidationError> {
        T::RULES
            .iter()
            .filter(|rule| rule.applies(self.policy))
            .filter_map(|rule| rule.evaluate(payload))
            .collect()
    }

    /// Fails with [`PaySimpleError::Validation`] when any rule is violated.
    pub fn ensure_valid<T: Validate>(&self, payload: &T) -> Result<()> {
        let violations = self.validate(payload);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(PaySimpleError::Validation(violations))
        }
    }
}

// ── Field predicates ──────────────────────────────────────────────────────────

pub(crate) fn is_digits(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

/// `min..=max` asterisks followed by exactly four digits.
pub(crate) fn is_masked(value: &str, min_stars: usize, max_stars: usize) -> bool {
    let stars = value.bytes().take_while(|&b| b == b'*').count();
    (min_stars..=max_stars).contains(&stars) && is_digits(&value[stars..], 4, 4)
}

pub(crate) fn is_bank_account_number(value: &str) -> bool {
    is_digits(value, 4, 100)
}

pub(crate) fn is_bank_account_number_or_masked(value: &str) -> bool {
    is_bank_account_number(value) || is_masked(value, 1, 96)
}

pub(crate) fn is_routing_number(value: &str) -> bool {
    is_digits(value, 9, 9)
}

/// Prefix and length rules of the major card networks. No checksum.
pub(crate) fn is_card_number(value: &str) -> bool {
    if !is_digits(value, 13, 16) {
        return false;
    }
    let len = value.len();
    let visa = value.starts_with('4') && (len == 13 || len == 16);
    let mastercard = len == 16 && matches!(&value[..2], "51" | "52" | "53" | "54" | "55");
    let amex = len == 15 && (value.starts_with("34") || value.starts_with("37"));
    let discover = len == 16 && (value.starts_with("6011") || value.starts_with("65"));
    visa || mastercard || amex || discover
}

pub(crate) fn is_card_number_or_masked(value: &str) -> bool {
    is_card_number(value) || is_masked(value, 11, 12)
}

/// `MM/20YY`.
pub(crate) fn is_expiration_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[2] != b'/' || !value.is_char_boundary(2) {
        return false;
    }
    let month_ok = matches!(value[..2].parse::<u8>(), Ok(1..=12)) && is_digits(&value[..2], 2, 2);
    month_ok && value[3..].starts_with("20") && is_digits(&value[3..], 4, 4)
}

/// `11111`, `11111-1111`, `A1A1A1` or `A1A 1A1`.
pub(crate) fn is_us_or_ca_postal_code(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.len() {
        5 => is_digits(value, 5, 5),
        10 => bytes[5] == b'-' && is_digits(&value[..5], 5, 5) && is_digits(&value[6..], 4, 4),
        6 => is_canadian(bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]),
        7 => {
            bytes[3] == b' ' && is_canadian(bytes[0], bytes[1], bytes[2], bytes[4], bytes[5], bytes[6])
        }
        _ => false,
    }
}

fn is_canadian(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> bool {
    a.is_ascii_alphabetic()
        && b.is_ascii_digit()
        && c.is_ascii_alphabetic()
        && d.is_ascii_digit()
        && e.is_ascii_alphabetic()
        && f.is_ascii_digit()
}

pub(crate) fn is_short_postal_code(value: &str) -> bool {
    value.chars().count() <= 10
}

pub(crate) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub(crate) fn max_chars(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}
