//! List endpoint options rendered into query strings.
//!
//! `lite` is always sent; every other parameter is sent only when it differs
//! from the server default.

use std::fmt::{Display, Write as _};

use chrono::NaiveDate;

use crate::models::{PaymentStatus, ScheduleStatus, SortDirection};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 200;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CustomerSort {
    #[default]
    LastName,
    FirstName,
    Company,
    CreatedOn,
    LastModified,
}

impl CustomerSort {
    fn as_query(self) -> &'static str {
        match self {
            Self::LastName => "lastname",
            Self::FirstName => "firstname",
            Self::Company => "company",
            Self::CreatedOn => "createdon",
            Self::LastModified => "lastmodified",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaymentSort {
    #[default]
    PaymentId,
    PaymentType,
    PaymentDate,
    Amount,
    Status,
    CustomerLastName,
}

impl PaymentSort {
    fn as_query(self) -> &'static str {
        match self {
            Self::PaymentId => "paymentid",
            Self::PaymentType => "paymenttype",
            Self::PaymentDate => "paymentdate",
            Self::Amount => "amount",
            Self::Status => "status",
            Self::CustomerLastName => "customerlastname",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScheduleSort {
    #[default]
    Id,
    StartDate,
    EndDate,
    PaymentAmount,
    NextScheduleDate,
    CustomerLastName,
}

impl ScheduleSort {
    fn as_query(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::StartDate => "startdate",
            Self::EndDate => "enddate",
            Self::PaymentAmount => "paymentamount",
            Self::NextScheduleDate => "nextscheduledate",
            Self::CustomerLastName => "customerlastname",
        }
    }
}

/// Options for listing customers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomerListOptions {
    pub sort_by: CustomerSort,
    pub direction: SortDirection,
    pub page: u32,
    pub page_size: u32,
    /// Ask the server for abbreviated records.
    pub lite: bool,
}

impl Default for CustomerListOptions {
    fn default() -> Self {
        Self {
            sort_by: CustomerSort::default(),
            direction: SortDirection::Ascending,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            lite: false,
        }
    }
}

impl CustomerListOptions {
    pub(crate) fn to_query(&self) -> String {
        let mut query = QueryString::new(self.lite);
        if self.sort_by != CustomerSort::default() {
            query.push("sortby", self.sort_by.as_query());
        }
        query.paging(self.direction, self.page, self.page_size);
        query.finish()
    }
}

/// Options for listing payments.
///
/// [`Default`] lists merchant-wide payments newest first. Use
/// [`PaymentListOptions::for_customer`] for a single customer's history, which
/// the API returns oldest first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentListOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Vec<PaymentStatus>,
    pub sort_by: PaymentSort,
    pub direction: SortDirection,
    pub page: u32,
    pub page_size: u32,
    pub lite: bool,
}

impl Default for PaymentListOptions {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            status: Vec::new(),
            sort_by: PaymentSort::default(),
            direction: SortDirection::Descending,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            lite: false,
        }
    }
}

impl PaymentListOptions {
    /// Defaults for [`CustomerService::payments`](crate::services::CustomerService::payments).
    pub fn for_customer() -> Self {
        Self {
            direction: SortDirection::Ascending,
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> String {
        let mut query = QueryString::new(self.lite);
        query.dates(self.start_date, self.end_date);
        if !self.status.is_empty() {
            let statuses = self
                .status
                .iter()
                .map(|status| status.as_query())
                .collect::<Vec<_>>()
                .join(",");
            query.push("status", statuses);
        }
        if self.sort_by != PaymentSort::default() {
            query.push("sortby", self.sort_by.as_query());
        }
        query.paging(self.direction, self.page, self.page_size);
        query.finish()
    }
}

/// Options for listing payment plans, recurring payments or both.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScheduleListOptions {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ScheduleStatus>,
    pub sort_by: ScheduleSort,
    pub direction: SortDirection,
    pub page: u32,
    pub page_size: u32,
    pub lite: bool,
}

impl Default for ScheduleListOptions {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            status: None,
            sort_by: ScheduleSort::default(),
            direction: SortDirection::Ascending,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            lite: false,
        }
    }
}

impl ScheduleListOptions {
    pub(crate) fn to_query(&self) -> String {
        let mut query = QueryString::new(self.lite);
        query.dates(self.start_date, self.end_date);
        if let Some(status) = self.status {
            query.push("status", status.as_query());
        }
        if self.sort_by != ScheduleSort::default() {
            query.push("sortby", self.sort_by.as_query());
        }
        query.paging(self.direction, self.page, self.page_size);
        query.finish()
    }
}

struct QueryString(String);

impl QueryString {
    fn new(lite: bool) -> Self {
        Self(format!("?lite={lite}"))
    }

    fn push(&mut self, key: &str, value: impl Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.0, "&{key}={value}");
    }

    fn dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        if let Some(start) = start {
            self.push("startdate", start.format("%Y-%m-%d"));
        }
        if let Some(end) = end {
            self.push("enddate", end.format("%Y-%m-%d"));
        }
    }

    fn paging(&mut self, direction: SortDirection, page: u32, page_size: u32) {
        if direction != SortDirection::Ascending {
            self.push("direction", direction.as_query());
        }
        if page != DEFAULT_PAGE {
            self.push("page", page);
        }
        if page_size != DEFAULT_PAGE_SIZE {
            self.push("pagesize", page_size);
        }
    }

    fn finish(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        CustomerListOptions, CustomerSort, PaymentListOptions, PaymentSort, ScheduleListOptions,
        ScheduleSort,
    };
    use crate::models::{PaymentStatus, ScheduleStatus, SortDirection};

    #[test]
    fn default_customer_query_only_carries_lite() {
        assert_eq!(CustomerListOptions::default().to_query(), "?lite=false");
    }

    #[test]
    fn customer_query_carries_non_default_values() {
        let options = CustomerListOptions {
            sort_by: CustomerSort::Company,
            direction: SortDirection::Descending,
            page: 3,
            page_size: 50,
            lite: true,
        };
        assert_eq!(
            options.to_query(),
            "?lite=true&sortby=company&direction=desc&page=3&pagesize=50"
        );
    }

    #[test]
    fn default_payment_query_is_descending() {
        assert_eq!(
            PaymentListOptions::default().to_query(),
            "?lite=false&direction=desc"
        );
    }

    #[test]
    fn customer_payment_query_is_ascending() {
        let options = PaymentListOptions::for_customer();
        assert_eq!(options.direction, SortDirection::Ascending);
        assert_eq!(options.to_query(), "?lite=false");
    }

    #[test]
    fn payment_query_joins_statuses_and_formats_dates() {
        let options = PaymentListOptions {
            start_date: NaiveDate::from_ymd_opt(2015, 1, 2),
            end_date: NaiveDate::from_ymd_opt(2015, 12, 31),
            status: vec![PaymentStatus::Settled, PaymentStatus::Voided],
            sort_by: PaymentSort::Amount,
            direction: SortDirection::Ascending,
            ..PaymentListOptions::default()
        };
        assert_eq!(
            options.to_query(),
            "?lite=false&startdate=2015-01-02&enddate=2015-12-31&status=settled,voided&sortby=amount"
        );
    }

    #[test]
    fn schedule_query_carries_single_status() {
        let options = ScheduleListOptions {
            status: Some(ScheduleStatus::Suspended),
            sort_by: ScheduleSort::NextScheduleDate,
            page: 2,
            ..ScheduleListOptions::default()
        };
        assert_eq!(
            options.to_query(),
            "?lite=false&status=suspended&sortby=nextscheduledate&page=2"
        );
    }
}
