use crate::{
    models::{
        AccountList, Ach, ApiResponse, CreditCard, Customer, Payment, PaymentPlan,
        PaymentScheduleList, RecurringPayment, SearchResults,
    },
    query::{CustomerListOptions, PaymentListOptions, ScheduleListOptions},
    PaySimpleClient, Result,
};

use super::{CUSTOMER, GLOBAL_SEARCH};

/// Customer records and everything hanging off them.
#[derive(Clone, Copy, Debug)]
pub struct CustomerService<'a> {
    client: &'a PaySimpleClient,
}

impl<'a> CustomerService<'a> {
    pub(crate) fn new(client: &'a PaySimpleClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, customer: &Customer) -> Result<ApiResponse<Customer>> {
        self.client.ensure_valid(customer)?;
        let url = self.client.endpoint(CUSTOMER);
        self.client.transport().post(&url, customer).await
    }

    pub async fn update(&self, customer: &Customer) -> Result<ApiResponse<Customer>> {
        self.client.ensure_valid(customer)?;
        let url = self.client.endpoint(CUSTOMER);
        self.client.transport().put(&url, customer).await
    }

    pub async fn delete(&self, customer_id: i64) -> Result<()> {
        let url = self.customer_url(customer_id, "");
        self.client.transport().delete(&url).await?;
        Ok(())
    }

    pub async fn get(&self, customer_id: i64) -> Result<ApiResponse<Customer>> {
        let url = self.customer_url(customer_id, "");
        self.client.transport().get(&url).await
    }

    pub async fn list(&self, options: &CustomerListOptions) -> Result<ApiResponse<Vec<Customer>>> {
        let url = format!("{}{}", self.client.endpoint(CUSTOMER), options.to_query());
        self.client.transport().get(&url).await
    }

    /// Free-text search across customers.
    pub async fn find(&self, query: &str) -> Result<ApiResponse<SearchResults>> {
        let url = format!(
            "{}?query={}",
            self.client.endpoint(GLOBAL_SEARCH),
            urlencoding::encode(query)
        );
        self.client.transport().get(&url).await
    }

    pub async fn ach_accounts(&self, customer_id: i64) -> Result<ApiResponse<Vec<Ach>>> {
        let url = self.customer_url(customer_id, "/achaccounts");
        self.client.transport().get(&url).await
    }

    pub async fn credit_card_accounts(
        &self,
        customer_id: i64,
    ) -> Result<ApiResponse<Vec<CreditCard>>> {
        let url = self.customer_url(customer_id, "/creditcardaccounts");
        self.client.transport().get(&url).await
    }

    pub async fn all_accounts(&self, customer_id: i64) -> Result<ApiResponse<AccountList>> {
        let url = self.customer_url(customer_id, "/accounts");
        self.client.transport().get(&url).await
    }

    pub async fn default_ach_account(&self, customer_id: i64) -> Result<ApiResponse<Ach>> {
        let url = self.customer_url(customer_id, "/defaultach");
        self.client.transport().get(&url).await
    }

    pub async fn default_credit_card_account(
        &self,
        customer_id: i64,
    ) -> Result<ApiResponse<CreditCard>> {
        let url = self.customer_url(customer_id, "/defaultcreditcard");
        self.client.transport().get(&url).await
    }

    /// Payment history for one customer. Pass
    /// [`PaymentListOptions::for_customer`] for the oldest-first default.
    pub async fn payments(
        &self,
        customer_id: i64,
        options: &PaymentListOptions,
    ) -> Result<ApiResponse<Vec<Payment>>> {
        let url = self.customer_url(customer_id, &format!("/payments{}", options.to_query()));
        self.client.transport().get(&url).await
    }

    pub async fn payment_plans(
        &self,
        customer_id: i64,
        options: &ScheduleListOptions,
    ) -> Result<ApiResponse<Vec<PaymentPlan>>> {
        let url = self.customer_url(customer_id, &format!("/paymentplans{}", options.to_query()));
        self.client.transport().get(&url).await
    }

    pub async fn recurring_payments(
        &self,
        customer_id: i64,
        options: &ScheduleListOptions,
    ) -> Result<ApiResponse<Vec<RecurringPayment>>> {
        let url = self.customer_url(
            customer_id,
            &format!("/recurringpayments{}", options.to_query()),
        );
        self.client.transport().get(&url).await
    }

    pub async fn payment_schedules(
        &self,
        customer_id: i64,
        options: &ScheduleListOptions,
    ) -> Result<ApiResponse<PaymentScheduleList>> {
        let url = self.customer_url(
            customer_id,
            &format!("/paymentschedules{}", options.to_query()),
        );
        self.client.transport().get(&url).await
    }

    /// Marks an existing account as the customer's default.
    pub async fn set_default_account(&self, customer_id: i64, account_id: i64) -> Result<()> {
        let url = self.customer_url(customer_id, &format!("/{account_id}"));
        self.client.transport().put_raw(&url).await?;
        Ok(())
    }

    fn customer_url(&self, customer_id: i64, suffix: &str) -> String {
        format!("{}/{customer_id}{suffix}", self.client.endpoint(CUSTOMER))
    }
}
