use crate::{
    models::{ApiResponse, Payment},
    query::PaymentListOptions,
    PaySimpleClient, Result,
};

use super::PAYMENT;

#[derive(Clone, Copy, Debug)]
pub struct PaymentService<'a> {
    client: &'a PaySimpleClient,
}

impl<'a> PaymentService<'a> {
    pub(crate) fn new(client: &'a PaySimpleClient) -> Self {
        Self { client }
    }

    /// Charges an existing account.
    pub async fn create(&self, payment: &Payment) -> Result<ApiResponse<Payment>> {
        self.client.ensure_valid(payment)?;
        let url = self.client.endpoint(PAYMENT);
        self.client.transport().post(&url, payment).await
    }

    pub async fn get(&self, payment_id: i64) -> Result<ApiResponse<Payment>> {
        let url = self.payment_url(payment_id, "");
        self.client.transport().get(&url).await
    }

    pub async fn list(&self, options: &PaymentListOptions) -> Result<ApiResponse<Vec<Payment>>> {
        let url = format!("{}{}", self.client.endpoint(PAYMENT), options.to_query());
        self.client.transport().get(&url).await
    }

    /// Refunds a settled payment.
    pub async fn reverse(&self, payment_id: i64) -> Result<ApiResponse<Payment>> {
        let url = self.payment_url(payment_id, "/reverse");
        self.client.transport().put_empty(&url).await
    }

    /// Cancels a payment that has not settled yet.
    pub async fn void(&self, payment_id: i64) -> Result<ApiResponse<Payment>> {
        let url = self.payment_url(payment_id, "/void");
        self.client.transport().put_empty(&url).await
    }

    fn payment_url(&self, payment_id: i64, suffix: &str) -> String {
        format!("{}/{payment_id}{suffix}", self.client.endpoint(PAYMENT))
    }
}
