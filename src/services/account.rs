use crate::{
    models::{Ach, ApiResponse, CreditCard},
    PaySimpleClient, Result,
};

use super::{ACH, CREDIT_CARD};

/// Bank and credit card accounts.
#[derive(Clone, Copy, Debug)]
pub struct AccountService<'a> {
    client: &'a PaySimpleClient,
}

impl<'a> AccountService<'a> {
    pub(crate) fn new(client: &'a PaySimpleClient) -> Self {
        Self { client }
    }

    pub async fn create_ach(&self, account: &Ach) -> Result<ApiResponse<Ach>> {
        self.client.ensure_valid(account)?;
        let url = self.client.endpoint(ACH);
        self.client.transport().post(&url, account).await
    }

    pub async fn update_ach(&self, account: &Ach) -> Result<ApiResponse<Ach>> {
        self.client.ensure_valid(account)?;
        let url = self.client.endpoint(ACH);
        self.client.transport().put(&url, account).await
    }

    pub async fn get_ach(&self, account_id: i64) -> Result<ApiResponse<Ach>> {
        let url = format!("{}/{account_id}", self.client.endpoint(ACH));
        self.client.transport().get(&url).await
    }

    pub async fn delete_ach(&self, account_id: i64) -> Result<()> {
        let url = format!("{}/{account_id}", self.client.endpoint(ACH));
        self.client.transport().delete(&url).await?;
        Ok(())
    }

    pub async fn create_credit_card(&self, account: &CreditCard) -> Result<ApiResponse<CreditCard>> {
        self.client.ensure_valid(account)?;
        let url = self.client.endpoint(CREDIT_CARD);
        self.client.transport().post(&url, account).await
    }

    pub async fn update_credit_card(&self, account: &CreditCard) -> Result<ApiResponse<CreditCard>> {
        self.client.ensure_valid(account)?;
        let url = self.client.endpoint(CREDIT_CARD);
        self.client.transport().put(&url, account).await
    }

    pub async fn get_credit_card(&self, account_id: i64) -> Result<ApiResponse<CreditCard>> {
        let url = format!("{}/{account_id}", self.client.endpoint(CREDIT_CARD));
        self.client.transport().get(&url).await
    }

    pub async fn delete_credit_card(&self, account_id: i64) -> Result<()> {
        let url = format!("{}/{account_id}", self.client.endpoint(CREDIT_CARD));
        self.client.transport().delete(&url).await?;
        Ok(())
    }
}
