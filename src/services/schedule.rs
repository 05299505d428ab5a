use chrono::NaiveDate;

use crate::{
    models::{ApiResponse, PaymentPlan, PaymentScheduleList, RecurringPayment},
    query::ScheduleListOptions,
    PaySimpleClient, Result,
};

use super::{PAYMENT_PLAN, PAYMENT_SCHEDULE, RECURRING_PAYMENT};

/// Payment plans and recurring payments.
///
/// Both resources share the same lifecycle endpoints (`suspend`, `resume`,
/// `pause`), so each operation exists once per schedule kind.
#[derive(Clone, Copy, Debug)]
pub struct ScheduleService<'a> {
    client: &'a PaySimpleClient,
}

impl<'a> ScheduleService<'a> {
    pub(crate) fn new(client: &'a PaySimpleClient) -> Self {
        Self { client }
    }

    /// Every schedule visible to the merchant.
    pub async fn list(
        &self,
        options: &ScheduleListOptions,
    ) -> Result<ApiResponse<PaymentScheduleList>> {
        let url = format!(
            "{}{}",
            self.client.endpoint(PAYMENT_SCHEDULE),
            options.to_query()
        );
        self.client.transport().get(&url).await
    }

    // ── Payment plans ─────────────────────────────────────────────────────────

    pub async fn create_payment_plan(&self, plan: &PaymentPlan) -> Result<ApiResponse<PaymentPlan>> {
        self.client.ensure_valid(plan)?;
        let url = self.client.endpoint(PAYMENT_PLAN);
        self.client.transport().post(&url, plan).await
    }

    pub async fn update_payment_plan(&self, plan: &PaymentPlan) -> Result<ApiResponse<PaymentPlan>> {
        self.client.ensure_valid(plan)?;
        let url = self.client.endpoint(PAYMENT_PLAN);
        self.client.transport().put(&url, plan).await
    }

    pub async fn get_payment_plan(&self, plan_id: i64) -> Result<ApiResponse<PaymentPlan>> {
        let url = self.url(PAYMENT_PLAN, plan_id, "");
        self.client.transport().get(&url).await
    }

    pub async fn delete_payment_plan(&self, plan_id: i64) -> Result<()> {
        let url = self.url(PAYMENT_PLAN, plan_id, "");
        self.client.transport().delete(&url).await?;
        Ok(())
    }

    pub async fn suspend_payment_plan(&self, plan_id: i64) -> Result<()> {
        self.lifecycle(PAYMENT_PLAN, plan_id, "/suspend").await
    }

    pub async fn resume_payment_plan(&self, plan_id: i64) -> Result<()> {
        self.lifecycle(PAYMENT_PLAN, plan_id, "/resume").await
    }

    /// Skips executions until `end_date`, after which the plan resumes.
    pub async fn pause_payment_plan_until(&self, plan_id: i64, end_date: NaiveDate) -> Result<()> {
        self.lifecycle(PAYMENT_PLAN, plan_id, &pause_suffix(end_date))
            .await
    }

    // ── Recurring payments ────────────────────────────────────────────────────

    pub async fn create_recurring_payment(
        &self,
        schedule: &RecurringPayment,
    ) -> Result<ApiResponse<RecurringPayment>> {
        self.client.ensure_valid(schedule)?;
        let url = self.client.endpoint(RECURRING_PAYMENT);
        self.client.transport().post(&url, schedule).await
    }

    pub async fn update_recurring_payment(
        &self,
        schedule: &RecurringPayment,
    ) -> Result<ApiResponse<RecurringPayment>> {
        self.client.ensure_valid(schedule)?;
        let url = self.client.endpoint(RECURRING_PAYMENT);
        self.client.transport().put(&url, schedule).await
    }

    pub async fn get_recurring_payment(
        &self,
        schedule_id: i64,
    ) -> Result<ApiResponse<RecurringPayment>> {
        let url = self.url(RECURRING_PAYMENT, schedule_id, "");
        self.client.transport().get(&url).await
    }

    pub async fn delete_recurring_payment(&self, schedule_id: i64) -> Result<()> {
        let url = self.url(RECURRING_PAYMENT, schedule_id, "");
        self.client.transport().delete(&url).await?;
        Ok(())
    }

    pub async fn suspend_recurring_payment(&self, schedule_id: i64) -> Result<()> {
        self.lifecycle(RECURRING_PAYMENT, schedule_id, "/suspend")
            .await
    }

    pub async fn resume_recurring_payment(&self, schedule_id: i64) -> Result<()> {
        self.lifecycle(RECURRING_PAYMENT, schedule_id, "/resume")
            .await
    }

    pub async fn pause_recurring_payment_until(
        &self,
        schedule_id: i64,
        end_date: NaiveDate,
    ) -> Result<()> {
        self.lifecycle(RECURRING_PAYMENT, schedule_id, &pause_suffix(end_date))
            .await
    }

    async fn lifecycle(&self, resource: &str, id: i64, action: &str) -> Result<()> {
        let url = self.url(resource, id, action);
        self.client.transport().put_raw(&url).await?;
        Ok(())
    }

    fn url(&self, resource: &str, id: i64, suffix: &str) -> String {
        format!("{}/{id}{suffix}", self.client.endpoint(resource))
    }
}

fn pause_suffix(end_date: NaiveDate) -> String {
    format!("/pause?enddate={}", end_date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::pause_suffix;
    use crate::{Credentials, PaySimpleClient};

    #[test]
    fn pause_carries_end_date() {
        let date = NaiveDate::from_ymd_opt(2016, 3, 1).unwrap();
        assert_eq!(pause_suffix(date), "/pause?enddate=2016-03-01");
    }

    #[test]
    fn schedule_urls_use_resource_prefix() {
        let client = PaySimpleClient::with_base_url("http://h", Credentials::new("u", "k"));
        let service = client.schedules();
        assert_eq!(
            service.url(super::PAYMENT_PLAN, 4, "/suspend"),
            "http://h/v4/paymentplan/4/suspend"
        );
        assert_eq!(
            service.url(super::RECURRING_PAYMENT, 4, ""),
            "http://h/v4/recurringpayment/4"
        );
    }
}
