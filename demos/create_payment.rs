use std::str::FromStr;

use paysimple::{
    models::{Ach, Customer, Payment},
    PaySimpleClient,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = PaySimpleClient::from_env()?;

    let customer = client
        .customers()
        .create(&Customer {
            first_name: "Kit".to_owned(),
            last_name: "Cat".to_owned(),
            ..Customer::default()
        })
        .await?
        .response;

    let account = client
        .accounts()
        .create_ach(&Ach {
            customer_id: customer.id,
            is_checking_account: true,
            routing_number: "131111114".to_owned(),
            account_number: "751111111".to_owned(),
            bank_name: "PaySimple Bank".to_owned(),
            ..Ach::default()
        })
        .await?
        .response;

    let payment = client
        .payments()
        .create(&Payment {
            account_id: account.id,
            amount: Decimal::from_str("10.00")?,
            ..Payment::default()
        })
        .await?
        .response;

    println!(
        "payment {} for customer {}: {:?}",
        payment.id, customer.id, payment.status
    );

    Ok(())
}
