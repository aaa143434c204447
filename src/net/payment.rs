//! Payment initialization for paid recipes.
//!
//! The client only kicks the flow off; the provider's hosted checkout
//! page (reached via `checkout_url`) handles everything after that.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use serde::Deserialize;

use super::gateway::{Gateway, GatewayError};
use super::queries;
use super::types::PaymentResult;

#[derive(Deserialize)]
struct InitializePaymentData {
    #[serde(rename = "initializePayment")]
    initialize_payment: PaymentResult,
}

/// Initialize a checkout for a paid recipe.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn initialize_payment(
    gateway: &Gateway,
    recipe_id: &str,
    amount: f64,
) -> Result<PaymentResult, GatewayError> {
    let data: InitializePaymentData = gateway
        .execute(
            queries::INITIALIZE_PAYMENT_MUTATION,
            queries::payment_variables(recipe_id, amount),
        )
        .await?;
    Ok(data.initialize_payment)
}
