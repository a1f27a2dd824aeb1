//! Validation handshake
//!
//! A candidate endpoint receives a signed `{"success": true}` event and must
//! answer below 400. Nothing is persisted or mutated here.

use super::dispatcher::Dispatcher;
use super::store::SubscriptionStore;
use super::types::{EndPoint, ValidationEvent};
use crate::core::models::Webhook;
use crate::core::tenancy::CallerContext;
use crate::utils::error::Result;
use tracing::{info, warn};

/// Send the validation event to `endpoint` once
pub async fn validate(dispatcher: &Dispatcher, endpoint: &EndPoint) -> Result<()> {
    let outcome = dispatcher
        .deliver(endpoint, &ValidationEvent::default())
        .await?;

    match outcome.into_result() {
        Ok(()) => {
            info!(url = %endpoint.url, "Webhook endpoint validated");
            Ok(())
        }
        Err(e) => {
            warn!(url = %endpoint.url, error = %e, "Webhook endpoint failed validation");
            Err(e)
        }
    }
}

/// Validate a stored subscription visible to `caller`.
///
/// An unknown or out-of-scope id is `NotFound`, never a delivery failure.
pub async fn validate_stored(
    store: &SubscriptionStore,
    dispatcher: &Dispatcher,
    caller: &CallerContext,
    id: i64,
) -> Result<Webhook> {
    let webhook = store.get(caller, id).await?;
    validate(dispatcher, &webhook.endpoint()).await?;
    Ok(webhook)
}
