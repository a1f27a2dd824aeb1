//! Single-attempt webhook delivery

use super::signer::Signer;
use super::types::{DeliveryOutcome, EndPoint};
use crate::config::WebhookConfig;
use crate::core::models::webhook::ERR_SECRET_NOT_SPECIFIED;
use crate::utils::error::{GatewayError, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the payload signature
pub const SIGNATURE_HEADER: &str = "X-Webhook-Signature";

/// Rejected response bodies are cut to this many bytes
pub const MAX_REJECTED_BODY_BYTES: usize = 512;

/// Posts signed payloads to subscription endpoints
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: reqwest::Client,
    timeout: Duration,
    allow_unsigned: bool,
}

impl Dispatcher {
    pub fn new(config: &WebhookConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            timeout,
            allow_unsigned: config.allow_unsigned,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Deliver `payload` to `endpoint` exactly once.
    ///
    /// Remote failures are reported through [`DeliveryOutcome`]; `Err` is
    /// reserved for local faults.
    pub async fn deliver<T>(&self, endpoint: &EndPoint, payload: &T) -> Result<DeliveryOutcome>
    where
        T: Serialize + ?Sized,
    {
        let signer = if endpoint.secret.is_empty() {
            if !self.allow_unsigned {
                return Err(GatewayError::validation(ERR_SECRET_NOT_SPECIFIED));
            }
            None
        } else {
            Some(Signer::new(&endpoint.secret)?)
        };

        let body = serde_json::to_vec(payload)?;

        let mut request = self
            .client
            .post(&endpoint.url)
            .timeout(self.timeout)
            .header(CONTENT_TYPE, "application/json");
        if let Some(signer) = &signer {
            request = request.header(SIGNATURE_HEADER, signer.sign(&body));
        }

        let response = match request.body(body).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = describe_send_error(&e, self.timeout);
                warn!(url = %endpoint.url, reason = %reason, "Webhook endpoint unreachable");
                return Ok(DeliveryOutcome::Unreachable { reason });
            }
        };

        let status = response.status().as_u16();
        if status < 400 {
            debug!(url = %endpoint.url, status, "Webhook delivered");
            return Ok(DeliveryOutcome::Delivered { status });
        }

        match read_capped(response).await {
            Ok(body) => {
                warn!(url = %endpoint.url, status, "Webhook endpoint rejected delivery");
                Ok(DeliveryOutcome::Rejected { status, body })
            }
            Err(e) => Ok(DeliveryOutcome::Unreachable {
                reason: format!("failed to read response body: {e}"),
            }),
        }
    }
}

fn describe_send_error(error: &reqwest::Error, timeout: Duration) -> String {
    if error.is_timeout() {
        format!("request timed out after {}s", timeout.as_secs())
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else {
        error.to_string()
    }
}

/// Read at most [`MAX_REJECTED_BODY_BYTES`] of the body and drop the rest
async fn read_capped(mut response: reqwest::Response) -> reqwest::Result<String> {
    let mut buf = Vec::with_capacity(MAX_REJECTED_BODY_BYTES);
    while buf.len() < MAX_REJECTED_BODY_BYTES {
        match response.chunk().await? {
            Some(chunk) => buf.extend_from_slice(&chunk),
            None => break,
        }
    }
    buf.truncate(MAX_REJECTED_BODY_BYTES);
    Ok(truncate_body(String::from_utf8_lossy(&buf).into_owned()))
}

/// Cut `body` to at most [`MAX_REJECTED_BODY_BYTES`] on a char boundary
fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_REJECTED_BODY_BYTES {
        let mut end = MAX_REJECTED_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}
