//! HMAC-SHA256 payload signing

use crate::core::models::webhook::ERR_SECRET_NOT_SPECIFIED;
use crate::utils::error::{GatewayError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Prefix of every signature header value
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Signs payload bytes with a subscription secret
#[derive(Clone)]
pub struct Signer {
    mac: HmacSha256,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}

impl Signer {
    pub fn new(secret: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(GatewayError::validation(ERR_SECRET_NOT_SPECIFIED));
        }
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| GatewayError::Crypto(e.to_string()))?;
        Ok(Self { mac })
    }

    /// `sha256=<hex>` tag of `payload`
    pub fn sign(&self, payload: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload);
        format!(
            "{}{}",
            SIGNATURE_PREFIX,
            hex::encode(mac.finalize().into_bytes())
        )
    }

    /// Check a received signature header in constant time
    pub fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Some(encoded) = signature.strip_prefix(SIGNATURE_PREFIX) else {
            return false;
        };
        let Ok(expected) = hex::decode(encoded) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(payload);
        mac.verify_slice(&expected).is_ok()
    }
}
