use crate::constants::{SCOPE_TERMINATOR, SECRET_KEY_PREFIX};
use kvsign_core::hash::{hex_hmac_sha256, hmac_sha256, SHA256_OUTPUT_LEN};
use kvsign_core::time::{format_date, DateTime};
use kvsign_core::Result;
use std::fmt::{Debug, Formatter};

/// Key derived for one date, region and service.
///
/// Never reuse a key across a different scope.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey([u8; SHA256_OUTPUT_LEN]);

impl SigningKey {
    /// Derive the signing key through the fixed HMAC chain:
    ///
    /// ```text
    /// kDate    = HMAC("AWS4" + secret, "20150830")
    /// kRegion  = HMAC(kDate, region)
    /// kService = HMAC(kRegion, service)
    /// kSigning = HMAC(kService, "aws4_request")
    /// ```
    pub fn derive(secret: &str, time: DateTime, region: &str, service: &str) -> Result<Self> {
        // Sign secret
        let secret = format!("{SECRET_KEY_PREFIX}{secret}");
        // Sign date
        let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes())?;
        // Sign region
        let sign_region = hmac_sha256(&sign_date, region.as_bytes())?;
        // Sign service
        let sign_service = hmac_sha256(&sign_region, service.as_bytes())?;
        // Sign request
        let sign_request = hmac_sha256(&sign_service, SCOPE_TERMINATOR.as_bytes())?;

        Ok(Self(sign_request))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.0
    }

    /// Sign the string to sign, returning 64 lowercase hex characters.
    pub fn sign(&self, string_to_sign: &str) -> Result<String> {
        hex_hmac_sha256(&self.0, string_to_sign.as_bytes())
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}
