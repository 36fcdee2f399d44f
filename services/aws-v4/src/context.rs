use kvsign_core::time::{format_iso8601, DateTime};
use kvsign_core::{Error, Result};

/// Region, service and time a request is signed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    /// Region identifier, for example `us-east-1`.
    pub region: String,
    /// Service identifier, for example `dynamodb`.
    pub service: String,
    /// Signing time in UTC.
    pub time: DateTime,
}

impl SigningContext {
    /// Create a new signing context.
    ///
    /// The caller always supplies `time`; the signer never reads the clock.
    pub fn new(region: impl Into<String>, service: impl Into<String>, time: DateTime) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
            time,
        }
    }

    /// Check that region and service are present.
    pub fn check(&self) -> Result<()> {
        if self.region.is_empty() {
            return Err(Error::missing_context("region is empty"));
        }
        if self.service.is_empty() {
            return Err(Error::missing_context("service is empty"));
        }

        Ok(())
    }

    /// Signing timestamp: `20150830T123600Z`
    pub fn timestamp(&self) -> String {
        format_iso8601(self.time)
    }
}
