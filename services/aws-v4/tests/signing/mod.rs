mod properties;
mod reference;
mod special_chars;
mod standard;

use kvsign_aws_v4::{Credential, SigningContext};
use kvsign_core::time::parse_iso8601;

pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

/// Initialize test logging.
pub fn init_signing_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Credential used by the published SigV4 examples.
pub fn example_credential() -> Credential {
    Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY)
}

/// Signing context at `20150830T123600Z`, the time used by the published examples.
pub fn example_context(region: &str, service: &str) -> SigningContext {
    SigningContext::new(
        region,
        service,
        parse_iso8601("20150830T123600Z").expect("time must be valid"),
    )
}
