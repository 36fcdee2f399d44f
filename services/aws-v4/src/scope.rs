use crate::constants::{ALGORITHM, SCOPE_TERMINATOR};
use kvsign_core::time::{format_date, format_iso8601, DateTime};

/// Scope without the access key: `20150830/us-east-1/iam/aws4_request`
///
/// Both the credential scope and the string to sign are built from this.
pub fn scope(time: DateTime, region: &str, service: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        format_date(time),
        region,
        service,
        SCOPE_TERMINATOR
    )
}

/// Credential scope: `AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request`
pub fn credential_scope(access_key_id: &str, time: DateTime, region: &str, service: &str) -> String {
    format!("{}/{}", access_key_id, scope(time, region, service))
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20150830T123600Z
/// 20150830/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    time: DateTime,
    region: &str,
    service: &str,
    canonical_request_hash: &str,
) -> String {
    let mut s = String::with_capacity(128);
    s.push_str(ALGORITHM);
    s.push('\n');
    s.push_str(&format_iso8601(time));
    s.push('\n');
    s.push_str(&scope(time, region, service));
    s.push('\n');
    s.push_str(canonical_request_hash);
    s
}
