use crate::constants::ALGORITHM;

/// Assemble the `Authorization` header value.
///
/// `signed_headers` must already be lowercase and sorted, as returned by
/// [`CanonicalRequest::signed_header_names`](crate::CanonicalRequest::signed_header_names).
pub fn authorization_header(
    credential_scope: &str,
    signed_headers: &[String],
    signature: &str,
) -> String {
    format!(
        "{} Credential={}, SignedHeaders={}, Signature={}",
        ALGORITHM,
        credential_scope,
        signed_headers.join(";"),
        signature
    )
}
