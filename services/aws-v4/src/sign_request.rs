use crate::authorization::authorization_header;
use crate::canonical_request::{normalize_header_value, normalize_headers, CanonicalRequest};
use crate::constants::{
    CONTENT_TYPE, DEFAULT_CONTENT_TYPE, HOST, UNSIGNED_HEADERS, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use crate::scope::{credential_scope, string_to_sign};
use crate::signing_key::SigningKey;
use crate::{Credential, RequestDescription, SigningContext};
use bytes::Bytes;
use http::header::{HeaderName, AUTHORIZATION};
use http::request::Parts;
use http::HeaderValue;
use kvsign_core::{Error, Result};
use log::debug;

/// RequestSigner that implement AWS SigV4 with header based signing.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer holds no state between calls. Credentials and signing time
/// are passed to every call and never cached.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    host: Option<String>,
    content_type: String,
    signed_headers: Option<Vec<String>>,
    unsigned_headers: Vec<String>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of signing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningOutput {
    /// Value of the `Authorization` header.
    pub authorization: String,
    /// Lowercase, sorted names of the headers bound into the signature.
    ///
    /// These headers must be sent exactly as signed.
    pub signed_headers: Vec<String>,
    /// Headers added by the signer because the request did not carry them.
    pub added_headers: Vec<(String, String)>,
}

impl RequestSigner {
    /// Create a new signer.
    ///
    /// Without an explicit host, `host` defaults to the regional endpoint
    /// `<service>.<region>.amazonaws.com`.
    pub fn new() -> Self {
        Self {
            host: None,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            signed_headers: None,
            unsigned_headers: UNSIGNED_HEADERS.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Specify the host used when the request carries no `host` header.
    ///
    /// Useful for local endpoints like `localhost:8000`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Specify the content type used when the request carries none.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sign exactly the given headers instead of every header present.
    ///
    /// `host`, `x-amz-date` and `x-amz-security-token` are always signed.
    /// A selected header missing from the request fails signing with
    /// [`ErrorKind::RequestInvalid`](kvsign_core::ErrorKind::RequestInvalid).
    pub fn with_signed_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.signed_headers = Some(lowercase_names(names));
        self
    }

    /// Replace the headers left out of the signature, [`UNSIGNED_HEADERS`]
    /// by default.
    ///
    /// Has no effect once [`RequestSigner::with_signed_headers`] is set.
    pub fn with_unsigned_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.unsigned_headers = lowercase_names(names);
        self
    }

    /// Sign the request and return the `Authorization` header value.
    pub fn sign(
        &self,
        req: &RequestDescription,
        cred: &Credential,
        ctx: &SigningContext,
    ) -> Result<SigningOutput> {
        cred.check()?;
        ctx.check()?;

        let added_headers = self.required_headers(req, cred, ctx)?;
        let mut headers = Vec::with_capacity(req.headers.len() + added_headers.len());
        headers.extend(req.headers.iter().cloned());
        headers.extend(added_headers.iter().cloned());

        let signed_header_names = self.signed_header_names(&headers)?;
        let creq = CanonicalRequest::build(
            &req.method,
            req.path.as_deref(),
            req.query.as_deref(),
            &headers,
            &signed_header_names,
            req.body.as_deref(),
        )?;
        let encoded_req = creq.hash();
        debug!("calculated canonical request hash: {encoded_req}");

        let string_to_sign = string_to_sign(ctx.time, &ctx.region, &ctx.service, &encoded_req);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            SigningKey::derive(&cred.secret_access_key, ctx.time, &ctx.region, &ctx.service)?;
        let signature = signing_key.sign(&string_to_sign)?;

        let scope = credential_scope(&cred.access_key_id, ctx.time, &ctx.region, &ctx.service);
        let signed_headers = creq.signed_header_names();
        let authorization = authorization_header(&scope, &signed_headers, &signature);

        Ok(SigningOutput {
            authorization,
            signed_headers,
            added_headers,
        })
    }

    /// Sign `http::request::Parts` in place.
    ///
    /// All headers the signer adds, including `authorization`, are
    /// inserted into `parts`. Any later change to a signed header
    /// invalidates the signature.
    pub fn sign_parts(
        &self,
        parts: &mut Parts,
        body: impl Into<Bytes>,
        cred: &Credential,
        ctx: &SigningContext,
    ) -> Result<SigningOutput> {
        let req = RequestDescription::from_parts(parts, body)?;
        let output = self.sign(&req, cred, ctx)?;

        // Host derived from the uri authority is signed, so send it too.
        if !parts.headers.contains_key(http::header::HOST) {
            if let Some(host) = req.header(HOST) {
                parts
                    .headers
                    .insert(http::header::HOST, HeaderValue::from_str(host)?);
            }
        }

        for (name, value) in &output.added_headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let mut value = HeaderValue::from_str(value)?;
            if name == X_AMZ_SECURITY_TOKEN {
                // Set token value sensitive to avoid leaking.
                value.set_sensitive(true);
            }
            parts.headers.insert(name, value);
        }

        let mut authorization = HeaderValue::from_str(&output.authorization)?;
        authorization.set_sensitive(true);
        parts.headers.insert(AUTHORIZATION, authorization);

        Ok(output)
    }

    /// Names bound into the signature: the caller's selection, or every
    /// header present minus the unsigned ones.
    fn signed_header_names(&self, headers: &[(String, String)]) -> Result<Vec<String>> {
        let present = normalize_headers(headers)?;

        let Some(selected) = &self.signed_headers else {
            return Ok(present
                .into_keys()
                .filter(|name| !self.unsigned_headers.contains(name))
                .collect());
        };

        let mut names = selected.clone();
        for name in [HOST, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN] {
            if present.contains_key(name) && !names.iter().any(|v| v == name) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Headers every signed request needs, unless the caller supplied them.
    fn required_headers(
        &self,
        req: &RequestDescription,
        cred: &Credential,
        ctx: &SigningContext,
    ) -> Result<Vec<(String, String)>> {
        let mut added = Vec::with_capacity(4);

        // Insert HOST header if not present.
        if !req.has_header(HOST) {
            let host = match &self.host {
                Some(host) => host.clone(),
                None => endpoint_host(&ctx.region, &ctx.service),
            };
            added.push((HOST.to_string(), host));
        }

        // Insert DATE header if not present, a supplied one must match the signing time.
        let timestamp = ctx.timestamp();
        match req.header(X_AMZ_DATE) {
            Some(v) if normalize_header_value(v) != timestamp => {
                return Err(Error::request_invalid(format!(
                    "x-amz-date header {v} disagrees with signing time {timestamp}"
                )));
            }
            Some(_) => {}
            None => added.push((X_AMZ_DATE.to_string(), timestamp)),
        }

        // Insert CONTENT_TYPE header if not present.
        if !req.has_header(CONTENT_TYPE) {
            added.push((CONTENT_TYPE.to_string(), self.content_type.clone()));
        }

        // Insert X_AMZ_SECURITY_TOKEN header if security token exists.
        if let Some(token) = &cred.session_token {
            match req.header(X_AMZ_SECURITY_TOKEN) {
                Some(v) if normalize_header_value(v) != normalize_header_value(token) => {
                    return Err(Error::request_invalid(
                        "x-amz-security-token header disagrees with credential",
                    ));
                }
                Some(_) => {}
                None => added.push((X_AMZ_SECURITY_TOKEN.to_string(), token.clone())),
            }
        }

        Ok(added)
    }
}

fn lowercase_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|v| v.as_ref().trim().to_ascii_lowercase())
        .collect()
}

/// Regional endpoint host: `dynamodb.us-east-1.amazonaws.com`
pub fn endpoint_host(region: &str, service: &str) -> String {
    if region.starts_with("cn-") {
        format!("{service}.{region}.amazonaws.com.cn")
    } else {
        format!("{service}.{region}.amazonaws.com")
    }
}
