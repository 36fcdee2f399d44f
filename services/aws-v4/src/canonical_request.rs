use crate::constants::AWS_QUERY_ENCODE_SET;
use http::Method;
use kvsign_core::hash::hex_sha256;
use kvsign_core::{Error, Result};
use percent_encoding::{percent_decode, percent_encode};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Canonical form of a request as defined by SigV4.
///
/// ```text
/// POST
/// /
///
/// content-type:application/x-amz-json-1.0
/// host:dynamodb.us-east-1.amazonaws.com
/// x-amz-date:20150830T123600Z
///
/// content-type;host;x-amz-date
/// <hex sha256 of body>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: String,
    uri: String,
    query: String,
    /// Lowercased names with normalized values, sorted by name.
    headers: Vec<(String, String)>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Canonicalize a request.
    ///
    /// Only headers named in `signed_header_names` end up in the canonical
    /// request. Names are matched without regard to case.
    pub fn build(
        method: &Method,
        path: Option<&str>,
        query: Option<&str>,
        headers: &[(String, String)],
        signed_header_names: &[String],
        body: Option<&[u8]>,
    ) -> Result<Self> {
        let normalized = normalize_headers(headers)?;

        let mut signed = BTreeMap::new();
        for name in signed_header_names {
            let name = name.trim().to_ascii_lowercase();
            let value = normalized.get(&name).ok_or_else(|| {
                Error::request_invalid(format!("signed header {name} is not present in request"))
            })?;
            signed.insert(name, value.clone());
        }

        Ok(Self {
            method: method.as_str().to_ascii_uppercase(),
            uri: match path {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => "/".to_string(),
            },
            query: canonicalize_query(query.unwrap_or_default()),
            headers: signed.into_iter().collect(),
            payload_hash: hex_sha256(body.unwrap_or_default()),
        })
    }

    /// Canonical headers block: `name:value\n` per signed header.
    pub fn canonical_headers(&self) -> String {
        let mut s = String::with_capacity(64);
        for (name, value) in &self.headers {
            s.push_str(name);
            s.push(':');
            s.push_str(value);
            s.push('\n');
        }
        s
    }

    /// Signed header names, lowercase and sorted.
    pub fn signed_header_names(&self) -> Vec<String> {
        self.headers.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Signed header names joined with `;`.
    pub fn signed_headers(&self) -> String {
        self.headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Hex encoded SHA256 of the body.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Hex encoded SHA256 of the whole canonical request.
    pub fn hash(&self) -> String {
        hex_sha256(self.to_string().as_bytes())
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query)?;
        f.write_str(&self.canonical_headers())?;
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers())?;
        write!(f, "{}", self.payload_hash)
    }
}

/// Build the canonical request and return its hash together with the
/// signed header names.
pub fn canonical_request_hash(
    method: &Method,
    path: Option<&str>,
    query: Option<&str>,
    headers: &[(String, String)],
    signed_header_names: &[String],
    body: Option<&[u8]>,
) -> Result<(String, Vec<String>)> {
    let creq = CanonicalRequest::build(method, path, query, headers, signed_header_names, body)?;
    Ok((creq.hash(), creq.signed_header_names()))
}

/// Lowercase header names, normalize values and merge names that only
/// differ by case.
///
/// Merging is only allowed when the normalized values agree.
pub(crate) fn normalize_headers(
    headers: &[(String, String)],
) -> Result<BTreeMap<String, String>> {
    let mut normalized: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let name = name.trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(Error::request_invalid("header name is empty"));
        }
        let value = normalize_header_value(value);

        match normalized.get(&name) {
            Some(existing) if *existing != value => {
                return Err(Error::ambiguous_header(format!(
                    "header {name} is given more than once with conflicting values"
                )));
            }
            Some(_) => {}
            None => {
                normalized.insert(name, value);
            }
        }
    }

    Ok(normalized)
}

/// Trim the value and collapse interior whitespace runs into one space.
pub fn normalize_header_value(value: &str) -> String {
    let mut s = String::with_capacity(value.len());
    for (idx, part) in value.split_ascii_whitespace().enumerate() {
        if idx != 0 {
            s.push(' ');
        }
        s.push_str(part);
    }
    s
}

/// Sort query parameters and percent-encode every name and value.
///
/// A parameter without `=` is treated as having an empty value. Escapes
/// are decoded to raw bytes, so `%FF` stays `%FF` even though it is not
/// UTF-8. `+` decodes to a space.
pub fn canonicalize_query(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut params: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (encode_query_component(k), encode_query_component(v))
        })
        .collect();
    // Sort via encoded name, then value.
    params.sort();

    let mut s = String::with_capacity(query.len());
    for (idx, (k, v)) in params.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}

fn encode_query_component(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    let decoded: Vec<u8> = percent_decode(plus_as_space.as_bytes()).collect();
    percent_encode(&decoded, &AWS_QUERY_ENCODE_SET).to_string()
}
