//! Cross check against the `aws-sigv4` crate.

use super::{example_credential, init_signing_test, ACCESS_KEY_ID, SECRET_ACCESS_KEY};
use aws_credential_types::Credentials;
use aws_sigv4::http_request::SignableBody;
use aws_sigv4::http_request::SignableRequest;
use aws_sigv4::http_request::SigningSettings;
use aws_sigv4::sign::v4;
use http::Method;
use kvsign_aws_v4::{endpoint_host, RequestDescription, RequestSigner, SigningContext};
use kvsign_core::time::now;
use log::debug;
use std::time::SystemTime;
use test_case::test_case;

fn reference_signature(
    req: &RequestDescription,
    extra_headers: &[(String, String)],
    session_token: Option<&str>,
    ctx: &SigningContext,
) -> String {
    let id = Credentials::new(
        ACCESS_KEY_ID,
        SECRET_ACCESS_KEY,
        session_token.map(|v| v.to_string()),
        None,
        "hardcoded-credentials",
    )
    .into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region(&ctx.region)
        .name(&ctx.service)
        .time(SystemTime::from(ctx.time))
        .settings(SigningSettings::default())
        .build()
        .expect("signing params must be valid");

    let host = endpoint_host(&ctx.region, &ctx.service);
    let uri = match &req.query {
        Some(query) => format!("https://{host}/?{query}"),
        None => format!("https://{host}/"),
    };

    // aws-sigv4 writes its own date and token headers.
    let headers = req
        .headers
        .iter()
        .chain(extra_headers.iter())
        .filter(|(k, _)| k != "x-amz-date" && k != "x-amz-security-token")
        .map(|(k, v)| (k.as_str(), v.as_str()));

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            req.method.as_str(),
            uri,
            headers,
            SignableBody::Bytes(req.body_bytes()),
        )
        .expect("signable request must be valid"),
        &sp.into(),
    )
    .expect("signing must succeed");
    let (_, signature) = output.into_parts();
    signature
}

#[test_case(Method::POST, None, r#"{"TableName":"users","Key":{"id":{"S":"42"}}}"#, None; "get item")]
#[test_case(Method::POST, None, "", None; "empty body")]
#[test_case(Method::POST, None, r#"{"TableName":"users"}"#, Some("session_token"); "with session token")]
#[test_case(Method::GET, Some("Version=2012-08-10&Action=ListTables"), "", None; "with query")]
fn test_matches_aws_sigv4(
    method: Method,
    query: Option<&str>,
    body: &'static str,
    session_token: Option<&str>,
) {
    init_signing_test();

    let mut req = RequestDescription::new(method)
        .with_header("x-amz-target", "DynamoDB_20120810.GetItem")
        .with_body(body);
    if let Some(query) = query {
        req = req.with_query(query);
    }
    let mut cred = example_credential();
    if let Some(token) = session_token {
        cred = cred.with_session_token(token);
    }
    let ctx = SigningContext::new("us-east-1", "dynamodb", now());

    let output = RequestSigner::new()
        .sign(&req, &cred, &ctx)
        .expect("signing must succeed");
    debug!("signed with: {output:?}");

    let expected = reference_signature(&req, &output.added_headers, session_token, &ctx);
    assert!(
        output
            .authorization
            .ends_with(&format!("Signature={expected}")),
        "{} must end with signature {expected}",
        output.authorization
    );
}
