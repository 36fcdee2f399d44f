//! Known answers from the published SigV4 examples.

use super::{example_context, example_credential, init_signing_test, SECRET_ACCESS_KEY};
use http::Method;
use kvsign_aws_v4::{
    authorization_header, credential_scope, string_to_sign, CanonicalRequest, RequestDescription,
    RequestSigner, SigningKey,
};
use kvsign_core::hash::EMPTY_SHA256;
use kvsign_core::Result;
use pretty_assertions::assert_eq;

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// `get-vanilla` from the SigV4 test suite, driven step by step.
#[test]
fn test_get_vanilla() -> Result<()> {
    init_signing_test();

    let ctx = example_context("us-east-1", "service");
    let headers = owned(&[
        ("Host", "example.amazonaws.com"),
        ("X-Amz-Date", "20150830T123600Z"),
    ]);
    let signed = vec!["host".to_string(), "x-amz-date".to_string()];

    let creq = CanonicalRequest::build(&Method::GET, Some("/"), None, &headers, &signed, None)?;
    assert_eq!(
        creq.to_string(),
        format!(
            "GET\n/\n\nhost:example.amazonaws.com\nx-amz-date:20150830T123600Z\n\nhost;x-amz-date\n{EMPTY_SHA256}"
        )
    );

    let sts = string_to_sign(ctx.time, &ctx.region, &ctx.service, &creq.hash());
    assert_eq!(
        sts,
        "AWS4-HMAC-SHA256\n\
         20150830T123600Z\n\
         20150830/us-east-1/service/aws4_request\n\
         bb579772317eb040ac9ed261061d46c1f17a8133879d6129b6e1c25292927e63"
    );

    let key = SigningKey::derive(SECRET_ACCESS_KEY, ctx.time, &ctx.region, &ctx.service)?;
    let signature = key.sign(&sts)?;
    let scope = credential_scope("AKIDEXAMPLE", ctx.time, &ctx.region, &ctx.service);

    assert_eq!(
        authorization_header(&scope, &creq.signed_header_names(), &signature),
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
         SignedHeaders=host;x-amz-date, \
         Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
    );
    Ok(())
}

/// IAM `ListUsers` example, driven through the signer.
#[test]
fn test_iam_list_users() -> Result<()> {
    init_signing_test();

    let req = RequestDescription::new(Method::GET)
        .with_query("Action=ListUsers&Version=2010-05-08")
        .with_header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=utf-8",
        )
        .with_header("Host", "iam.amazonaws.com")
        .with_header("X-Amz-Date", "20150830T123600Z");

    let creq = CanonicalRequest::build(
        &req.method,
        req.path.as_deref(),
        req.query.as_deref(),
        &req.headers,
        &[
            "content-type".to_string(),
            "host".to_string(),
            "x-amz-date".to_string(),
        ],
        None,
    )?;
    assert_eq!(
        creq.hash(),
        "f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59"
    );

    let output =
        RequestSigner::new().sign(&req, &example_credential(), &example_context("us-east-1", "iam"))?;

    assert!(output.added_headers.is_empty());
    assert_eq!(
        output.signed_headers,
        vec!["content-type", "host", "x-amz-date"]
    );
    assert_eq!(
        output.authorization,
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
         SignedHeaders=content-type;host;x-amz-date, \
         Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
    );
    Ok(())
}
