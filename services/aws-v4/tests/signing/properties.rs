use super::{example_context, example_credential, init_signing_test};
use http::Method;
use kvsign_aws_v4::{Credential, RequestDescription, RequestSigner};
use kvsign_core::{ErrorKind, Result};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

fn dynamodb_request(headers: &[(&str, &str)]) -> RequestDescription {
    let mut req = RequestDescription::new(Method::POST)
        .with_body(r#"{"TableName":"users","Key":{"id":{"S":"42"}}}"#);
    for (k, v) in headers {
        req = req.with_header(*k, *v);
    }
    req
}

#[test]
fn test_deterministic() -> Result<()> {
    init_signing_test();

    let req = dynamodb_request(&[("X-Amz-Target", "DynamoDB_20120810.GetItem")]);
    let cred = example_credential();
    let ctx = example_context("eu-west-1", "dynamodb");
    let signer = RequestSigner::new();

    let first = signer.sign(&req, &cred, &ctx)?;
    let second = signer.sign(&req, &cred, &ctx)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_header_order_invariant() -> Result<()> {
    init_signing_test();

    let headers = [
        ("X-Amz-Target", "DynamoDB_20120810.PutItem"),
        ("Host", "dynamodb.eu-west-1.amazonaws.com"),
        ("content-type", "application/x-amz-json-1.0"),
        ("X-Custom", "  a   b  "),
    ];
    let cred = example_credential();
    let ctx = example_context("eu-west-1", "dynamodb");
    let signer = RequestSigner::new();

    let expected = signer.sign(&dynamodb_request(&headers), &cred, &ctx)?;

    let mut permuted = headers;
    for _ in 0..headers.len() {
        permuted.rotate_left(1);
        let output = signer.sign(&dynamodb_request(&permuted), &cred, &ctx)?;
        assert_eq!(output.authorization, expected.authorization);
        assert_eq!(output.signed_headers, expected.signed_headers);
    }

    permuted.reverse();
    let output = signer.sign(&dynamodb_request(&permuted), &cred, &ctx)?;
    assert_eq!(output.authorization, expected.authorization);
    Ok(())
}

#[test]
fn test_header_name_case_does_not_matter() -> Result<()> {
    let cred = example_credential();
    let ctx = example_context("eu-west-1", "dynamodb");
    let signer = RequestSigner::new();

    let lower = signer.sign(
        &dynamodb_request(&[("x-amz-target", "DynamoDB_20120810.Scan")]),
        &cred,
        &ctx,
    )?;
    let mixed = signer.sign(
        &dynamodb_request(&[("X-AMZ-Target", "DynamoDB_20120810.Scan")]),
        &cred,
        &ctx,
    )?;
    assert_eq!(lower, mixed);
    Ok(())
}

#[test]
fn test_every_input_changes_signature() -> Result<()> {
    let cred = example_credential();
    let ctx = example_context("eu-west-1", "dynamodb");
    let signer = RequestSigner::new();
    let base = signer.sign(&dynamodb_request(&[]), &cred, &ctx)?.authorization;

    let other_body = RequestDescription::new(Method::POST).with_body("{}");
    assert_ne!(base, signer.sign(&other_body, &cred, &ctx)?.authorization);

    let other_secret = Credential::new("AKIDEXAMPLE", "another-secret");
    assert_ne!(
        base,
        signer
            .sign(&dynamodb_request(&[]), &other_secret, &ctx)?
            .authorization
    );

    let other_region = example_context("eu-central-1", "dynamodb");
    assert_ne!(
        base,
        signer
            .sign(&dynamodb_request(&[]), &cred, &other_region)?
            .authorization
    );
    Ok(())
}

#[test]
fn test_ambiguous_header_rejected() {
    let req = dynamodb_request(&[("Host", "example.com"), ("host", "example.org")]);

    let err = RequestSigner::new()
        .sign(
            &req,
            &example_credential(),
            &example_context("us-east-1", "dynamodb"),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousHeader);
}

#[test]
fn test_concurrent_signing() -> Result<()> {
    let signer = Arc::new(RequestSigner::new());
    let cred = example_credential();
    let ctx = example_context("us-west-2", "dynamodb");
    let expected = signer.sign(&dynamodb_request(&[]), &cred, &ctx)?;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let signer = signer.clone();
            let cred = cred.clone();
            let ctx = ctx.clone();
            thread::spawn(move || signer.sign(&dynamodb_request(&[]), &cred, &ctx))
        })
        .collect();

    for handle in handles {
        let output = handle.join().expect("signing thread must not panic")?;
        assert_eq!(output, expected);
    }
    Ok(())
}
