use super::{example_context, example_credential};
use http::Method;
use kvsign_aws_v4::{CanonicalRequest, RequestDescription, RequestSigner};
use kvsign_core::Result;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use pretty_assertions::assert_eq;

#[test]
fn test_query_with_special_characters() -> Result<()> {
    let value = "!@#$%^&*()_+-=;:'><,/?.txt";
    let query = format!("key={}", utf8_percent_encode(value, NON_ALPHANUMERIC));

    let creq = CanonicalRequest::build(
        &Method::GET,
        None,
        Some(&query),
        &[("host".to_string(), "example.com".to_string())],
        &["host".to_string()],
        None,
    )?;

    let canonical = creq.to_string();
    let query_line = canonical.lines().nth(2).expect("query line must exist");
    assert_eq!(
        query_line,
        "key=%21%40%23%24%25%5E%26%2A%28%29_%2B-%3D%3B%3A%27%3E%3C%2C%2F%3F.txt"
    );
    Ok(())
}

#[test]
fn test_header_value_whitespace() -> Result<()> {
    let creq = CanonicalRequest::build(
        &Method::GET,
        None,
        None,
        &[
            ("Host".to_string(), "example.com".to_string()),
            ("My-Header1".to_string(), "    value1".to_string()),
            ("My-Header2".to_string(), "\"a   b   c\"".to_string()),
            ("My-Header3".to_string(), "\tvalue2 \t value3  ".to_string()),
        ],
        &[
            "host".to_string(),
            "my-header1".to_string(),
            "my-header2".to_string(),
            "my-header3".to_string(),
        ],
        None,
    )?;

    assert_eq!(
        creq.canonical_headers(),
        "host:example.com\n\
         my-header1:value1\n\
         my-header2:\"a b c\"\n\
         my-header3:value2 value3\n"
    );
    Ok(())
}

#[test]
fn test_utf8_body() -> Result<()> {
    let signer = RequestSigner::new();
    let cred = example_credential();
    let ctx = example_context("ap-northeast-1", "dynamodb");

    let text = RequestDescription::new(Method::POST).with_body(r#"{"name":{"S":"東京"}}"#);
    let bytes = RequestDescription::new(Method::POST)
        .with_body(r#"{"name":{"S":"東京"}}"#.as_bytes().to_vec());

    assert_eq!(
        signer.sign(&text, &cred, &ctx)?,
        signer.sign(&bytes, &cred, &ctx)?
    );
    Ok(())
}
