use kvsign_aws_v4::{Credential, RequestSigner, SigningContext};
use kvsign_core::time::now;
use std::env;

fn main() -> kvsign_core::Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure AWS credentials
    let cred = Credential::new(
        env::var("AWS_ACCESS_KEY_ID").unwrap_or_else(|_| "AKIDEXAMPLE".to_string()),
        env::var("AWS_SECRET_ACCESS_KEY")
            .unwrap_or_else(|_| "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string()),
    );
    let ctx = SigningContext::new("us-east-1", "dynamodb", now());
    let signer = RequestSigner::new();

    // Describe a specific table
    let body = r#"{"TableName":"MyTestTable"}"#;
    let req = http::Request::post("https://dynamodb.us-east-1.amazonaws.com/")
        .header("x-amz-target", "DynamoDB_20120810.DescribeTable")
        .body(())?;
    let (mut parts, _) = req.into_parts();

    let output = signer.sign_parts(&mut parts, body, &cred, &ctx)?;
    println!("DescribeTable request signed successfully!");
    println!("Signed headers: {}", output.signed_headers.join(";"));
    for (name, value) in parts.headers.iter() {
        if value.is_sensitive() {
            println!("{name}: <sensitive>");
        } else {
            println!("{name}: {}", value.to_str()?);
        }
    }

    Ok(())
}
