use kvsign_aws_v4::Credential;
use kvsign_core::time::now;
use kvsign_dynamodb::{Client, Item, PutItemInput, Region, Table};
use std::env;

fn main() -> kvsign_core::Result<()> {
    env_logger::init();

    let cred = Credential::new(
        env::var("AWS_ACCESS_KEY_ID").unwrap_or_else(|_| "AKIDEXAMPLE".to_string()),
        env::var("AWS_SECRET_ACCESS_KEY")
            .unwrap_or_else(|_| "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string()),
    );
    let region = env::var("AWS_REGION")
        .unwrap_or_else(|_| "us-east-1".to_string())
        .parse::<Region>()?;

    let mut client = Client::new(cred, region)?;
    // Point at DynamoDB Local with `DYNAMODB_ENDPOINT=http://localhost:8000`.
    if let Ok(endpoint) = env::var("DYNAMODB_ENDPOINT") {
        client = client.with_endpoint(&endpoint)?;
    }

    let table = Table::new("users", "id");
    let mut item = Item::new();
    item.insert("id".into(), "42".into());
    item.insert("name".into(), "Alice".into());

    let req = PutItemInput::new(&table, item)?.into();
    let signed = client.prepare(&req, now())?;

    println!("{} {}", signed.method(), signed.uri());
    for (name, value) in signed.headers() {
        if value.is_sensitive() {
            println!("{name}: <sensitive>");
        } else {
            println!("{name}: {}", value.to_str()?);
        }
    }
    println!();
    println!("{}", String::from_utf8_lossy(signed.body()));

    Ok(())
}
