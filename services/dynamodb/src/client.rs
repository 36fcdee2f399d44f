use crate::{ItemRequest, Region};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, Request, Uri};
use kvsign_aws_v4::{endpoint_host, Credential, RequestSigner, SigningContext, DEFAULT_CONTENT_TYPE};
use kvsign_core::time::DateTime;
use kvsign_core::{Error, Result};
use log::debug;

/// Service name bound into the credential scope.
pub const SERVICE: &str = "dynamodb";

const X_AMZ_TARGET: &str = "x-amz-target";

/// Client assembles signed DynamoDB requests.
///
/// It never sends anything. The returned requests are ready for any HTTP
/// transport as long as signed headers are sent unchanged.
#[derive(Debug, Clone)]
pub struct Client {
    credential: Credential,
    region: Region,
    endpoint: Uri,
    signer: RequestSigner,
}

impl Client {
    /// Create a client for the regional endpoint of `region`.
    pub fn new(credential: Credential, region: Region) -> Result<Self> {
        let host = endpoint_host(region.as_str(), SERVICE);
        let endpoint = format!("https://{host}/").parse::<Uri>()?;

        Ok(Self {
            credential,
            region,
            endpoint,
            signer: RequestSigner::new(),
        })
    }

    /// Send requests to `endpoint` instead, like `http://localhost:8000` for
    /// DynamoDB Local. The region still scopes the signature.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let endpoint = endpoint.parse::<Uri>()?;
        let host = endpoint
            .authority()
            .ok_or_else(|| Error::request_invalid(format!("endpoint {endpoint} has no host")))?
            .to_string();

        self.signer = self.signer.with_host(host);
        self.endpoint = endpoint;
        Ok(self)
    }

    /// Region requests are signed for.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Endpoint requests are sent to.
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// Build the signed request for `req` at `time`.
    pub fn prepare(&self, req: &ItemRequest, time: DateTime) -> Result<Request<Vec<u8>>> {
        let operation = req.operation();
        let body = req.to_body()?;

        let (mut parts, ()) = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(X_AMZ_TARGET, operation.target())
            .header(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE))
            .body(())?
            .into_parts();

        let ctx = SigningContext::new(self.region.as_str(), SERVICE, time);
        let output = self
            .signer
            .sign_parts(&mut parts, body.clone(), &self.credential, &ctx)?;
        debug!(
            "prepared {operation} on table {} with signed headers {}",
            req.table_name(),
            output.signed_headers.join(";")
        );

        Ok(Request::from_parts(parts, body))
    }
}
