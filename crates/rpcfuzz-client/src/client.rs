use std::time::Duration;

use reqwest::blocking::Client;
use rpcfuzz_core::RpcCaller;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::ClientError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a [Value],
}

#[derive(Debug, Deserialize)]
struct Response {
    #[allow(dead_code)]
    #[serde(default)]
    jsonrpc: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i32,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

/// Keeps an explicit `"result": null` distinct from a missing `result`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl HttpClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Per-call deadline; `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking JSON-RPC 2.0 client over HTTP.
#[derive(Debug)]
pub struct HttpClient {
    endpoint: Url,
    http: Client,
    next_id: u64,
}

impl HttpClient {
    pub fn connect(endpoint: &str) -> Result<Self, ClientError> {
        Self::with_config(endpoint, HttpClientConfig::default())
    }

    /// Validates the endpoint URL and prepares the HTTP client. No request is
    /// sent until the first call.
    pub fn with_config(endpoint: &str, config: HttpClientConfig) -> Result<Self, ClientError> {
        let endpoint = parse_endpoint(endpoint)?;
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            endpoint,
            http,
            next_id: 1,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn call(&mut self, method: &str, params: &[Value]) -> Result<Value, ClientError> {
        let id = self.next_id;
        self.next_id += 1;

        let request = Request {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        debug!(id, method, "Sending request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()?;
        let status = response.status();
        let body = response.text()?;

        decode_response(status.as_u16(), status.is_success(), &body)
    }
}

impl RpcCaller for HttpClient {
    type Error = ClientError;

    fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, ClientError> {
        HttpClient::call(self, method, args)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidEndpoint {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Turns an HTTP response body into the call outcome.
///
/// A JSON-RPC error object wins over the HTTP status, since some nodes pair
/// error objects with 4xx/5xx codes.
fn decode_response(status: u16, success: bool, body: &str) -> Result<Value, ClientError> {
    let response: Response = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !success => {
            return Err(ClientError::HttpStatus {
                status,
                body: body.trim().to_string(),
            });
        }
        Err(err) => return Err(ClientError::InvalidResponse(err.to_string())),
    };

    if let Some(error) = response.error {
        return Err(ClientError::RpcError {
            code: error.code,
            message: error.message,
            data: error.data,
        });
    }

    if !success {
        return Err(ClientError::HttpStatus {
            status,
            body: body.trim().to_string(),
        });
    }

    response
        .result
        .ok_or_else(|| ClientError::InvalidResponse("no result in JSON-RPC response".to_string()))
}
