//! Mock execution node for testing the client and CLI without a real node
//!
//! The MockNode serves JSON-RPC 2.0 over HTTP on a random local port and
//! answers with predefined responses. Defaults mirror a geth dev node that
//! has been prepared the way the CLI help describes, so an unmodified node
//! passes every case.
//!
//! Every request is recorded, including the raw JSON, so tests can check the
//! exact wire shape the client sends.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::post;
use serde::Deserialize;
use serde_json::Value;
use serde_json::json;
use tokio::sync::oneshot;

/// Recorded request for test verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub params: Value,
    pub raw: Value,
}

/// Configuration for how the mock should respond
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful result
    Success(Value),
    /// Return a JSON-RPC error object
    Error { code: i32, message: String },
    /// Return the body as-is with HTTP 200
    Malformed(String),
    /// Return a non-200 status with a plain body
    Status(u16, String),
    /// Return a different response for each call, cycling through the list
    Sequence(Vec<MockResponse>),
    /// Delay before returning the response
    Delayed(Duration, Box<MockResponse>),
}

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Clone)]
struct NodeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handlers: Arc<Mutex<HashMap<String, MockResponse>>>,
    sequence_counters: Arc<Mutex<HashMap<String, usize>>>,
}

pub struct MockNode {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    state: NodeState,
}

pub const SENDER_SLOT: &str =
    "0x00000000000000000000000085da99c8a7c2c95964c8efd687e95e632fc533d6";

impl MockNode {
    /// Create and start a new mock node on 127.0.0.1 with a random port.
    pub async fn start() -> Self {
        let state = NodeState {
            requests: Arc::new(Mutex::new(Vec::new())),
            handlers: Arc::new(Mutex::new(default_handlers())),
            sequence_counters: Arc::new(Mutex::new(HashMap::new())),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock node");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = Router::new()
            .route("/", post(handle))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            state,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Set a custom response for a method
    pub fn set_response(&self, method: &str, response: MockResponse) {
        self.state
            .handlers
            .lock()
            .unwrap()
            .insert(method.to_string(), response);
        self.state.sequence_counters.lock().unwrap().remove(method);
    }

    /// Remove the response for a method so it answers "method not found"
    pub fn remove_response(&self, method: &str) {
        self.state.handlers.lock().unwrap().remove(method);
    }

    /// Get all recorded requests
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Get the methods of all recorded requests, in arrival order
    pub fn methods(&self) -> Vec<String> {
        self.get_requests().into_iter().map(|r| r.method).collect()
    }

    pub fn clear_requests(&self) {
        self.state.requests.lock().unwrap().clear();
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(State(state): State<NodeState>, body: String) -> Response {
    let raw: Value = match serde_json::from_str(&body) {
        Ok(raw) => raw,
        Err(_) => return json_body(StatusCode::BAD_REQUEST, parse_error()),
    };
    let request: Request = match serde_json::from_value(raw.clone()) {
        Ok(request) => request,
        Err(_) => return json_body(StatusCode::BAD_REQUEST, parse_error()),
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: request.method.clone(),
        params: request.params.clone(),
        raw,
    });

    let configured = state.handlers.lock().unwrap().get(&request.method).cloned();
    let response = match configured {
        Some(response) => resolve(&state, &request.method, response),
        None => MockResponse::Error {
            code: -32601,
            message: format!(
                "the method {} does not exist/is not available",
                request.method
            ),
        },
    };

    respond(request.id, response).await
}

/// Picks the next entry of a sequence for this method.
fn resolve(state: &NodeState, method: &str, response: MockResponse) -> MockResponse {
    let MockResponse::Sequence(items) = response else {
        return response;
    };
    if items.is_empty() {
        return MockResponse::Success(Value::Null);
    }
    let mut counters = state.sequence_counters.lock().unwrap();
    let counter = counters.entry(method.to_string()).or_insert(0);
    let item = items[*counter % items.len()].clone();
    *counter += 1;
    item
}

async fn respond(id: Value, response: MockResponse) -> Response {
    let mut response = response;
    while let MockResponse::Delayed(delay, inner) = response {
        tokio::time::sleep(delay).await;
        response = *inner;
    }

    match response {
        MockResponse::Success(result) => json_body(
            StatusCode::OK,
            json!({"jsonrpc": "2.0", "id": id, "result": result}),
        ),
        MockResponse::Error { code, message } => json_body(
            StatusCode::OK,
            json!({"jsonrpc": "2.0", "id": id, "error": {"code": code, "message": message}}),
        ),
        MockResponse::Malformed(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        MockResponse::Status(code, body) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body).into_response()
        }
        MockResponse::Sequence(_) | MockResponse::Delayed(..) => json_body(
            StatusCode::OK,
            json!({"jsonrpc": "2.0", "id": id, "error": {"code": -32603, "message": "nested sequence"}}),
        ),
    }
}

fn json_body(status: StatusCode, value: Value) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        value.to_string(),
    )
        .into_response()
}

fn parse_error() -> Value {
    json!({"jsonrpc": "2.0", "id": null, "error": {"code": -32700, "message": "parse error"}})
}

pub fn genesis_block() -> Value {
    let hash = |c: char| format!("0x{}", c.to_string().repeat(64));
    json!({
        "number": "0x0",
        "hash": hash('a'),
        "parentHash": hash('0'),
        "nonce": "0x0000000000000000",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "stateRoot": hash('3'),
        "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "miner": "0x0000000000000000000000000000000000000000",
        "difficulty": "0x1",
        "totalDifficulty": "0x1",
        "extraData": "0x",
        "size": "0x272",
        "gasLimit": "0x2fefd8",
        "gasUsed": "0x0",
        "timestamp": "0x0",
        "transactions": [],
        "uncles": []
    })
}

/// Answers of a prepared geth dev node, in catalog call order where a method
/// is called more than once.
fn default_handlers() -> HashMap<String, MockResponse> {
    let mut h = HashMap::new();
    let mut set = |method: &str, response: MockResponse| {
        h.insert(method.to_string(), response);
    };
    let ok = MockResponse::Success;

    set("net_version", ok(json!("1337")));
    set(
        "web3_clientVersion",
        ok(json!("Geth/v1.13.5-stable-916d6a44/linux-amd64/go1.21.4")),
    );
    set(
        "web3_sha3",
        MockResponse::Sequence(vec![
            ok(json!(
                "0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad"
            )),
            MockResponse::Error {
                code: -32602,
                message: "invalid argument 0: json: cannot unmarshal hex string without 0x prefix into Go value of type hexutil.Bytes".to_string(),
            },
        ]),
    );
    set("net_listening", ok(json!(true)));
    set("net_peerCount", ok(json!("0x0")));
    set("eth_syncing", ok(json!(false)));
    set(
        "eth_coinbase",
        ok(json!("0x67b1d87101671b127f5f8714789c7192f7ad340e")),
    );
    set("eth_chainId", ok(json!("0x539")));
    set("eth_mining", ok(json!(false)));
    set("eth_hashrate", ok(json!("0x0")));
    set("eth_gasPrice", ok(json!("0x3b9aca08")));
    set(
        "eth_accounts",
        ok(json!(["0x67b1d87101671b127f5f8714789c7192f7ad340e"])),
    );
    set("eth_blockNumber", ok(json!("0x1d")));
    set("eth_getBalance", ok(json!("0x56bc75e2d630e8000")));
    set(
        "eth_getStorageAt",
        MockResponse::Sequence(vec![
            ok(json!(SENDER_SLOT)),
            ok(json!(format!("0x{}", "0".repeat(64)))),
            ok(json!(SENDER_SLOT)),
        ]),
    );
    set(
        "eth_getTransactionCount",
        MockResponse::Sequence(vec![ok(json!("0x1")), ok(json!("0x0")), ok(json!("0x1"))]),
    );
    set("eth_getBlockByNumber", ok(genesis_block()));
    h
}
