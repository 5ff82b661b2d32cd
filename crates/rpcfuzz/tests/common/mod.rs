#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_node;

pub use mock_node::{MockNode, MockResponse, RecordedRequest};

use assert_cmd::Command;
use tokio::runtime::Runtime;

pub fn rpcfuzz_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rpcfuzz"));
    for key in [
        "RUST_LOG",
        "RPCFUZZ_LOG",
        "RPCFUZZ_PRIVATE_KEY",
        "RPCFUZZ_CONTRACT_ADDRESS",
        "RPCFUZZ_TIMEOUT",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Synchronous wrapper around a [`MockNode`] running on its own runtime.
///
/// The runtime's worker threads keep serving while a `#[test]` function
/// blocks on the client or the CLI.
pub struct NodeHarness {
    node: MockNode,
    runtime: Runtime,
}

impl NodeHarness {
    pub fn new() -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        let node = runtime.block_on(MockNode::start());
        Self { node, runtime }
    }

    pub fn url(&self) -> String {
        self.node.url()
    }

    pub fn node(&self) -> &MockNode {
        &self.node
    }

    pub fn set_response(&self, method: &str, response: MockResponse) {
        self.node.set_response(method, response);
    }

    /// Runs the CLI against this node with extra arguments before the URL.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        rpcfuzz_cmd().args(args).arg(self.url()).assert()
    }
}

impl Default for NodeHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A local URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}", addr)
}
