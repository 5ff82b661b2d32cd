use std::collections::HashMap;
use std::collections::VecDeque;

use rpcfuzz_core::RpcCaller;
use serde_json::Value;

use crate::error::ClientError;

type CallRecord = Vec<(String, Vec<Value>)>;

#[derive(Debug, Clone)]
enum MockReply {
    Result(Value),
    Error {
        code: i32,
        message: String,
    },
}

impl MockReply {
    fn to_outcome(&self) -> Result<Value, ClientError> {
        match self {
            MockReply::Result(value) => Ok(value.clone()),
            MockReply::Error { code, message } => Err(ClientError::RpcError {
                code: *code,
                message: message.clone(),
                data: None,
            }),
        }
    }
}

/// A scripted stand-in for [`HttpClient`](crate::HttpClient).
///
/// Replies are configured per method and every call is recorded for later
/// assertions. Methods without a configured reply fail with a JSON-RPC
/// "method not found" error, the way an execution node answers unknown
/// methods.
///
/// # Example
///
/// ```ignore
/// use rpcfuzz_client::MockClient;
/// use serde_json::json;
///
/// let mut mock = MockClient::new();
/// mock.set_response("net_listening", json!(true));
///
/// assert_eq!(mock.call("net_listening", &[]).unwrap(), json!(true));
/// assert_eq!(mock.call_count("net_listening"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    replies: HashMap<String, VecDeque<MockReply>>,
    calls: CallRecord,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result returned for a method. Queued replies are used in
    /// order; the last one keeps being returned.
    pub fn set_response(&mut self, method: &str, response: Value) {
        self.queue(method, MockReply::Result(response));
    }

    /// Sets a JSON-RPC error returned for a method.
    pub fn set_error(&mut self, method: &str, code: i32, message: &str) {
        self.queue(
            method,
            MockReply::Error {
                code,
                message: message.to_string(),
            },
        );
    }

    /// Drops every reply configured for a method, so the next `set_*` call
    /// replaces rather than queues.
    pub fn clear_replies(&mut self, method: &str) {
        self.replies.remove(method);
    }

    fn queue(&mut self, method: &str, reply: MockReply) {
        self.replies
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn call(&mut self, method: &str, params: &[Value]) -> Result<Value, ClientError> {
        self.calls.push((method.to_string(), params.to_vec()));

        let Some(queue) = self.replies.get_mut(method) else {
            return Err(ClientError::RpcError {
                code: crate::error_codes::METHOD_NOT_FOUND,
                message: format!("the method {} does not exist/is not available", method),
                data: None,
            });
        };

        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        match reply {
            Some(reply) => reply.to_outcome(),
            None => Err(ClientError::InvalidResponse(format!(
                "no reply configured for {}",
                method
            ))),
        }
    }

    /// Returns all calls made to this client.
    pub fn get_calls(&self) -> &[(String, Vec<Value>)] {
        &self.calls
    }

    /// Returns the number of times a specific method was called.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls.iter().filter(|(m, _)| m == method).count()
    }

    /// Returns all parameters passed to calls of a specific method.
    pub fn params_for(&self, method: &str) -> Vec<Vec<Value>> {
        self.calls
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl RpcCaller for MockClient {
    type Error = ClientError;

    fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, ClientError> {
        MockClient::call(self, method, args)
    }
}
