#![deny(clippy::all)]

mod client;
mod error;
pub mod error_codes;
mod mock_client;

pub use client::HttpClient;
pub use client::HttpClientConfig;
pub use error::ClientError;
pub use mock_client::MockClient;

pub type Result<T> = std::result::Result<T, ClientError>;
