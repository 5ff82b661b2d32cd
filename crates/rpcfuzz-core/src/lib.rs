//! Conformance-test core for JSON-RPC endpoints.
//!
//! A [`Registry`] holds an ordered list of [`RpcTest`] cases. The [`Runner`]
//! calls each method through an [`RpcCaller`], hands the result (or the error,
//! for cases that expect one) to the case's [`Validator`] and reports a
//! [`Verdict`] per case to a [`ReportSink`].

#![deny(clippy::all)]

mod engine;
mod error;
mod registry;
mod report;
mod test_case;
pub mod validator;

pub use engine::RpcCaller;
pub use engine::Runner;
pub use error::RegistryError;
pub use error::ValidationError;
pub use error::ValidatorError;
pub use registry::Registry;
pub use report::Outcome;
pub use report::ReportSink;
pub use report::RunReport;
pub use report::TracingSink;
pub use report::Verdict;
pub use test_case::GenericTest;
pub use test_case::RpcTest;
pub use validator::Observed;
pub use validator::Validate;
pub use validator::Validator;
