#![deny(clippy::all)]

pub mod account;
pub mod app;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod schemas;
pub mod telemetry;

pub use account::Address;
pub use app::Application;
pub use catalog::Preconditions;
pub use catalog::build_registry;
pub use config::RunConfig;
pub use error::AppError;
