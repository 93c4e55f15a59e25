//! Keeps a database session from idling out by running a cheap query on demand.
//!
//! The [`nudge`] capability works on any [`Connection`], the [`app`] module
//! serves it over HTTP so an external scheduler can trigger it.

pub mod app;
mod entity;
pub mod logging;
mod router;
mod service;
#[cfg(test)]
mod test;

pub use entity::connection_config::ConnectionConfig;
pub use entity::log_policy::{LogPolicy, LogPolicyParserError};
pub use service::driver::{Connection, Driver, SqlConnection, SqlDriver};
pub use service::environment::{Environment, ProcessEnvironment};
pub use service::nudge::{nudge, Nudge, LIVENESS_QUERY, LOG_TARGET};
