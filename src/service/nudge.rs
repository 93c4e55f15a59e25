use tracing::Level;

use crate::entity::connection_config::ConnectionConfig;
use crate::service::driver::Connection;

/// Cheap query whose only purpose is to show the session is alive.
pub const LIVENESS_QUERY: &str = "select current_timestamp";

/// Target of the events emitted by [`nudge`], kept open by [`crate::logging::filter`]
/// so the [`crate::LogPolicy`] alone decides what gets logged.
pub const LOG_TARGET: &str = "nudger::nudge";

/// Runs the liveness query once on `connection`.
///
/// Returns `false` when the query failed. The error is logged when the
/// policy of `config` allows it and never handed back to the caller.
pub async fn nudge<C: Connection>(connection: &mut C, config: &ConnectionConfig) -> bool {
    let threshold = config.log_policy.threshold();
    match connection.execute(LIVENESS_QUERY).await {
        Ok(()) => {
            if Level::INFO <= threshold {
                tracing::info!(target: LOG_TARGET, "database nudged");
            }
            true
        }
        Err(err) => {
            if Level::ERROR <= threshold {
                tracing::error!(target: LOG_TARGET, message = "unable to nudge database", error = %err);
            }
            false
        }
    }
}

/// Adds [`nudge`] as a method on every [`Connection`].
#[axum::async_trait]
pub trait Nudge: Connection {
    async fn nudge(&mut self, config: &ConnectionConfig) -> bool;
}

#[axum::async_trait]
impl<C: Connection> Nudge for C {
    async fn nudge(&mut self, config: &ConnectionConfig) -> bool {
        nudge(self, config).await
    }
}
