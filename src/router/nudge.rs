use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Extension;
use futures::FutureExt;
use tracing::instrument::WithSubscriber;
use tracing::Instrument;

use super::error::Error;
use crate::entity::connection_config::ConnectionConfig;
use crate::service::driver::{Connection, Driver};
use crate::service::environment::Environment;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("nudge panicked")
    }
}

/// Connects, nudges and disconnects, returning the nudge outcome.
///
/// Connection failures come back as errors. A panicking nudge is replayed
/// once the connection has been released.
async fn lifecycle<D: Driver>(driver: Arc<D>, config: ConnectionConfig) -> anyhow::Result<bool> {
    let mut connection = driver
        .connect(&config.data_source, &config.username, &config.password)
        .await?;
    tracing::info!(data_source = %config.data_source, "connected");

    let outcome = AssertUnwindSafe(crate::service::nudge::nudge(&mut connection, &config))
        .catch_unwind()
        .await;
    connection.disconnect().await;

    Ok(outcome.unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
}

/// Runs one nudge cycle per request.
///
/// The cycle lives on its own task so it completes, and releases its
/// connection, even when the request is dropped. A nudge that returns
/// `false` still answers 200, only a failed connection or a panic turn into
/// a 500.
pub(super) async fn handle<D: Driver>(
    Extension(driver): Extension<Arc<D>>,
    Extension(environment): Extension<Arc<dyn Environment>>,
) -> Result<StatusCode, Error> {
    let config = ConnectionConfig::from_environment(environment.as_ref());

    let task = tokio::spawn(
        lifecycle(driver, config)
            .in_current_span()
            .with_current_subscriber(),
    );

    match task.await {
        Ok(Ok(nudged)) => {
            tracing::info!(nudged, "nudged");
            Ok(StatusCode::OK)
        }
        Ok(Err(err)) => {
            tracing::error!(severity = "critical", message = "unable to connect", error = %err);
            Err(Error::from(err))
        }
        Err(err) => {
            let message = match err.try_into_panic() {
                Ok(payload) => panic_message(&*payload),
                Err(err) => err.to_string(),
            };
            tracing::error!(severity = "critical", message = "nudge failed", error = %message);
            Err(Error::internal(message))
        }
    }
}
