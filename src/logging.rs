use tracing_subscriber::EnvFilter;

use crate::service::nudge::LOG_TARGET;

const DEFAULT_DIRECTIVES: &str = "nudger=debug,tower_http=debug,axum::rejection=trace";

/// Builds the filter from `RUST_LOG` style directives.
///
/// Nudge events are gated by the log policy of each request, so their target
/// is always enabled up to `INFO` whatever the directives say.
pub fn filter(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::try_new(directives.unwrap_or(DEFAULT_DIRECTIVES))?
        .add_directive(format!("{LOG_TARGET}=info").parse()?);
    Ok(filter)
}

pub fn enable_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::prelude::*;

    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(filter(directives.as_deref())?)
        .with(tracing_subscriber::fmt::layer())
        .init();
    Ok(())
}
