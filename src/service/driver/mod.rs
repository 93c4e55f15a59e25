mod sql;

pub use sql::{SqlConnection, SqlDriver};

/// Opens connections against a data source.
#[axum::async_trait]
pub trait Driver: Send + Sync + 'static {
    type Connection: Connection + 'static;

    async fn connect(
        &self,
        data_source: &str,
        username: &str,
        password: &str,
    ) -> anyhow::Result<Self::Connection>;
}

/// An authenticated session, released by consuming it.
#[axum::async_trait]
pub trait Connection: Send {
    async fn execute(&mut self, query: &str) -> anyhow::Result<()>;

    async fn disconnect(self);
}
