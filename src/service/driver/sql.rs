use std::borrow::Cow;

use anyhow::Context;
use sqlx::{AnyConnection, Connection as _, Executor};

use crate::service::environment::{var_or, Environment};

/// [`super::Driver`] backed by sqlx, picking the database from the url scheme.
#[derive(Clone, Debug)]
pub struct SqlDriver {
    default_scheme: Cow<'static, str>,
}

impl Default for SqlDriver {
    fn default() -> Self {
        Self::with_default_scheme("postgres")
    }
}

impl SqlDriver {
    /// The scheme given to data sources written as a bare `host:port/database`.
    pub fn with_default_scheme(scheme: impl Into<Cow<'static, str>>) -> Self {
        sqlx::any::install_default_drivers();
        Self {
            default_scheme: scheme.into(),
        }
    }

    pub fn from_environment(env: &dyn Environment) -> Self {
        Self::with_default_scheme(var_or(env, "DEFAULT_SCHEME", "postgres"))
    }

    fn url(&self, data_source: &str, username: &str, password: &str) -> anyhow::Result<String> {
        let mut url = match url::Url::parse(data_source) {
            Ok(url) if !url.cannot_be_a_base() || url.scheme() == "sqlite" => url,
            _ => url::Url::parse(&format!("{}://{data_source}", self.default_scheme))
                .with_context(|| format!("invalid data source {data_source:?}"))?,
        };
        if !username.is_empty() {
            url.set_username(username)
                .map_err(|_| anyhow::anyhow!("data source {data_source:?} takes no username"))?;
        }
        if !password.is_empty() {
            url.set_password(Some(password))
                .map_err(|_| anyhow::anyhow!("data source {data_source:?} takes no password"))?;
        }
        Ok(url.into())
    }
}

#[axum::async_trait]
impl super::Driver for SqlDriver {
    type Connection = SqlConnection;

    async fn connect(
        &self,
        data_source: &str,
        username: &str,
        password: &str,
    ) -> anyhow::Result<SqlConnection> {
        let url = self.url(data_source, username, password)?;
        let inner = AnyConnection::connect(&url).await?;
        Ok(SqlConnection(inner))
    }
}

pub struct SqlConnection(AnyConnection);

#[axum::async_trait]
impl super::Connection for SqlConnection {
    async fn execute(&mut self, query: &str) -> anyhow::Result<()> {
        (&mut self.0).execute(query).await?;
        Ok(())
    }

    async fn disconnect(self) {
        if let Err(err) = self.0.close().await {
            tracing::warn!(message = "unable to close connection", error = %err);
        }
    }
}
