use axum::Extension;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::service::driver::{Driver, SqlDriver};
use crate::service::environment::{parse_or, Environment, ProcessEnvironment};

pub struct Config {
    host: IpAddr,
    port: u16,

    driver: SqlDriver,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_environment(&ProcessEnvironment)
    }

    pub fn from_environment(env: &dyn Environment) -> anyhow::Result<Self> {
        Ok(Self {
            host: parse_or(env, "HOST", IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)))?,
            port: parse_or(env, "PORT", 3000)?,

            driver: SqlDriver::from_environment(env),
        })
    }

    /// Connection settings are read from the process environment on every request.
    pub fn build(self) -> Application<SqlDriver> {
        Application::new(
            SocketAddr::from((self.host, self.port)),
            self.driver,
            ProcessEnvironment,
        )
    }
}

pub struct Application<D> {
    socket_address: SocketAddr,
    driver: Arc<D>,
    environment: Arc<dyn Environment>,
}

impl<D: Driver> Application<D> {
    pub fn new(
        socket_address: SocketAddr,
        driver: D,
        environment: impl Environment + 'static,
    ) -> Self {
        Self {
            socket_address,
            driver: Arc::new(driver),
            environment: Arc::new(environment),
        }
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }

    pub fn router(&self) -> axum::Router {
        crate::router::create::<D>()
            .layer(Extension(self.driver.clone()))
            .layer(Extension(self.environment.clone()))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("binding socket to {}", self.socket_address);
        let listener = TcpListener::bind(self.socket_address).await?;
        tracing::info!("listening on {}", self.socket_address);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

#[cfg(test)]
impl<D: Driver> Application<D> {
    pub(crate) fn test(driver: D, environment: impl Environment + 'static) -> Self {
        Self::new(
            SocketAddr::from((Ipv4Addr::new(127, 0, 0, 1), 8080)),
            driver,
            environment,
        )
    }

    pub(crate) async fn handle(
        &self,
        req: axum::http::Request<axum::body::Body>,
    ) -> axum::http::Response<axum::body::Body> {
        use tower::ServiceExt;

        self.router().oneshot(req).await.unwrap()
    }
}
