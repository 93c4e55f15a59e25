use crate::entity::log_policy::LogPolicy;
use crate::service::environment::{var_or, Environment};

/// What is needed to open and nudge one connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub data_source: String,
    pub username: String,
    pub password: String,
    pub log_policy: LogPolicy,
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("data_source", &self.data_source)
            .field("username", &self.username)
            .field("password", &"********")
            .field("log_policy", &self.log_policy)
            .finish()
    }
}

impl ConnectionConfig {
    pub fn new(
        data_source: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        log_policy: LogPolicy,
    ) -> Self {
        Self {
            data_source: data_source.into(),
            username: username.into(),
            password: password.into(),
            log_policy,
        }
    }

    /// Reads `DSN`, `USER` and `PASSWORD`, missing keys becoming empty strings.
    ///
    /// Nothing is validated here, bad credentials show up when connecting.
    /// The log policy stays at [`LogPolicy::None`] unless `NUDGE_LOG_POLICY`
    /// holds a valid value.
    pub fn from_environment(env: &dyn Environment) -> Self {
        let log_policy = match env.var("NUDGE_LOG_POLICY") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!(message = "ignoring log policy", error = %err);
                LogPolicy::default()
            }),
            None => LogPolicy::default(),
        };

        Self {
            data_source: var_or(env, "DSN", ""),
            username: var_or(env, "USER", ""),
            password: var_or(env, "PASSWORD", ""),
            log_policy,
        }
    }
}
