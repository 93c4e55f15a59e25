use std::collections::HashMap;
use std::str::FromStr;

use anyhow::Context;

/// Key/value lookup the configuration is read from.
///
/// The server reads the process environment on every request, tests and
/// library callers can provide a fixed map instead.
pub trait Environment: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<&'static str, &'static str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }
}

pub(crate) fn var_or(env: &dyn Environment, name: &str, default_value: &str) -> String {
    env.var(name).unwrap_or_else(|| default_value.to_string())
}

pub(crate) fn parse_or<V>(env: &dyn Environment, name: &str, default_value: V) -> anyhow::Result<V>
where
    V: FromStr,
    <V as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match env.var(name) {
        Some(value) => {
            let parsed = value
                .parse()
                .with_context(|| format!("parsing {name}={value:?}"))?;
            Ok(parsed)
        }
        None => Ok(default_value),
    }
}
