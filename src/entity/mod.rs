pub mod connection_config;
pub mod log_policy;
