pub(crate) mod driver;
pub(crate) mod environment;
pub(crate) mod nudge;
