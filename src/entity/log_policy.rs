use std::str::FromStr;

use tracing::level_filters::LevelFilter;

/// Which nudge events get logged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogPolicy {
    /// Nothing is logged.
    #[default]
    None,
    /// Only failed nudges are logged.
    OnError,
    /// Every nudge is logged, successful or not.
    OnNudge,
}

#[derive(Clone, Debug)]
pub struct LogPolicyParserError(pub String);

impl std::error::Error for LogPolicyParserError {}

impl std::fmt::Display for LogPolicyParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid log policy {:?}", self.0)
    }
}

impl FromStr for LogPolicy {
    type Err = LogPolicyParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "on-error" | "onError" => Ok(Self::OnError),
            "on-nudge" | "onNudge" => Ok(Self::OnNudge),
            other => Err(LogPolicyParserError(other.to_string())),
        }
    }
}

impl LogPolicy {
    /// Most verbose level a nudge is allowed to log at.
    ///
    /// Nudge events use their own target, which [`crate::logging::filter`]
    /// never silences, so this threshold is the only gate they go through.
    pub fn threshold(&self) -> LevelFilter {
        match self {
            Self::None => LevelFilter::OFF,
            Self::OnError => LevelFilter::ERROR,
            Self::OnNudge => LevelFilter::INFO,
        }
    }
}
