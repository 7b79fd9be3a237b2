use thiserror::Error;

/// Everything that can make a whole check fail.
///
/// A target being down is not in here: unreachable targets are a normal
/// `false` entry in the result map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("no target given")]
    MissingTargets,

    #[error("target must not be empty")]
    EmptyTarget,

    #[error("invalid target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("'silent' and 'json' cannot be used together")]
    IncompatibleOptions,

    #[error("failed to build HTTP client: {0}")]
    Transport(String),
}

impl CheckError {
    /// True for errors caused by what the caller passed in.
    pub fn is_usage(&self) -> bool {
        !matches!(self, Self::Transport(_))
    }
}
