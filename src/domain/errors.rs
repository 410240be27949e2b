use thiserror::Error;

/// Failure taxonomy for the agent.
///
/// `Configuration` halts startup. `TransientUpstream` is retried within the
/// attempt budget. `FatalClient` aborts the retry loop immediately. None of
/// these ever reach an end user as a typed error; the surface boundaries
/// substitute the fixed fallback text instead.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transient upstream error: {0}")]
    TransientUpstream(String),

    #[error("Fatal client error: {0}")]
    FatalClient(String),
}

impl AgentError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn transient(msg: impl Into<String>) -> Self {
        Self::TransientUpstream(msg.into())
    }

    pub fn fatal(msg: impl Into<String>) -> Self {
        Self::FatalClient(msg.into())
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TransientUpstream(_))
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;
