use thiserror::Error;

/// Unified error type for commit-pilot operations
#[derive(Error, Debug)]
pub enum CommitPilotError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Hook error: {0}")]
    Hook(String),

    #[error("External tool failed: {0}")]
    Tool(String),

    #[error("Commit message failed validation ({0} rule violations)")]
    Validation(usize),

    #[error("Missing required tool: {tool}. {hint}")]
    MissingTool { tool: String, hint: String },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commit-pilot
pub type Result<T> = std::result::Result<T, CommitPilotError>;

impl CommitPilotError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CommitPilotError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        CommitPilotError::Version(msg.into())
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        CommitPilotError::Hook(msg.into())
    }

    /// Create an external-tool error with context
    pub fn tool(msg: impl Into<String>) -> Self {
        CommitPilotError::Tool(msg.into())
    }

    /// Create a missing-tool error with a remediation hint
    pub fn missing_tool(tool: impl Into<String>, hint: impl Into<String>) -> Self {
        CommitPilotError::MissingTool {
            tool: tool.into(),
            hint: hint.into(),
        }
    }

    /// True if this error represents user cancellation rather than failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CommitPilotError::Cancelled)
    }
}
