use sweatdrop_engine::EngineError;

/// Errors returned by option validation, generation and assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// A non-finite or out-of-range option. Generation never starts.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Blend-mode parsing or draw-list assembly failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GenerateError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GenerateError::InvalidParameter { name, reason: reason.into() }
    }
}
