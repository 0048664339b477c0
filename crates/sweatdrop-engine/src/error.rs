use crate::paint::GradientId;

/// Errors raised by engine-level parsing and draw-stream assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A blend mode name is not one of the CSS `mix-blend-mode` keywords.
    #[error("unknown blend mode `{0}`")]
    UnknownBlendMode(String),

    /// A color literal is not `#rrggbb` or `#rgb`.
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    /// Two gradient definitions share an id within one draw list.
    #[error("gradient id `{0}` is already defined")]
    GradientIdCollision(GradientId),

    /// A shape references a gradient that was never defined.
    #[error("shape references undefined gradient `{0}`")]
    UndefinedGradient(GradientId),
}
