use super::{Color, GradientId};

/// Paint source for filling a shape.
///
/// Gradients are referenced by id rather than embedded, so several shapes can
/// share one definition and sinks can emit definitions once.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid { color: Color, opacity: f64 },
    Gradient(GradientId),
}

impl Fill {
    #[inline]
    pub fn solid(color: Color, opacity: f64) -> Self {
        Fill::Solid { color, opacity }
    }

    #[inline]
    pub fn gradient(id: GradientId) -> Self {
        Fill::Gradient(id)
    }

    /// Returns the referenced gradient id, if any.
    #[inline]
    pub fn gradient_id(&self) -> Option<&GradientId> {
        match self {
            Fill::Gradient(id) => Some(id),
            Fill::Solid { .. } => None,
        }
    }
}
