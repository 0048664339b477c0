/// Paint layer within a drop group.
///
/// Declaration order is paint order: lower layers are drawn first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Layer {
    Shadow,
    Body,
    Highlight,
}

impl Layer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Layer::Shadow => "shadow",
            Layer::Body => "body",
            Layer::Highlight => "highlight",
        }
    }
}
