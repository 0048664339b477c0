//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - collect generated shapes into named groups
//! - own the gradient definitions those shapes reference
//! - provide deterministic paint order (group order, then layer)

mod key;
mod layer;
mod list;

pub use key::SortKey;
pub use layer::Layer;
pub use list::{DrawItem, DrawList, Group};
