use core::cmp::Ordering;

use super::Layer;

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `group`: ascending (earlier groups are further back)
/// 2) `layer`: shadow, body, highlight
/// 3) `order`: insertion order for equal group and layer
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub group: u32,
    pub layer: Layer,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(group: u32, layer: Layer, order: u32) -> Self {
        Self { group, layer, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .cmp(&other.group)
            .then(self.layer.cmp(&other.layer))
            .then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
