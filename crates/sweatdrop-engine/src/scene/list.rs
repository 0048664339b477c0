use std::collections::HashSet;

use crate::EngineError;
use crate::paint::{GradientDef, GradientId};
use crate::shape::Shape;

use super::{Layer, SortKey};

/// A single draw item: sort key + shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub shape: Shape,
}

/// A named group of shapes, e.g. one drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
}

/// Recorded draw stream for one document.
///
/// Owns the gradient definitions its shapes reference. Gradient ids are
/// unique within a list; [`push_group`](Self::push_group) rejects a group that
/// would redefine one and leaves the list untouched.
///
/// ```
/// # use sweatdrop_engine::scene::{DrawList, Layer};
/// # use sweatdrop_engine::shape::{Ellipse, Shape};
/// # use sweatdrop_engine::paint::{BlendMode, Color, Fill, GradientDef};
/// # use sweatdrop_engine::Point;
/// let mut list = DrawList::new("Sweat Drops");
/// let outline = Ellipse::new(Point::ORIGIN, 1.0, 1.0);
/// let dot = Shape::new(outline, Fill::solid(Color::WHITE, 1.0), BlendMode::Normal);
/// list.push_group("Drop_1", [(Layer::Body, dot)], Vec::<GradientDef>::new()).unwrap();
/// assert_eq!(list.items().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    label: String,
    groups: Vec<Group>,
    items: Vec<DrawItem>,
    gradients: Vec<GradientDef>,
    gradient_ids: HashSet<GradientId>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    /// Label of the outer group holding every drop.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Gradient definitions in insertion order.
    #[inline]
    pub fn gradients(&self) -> &[GradientDef] {
        &self.gradients
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears groups, items and gradients. Keeps the label and allocated capacity.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.items.clear();
        self.gradients.clear();
        self.gradient_ids.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Appends a group with its shapes and the gradients it defines.
    ///
    /// Returns the group index. Fails without modifying the list when a
    /// gradient id is already defined (here or earlier in the same call), or
    /// when a shape references a gradient that is defined nowhere.
    pub fn push_group(
        &mut self,
        label: impl Into<String>,
        shapes: impl IntoIterator<Item = (Layer, Shape)>,
        gradients: impl IntoIterator<Item = GradientDef>,
    ) -> Result<u32, EngineError> {
        let gradients: Vec<GradientDef> = gradients.into_iter().collect();
        let shapes: Vec<(Layer, Shape)> = shapes.into_iter().collect();

        let mut fresh: HashSet<&GradientId> = HashSet::with_capacity(gradients.len());
        for def in &gradients {
            let id = def.id();
            if self.gradient_ids.contains(id) || !fresh.insert(id) {
                return Err(EngineError::GradientIdCollision(id.clone()));
            }
        }

        for (_, shape) in &shapes {
            if let Some(id) = shape.fill.gradient_id() {
                if !self.gradient_ids.contains(id) && !fresh.contains(id) {
                    return Err(EngineError::UndefinedGradient(id.clone()));
                }
            }
        }

        let group = self.groups.len() as u32;
        self.groups.push(Group { label: label.into() });

        for def in gradients {
            self.gradient_ids.insert(def.id().clone());
            self.gradients.push(def);
        }

        for (layer, shape) in shapes {
            let order = self.next_order;
            self.next_order = self.next_order.wrapping_add(1);
            self.items.push(DrawItem { key: SortKey::new(group, layer, order), shape });
        }

        self.sorted_dirty = true;
        log::trace!("draw list `{}`: pushed group {group}", self.label);
        Ok(group)
    }

    /// Looks up a gradient definition by id.
    pub fn gradient(&self, id: &GradientId) -> Option<&GradientDef> {
        if !self.gradient_ids.contains(id) {
            return None;
        }
        self.gradients.iter().find(|g| g.id() == id)
    }

    /// Iterates items in paint order (back-to-front) without cloning shapes.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use crate::paint::{BlendMode, Color, ColorStop, Fill, LinearGradient};
    use crate::shape::Ellipse;

    fn gradient(id: &str) -> GradientDef {
        LinearGradient::new(
            GradientId::new(id),
            vec![
                ColorStop::new(0.0, Color::BLACK, 0.5),
                ColorStop::new(1.0, Color::BLACK, 0.0),
            ],
        )
        .into()
    }

    fn dot(fill: Fill) -> Shape {
        Shape::new(Ellipse::new(Point::ORIGIN, 1.0, 1.0), fill, BlendMode::Normal)
    }

    fn no_shapes() -> Vec<(Layer, Shape)> {
        Vec::new()
    }

    fn no_gradients() -> Vec<GradientDef> {
        Vec::new()
    }

    fn solid() -> Fill {
        Fill::solid(Color::WHITE, 1.0)
    }

    #[test]
    fn paint_order_follows_group_then_layer() {
        let mut list = DrawList::new("test");
        // Push layers out of order; paint order must still be shadow, body, highlight.
        list.push_group(
            "a",
            [
                (Layer::Highlight, dot(solid())),
                (Layer::Shadow, dot(solid())),
                (Layer::Body, dot(solid())),
            ],
            no_gradients(),
        )
        .unwrap();
        list.push_group("b", [(Layer::Shadow, dot(solid()))], no_gradients()).unwrap();

        let keys: Vec<(u32, Layer)> =
            list.iter_in_paint_order().map(|i| (i.key.group, i.key.layer)).collect();
        assert_eq!(
            keys,
            vec![(0, Layer::Shadow), (0, Layer::Body), (0, Layer::Highlight), (1, Layer::Shadow)]
        );
    }

    #[test]
    fn duplicate_gradient_across_groups_is_rejected() {
        let mut list = DrawList::new("test");
        let body = dot(Fill::gradient(GradientId::new("g")));
        list.push_group("a", [(Layer::Body, body)], [gradient("g")]).unwrap();

        let err = list.push_group("b", no_shapes(), [gradient("g")]).unwrap_err();
        assert_eq!(err, EngineError::GradientIdCollision(GradientId::new("g")));
        // Failed push leaves the list untouched.
        assert_eq!(list.groups().len(), 1);
        assert_eq!(list.gradients().len(), 1);
    }

    #[test]
    fn duplicate_gradient_within_group_is_rejected() {
        let mut list = DrawList::new("test");
        let err = list.push_group("a", no_shapes(), [gradient("g"), gradient("g")]).unwrap_err();
        assert_eq!(err, EngineError::GradientIdCollision(GradientId::new("g")));
        assert!(list.gradients().is_empty());
    }

    #[test]
    fn undefined_gradient_reference_is_rejected() {
        let mut list = DrawList::new("test");
        let body = dot(Fill::gradient(GradientId::new("missing")));
        let err = list.push_group("a", [(Layer::Body, body)], no_gradients()).unwrap_err();
        assert_eq!(err, EngineError::UndefinedGradient(GradientId::new("missing")));
        assert!(list.is_empty());
    }

    #[test]
    fn shapes_may_reference_earlier_groups_gradients() {
        let mut list = DrawList::new("test");
        list.push_group("a", no_shapes(), [gradient("shared")]).unwrap();
        let body = dot(Fill::gradient(GradientId::new("shared")));
        list.push_group("b", [(Layer::Body, body)], no_gradients()).unwrap();
        assert!(list.gradient(&GradientId::new("shared")).is_some());
        assert!(list.gradient(&GradientId::new("other")).is_none());
    }

    #[test]
    fn clear_keeps_label() {
        let mut list = DrawList::new("Sweat Drops");
        list.push_group("a", [(Layer::Body, dot(solid()))], [gradient("g")]).unwrap();
        list.clear();
        assert!(list.is_empty());
        assert!(list.groups().is_empty());
        assert_eq!(list.label(), "Sweat Drops");
        // Ids are free again after clearing.
        list.push_group("a", no_shapes(), [gradient("g")]).unwrap();
    }
}
