use sweatdrop_engine::Point;
use sweatdrop_engine::paint::GradientDef;
use sweatdrop_engine::scene::{DrawList, Layer};
use sweatdrop_engine::shape::Shape;

use crate::{GenerateError, GenerationOptions};

/// One generated drop: shadow, body and highlight plus the gradients they use.
#[derive(Debug, Clone, PartialEq)]
pub struct SweatDrop {
    /// 0-based position in the run.
    pub index: usize,
    /// Group label, `Drop_N` or `Teardrop_N` (1-based).
    pub label: String,
    pub center: Point,
    /// Resolved size after jitter.
    pub size: f64,
    /// Resolved rotation in degrees; `None` for the ellipse variant.
    pub rotation: Option<f64>,
    pub shadow: Shape,
    pub body: Shape,
    pub highlight: Shape,
    /// Shadow gradient first, body gradient second.
    pub gradients: Vec<GradientDef>,
}

impl SweatDrop {
    /// Shapes in paint order.
    pub fn shapes(&self) -> [(Layer, &Shape); 3] {
        [
            (Layer::Shadow, &self.shadow),
            (Layer::Body, &self.body),
            (Layer::Highlight, &self.highlight),
        ]
    }

    /// The definition the shape on `layer` fills with, if it uses a gradient.
    pub fn gradient_for(&self, layer: Layer) -> Option<&GradientDef> {
        let (_, shape) = self.shapes().into_iter().find(|(l, _)| *l == layer)?;
        let id = shape.fill.gradient_id()?;
        self.gradients.iter().find(|g| g.id() == id)
    }

    /// Appends this drop as one group. Returns the group index.
    pub fn push_into(&self, list: &mut DrawList) -> Result<u32, GenerateError> {
        let shapes = self.shapes().map(|(layer, shape)| (layer, shape.clone()));
        Ok(list.push_group(self.label.clone(), shapes, self.gradients.iter().cloned())?)
    }
}

/// Builds the draw list for one run: an outer group labelled after the variant
/// holding one group per drop.
pub fn assemble(
    options: &GenerationOptions,
    drops: &[SweatDrop],
) -> Result<DrawList, GenerateError> {
    let mut list = DrawList::new(options.variant.group_label());
    for drop in drops {
        drop.push_into(&mut list)?;
    }
    log::debug!(
        "assembled `{}`: {} groups, {} gradients",
        list.label(),
        list.groups().len(),
        list.gradients().len()
    );
    Ok(list)
}
