//! Typed generation options.
//!
//! Every recognized option is a field here; [`GenerationOptions::validate`]
//! checks them all once before any sampling happens.

use sweatdrop_engine::paint::BlendMode;

use crate::GenerateError;

/// Upper bound on `drop_count` accepted by [`GenerationOptions::validate`].
pub const MAX_DROP_COUNT: usize = 1_000_000;

/// Which outline the drops use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DropVariant {
    /// Shadow, body and highlight are ellipses.
    Ellipse,
    /// Shadow, body and highlight are teardrop paths, each rotated by a
    /// per-drop angle drawn from `[-rotation_variation, rotation_variation]`.
    Teardrop {
        /// Height-to-size ratio of the outline.
        teardrop_ratio: f64,
        /// Rotation jitter bound in degrees.
        rotation_variation: f64,
    },
}

impl DropVariant {
    pub const DEFAULT_TEARDROP: DropVariant =
        DropVariant::Teardrop { teardrop_ratio: 1.5, rotation_variation: 30.0 };

    /// Label of the outer group holding a run's drops.
    pub const fn group_label(self) -> &'static str {
        match self {
            DropVariant::Ellipse => "Sweat Drops",
            DropVariant::Teardrop { .. } => "Teardrop Sweat Drops",
        }
    }

    /// Per-drop group label, `index` is 0-based.
    pub fn drop_label(self, index: usize) -> String {
        match self {
            DropVariant::Ellipse => format!("Drop_{}", index + 1),
            DropVariant::Teardrop { .. } => format!("Teardrop_{}", index + 1),
        }
    }
}

/// Immutable configuration for one generation run.
///
/// Construct with [`GenerationOptions::ellipse`] or
/// [`GenerationOptions::teardrop`] and adjust with the `with_*` setters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub drop_count: usize,
    /// Base size before jitter.
    pub drop_size: f64,
    /// Size jitter fraction in `[0, 1)`.
    pub size_variation: f64,

    /// Degrees.
    pub shadow_angle: f64,
    pub shadow_distance: f64,
    pub shadow_opacity: f64,

    /// Degrees.
    pub highlight_angle: f64,
    /// Fraction of the drop size.
    pub highlight_size: f64,
    pub highlight_opacity: f64,

    pub area_width: f64,
    pub area_height: f64,

    pub blend_mode: BlendMode,
    pub variant: DropVariant,

    /// Prefix for gradient ids; set distinct values when several runs share a document.
    pub id_namespace: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::ellipse()
    }
}

impl GenerationOptions {
    /// Defaults of the ellipse ("sweat drop") variant.
    pub fn ellipse() -> Self {
        Self {
            drop_count: 5,
            drop_size: 20.0,
            size_variation: 0.3,
            shadow_angle: 45.0,
            shadow_distance: 3.0,
            shadow_opacity: 0.515,
            highlight_angle: 135.0,
            highlight_size: 0.3,
            highlight_opacity: 0.963,
            area_width: 200.0,
            area_height: 200.0,
            blend_mode: BlendMode::Normal,
            variant: DropVariant::Ellipse,
            id_namespace: None,
        }
    }

    /// Defaults of the teardrop variant.
    pub fn teardrop() -> Self {
        Self {
            shadow_opacity: 0.2,
            highlight_opacity: 1.0,
            blend_mode: BlendMode::HardLight,
            variant: DropVariant::DEFAULT_TEARDROP,
            ..Self::ellipse()
        }
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn with_drop_count(mut self, count: usize) -> Self {
        self.drop_count = count;
        self
    }

    pub fn with_drop_size(mut self, size: f64) -> Self {
        self.drop_size = size;
        self
    }

    pub fn with_size_variation(mut self, variation: f64) -> Self {
        self.size_variation = variation;
        self
    }

    pub fn with_shadow(mut self, angle: f64, distance: f64, opacity: f64) -> Self {
        self.shadow_angle = angle;
        self.shadow_distance = distance;
        self.shadow_opacity = opacity;
        self
    }

    pub fn with_highlight(mut self, angle: f64, size: f64, opacity: f64) -> Self {
        self.highlight_angle = angle;
        self.highlight_size = size;
        self.highlight_opacity = opacity;
        self
    }

    pub fn with_area(mut self, width: f64, height: f64) -> Self {
        self.area_width = width;
        self.area_height = height;
        self
    }

    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    /// Sets the blend mode from its CSS keyword.
    pub fn with_blend_mode_name(self, name: &str) -> Result<Self, GenerateError> {
        Ok(self.with_blend_mode(name.parse()?))
    }

    pub fn with_variant(mut self, variant: DropVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_id_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.id_namespace = Some(namespace.into());
        self
    }

    // ── validation ────────────────────────────────────────────────────────

    /// Checks every option; the first violation wins.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.drop_count > MAX_DROP_COUNT {
            return Err(GenerateError::invalid(
                "drop_count",
                format!("{} exceeds the maximum of {MAX_DROP_COUNT}", self.drop_count),
            ));
        }

        positive("drop_size", self.drop_size)?;
        half_open_unit("size_variation", self.size_variation)?;

        finite("shadow_angle", self.shadow_angle)?;
        finite("shadow_distance", self.shadow_distance)?;
        unit("shadow_opacity", self.shadow_opacity)?;

        finite("highlight_angle", self.highlight_angle)?;
        non_negative("highlight_size", self.highlight_size)?;
        unit("highlight_opacity", self.highlight_opacity)?;

        non_negative("area_width", self.area_width)?;
        non_negative("area_height", self.area_height)?;

        if let DropVariant::Teardrop { teardrop_ratio, rotation_variation } = self.variant {
            positive("teardrop_ratio", teardrop_ratio)?;
            non_negative("rotation_variation", rotation_variation)?;
        }

        if let Some(ns) = &self.id_namespace {
            if ns.is_empty() || ns.chars().any(|c| c.is_whitespace() || c == '#') {
                return Err(GenerateError::invalid(
                    "id_namespace",
                    format!("`{ns}` must be non-empty without whitespace or `#`"),
                ));
            }
        }

        Ok(())
    }
}

fn finite(name: &'static str, v: f64) -> Result<(), GenerateError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(GenerateError::invalid(name, format!("{v} is not finite")))
    }
}

fn positive(name: &'static str, v: f64) -> Result<(), GenerateError> {
    finite(name, v)?;
    if v > 0.0 {
        Ok(())
    } else {
        Err(GenerateError::invalid(name, format!("{v} must be > 0")))
    }
}

fn non_negative(name: &'static str, v: f64) -> Result<(), GenerateError> {
    finite(name, v)?;
    if v >= 0.0 {
        Ok(())
    } else {
        Err(GenerateError::invalid(name, format!("{v} must be >= 0")))
    }
}

fn unit(name: &'static str, v: f64) -> Result<(), GenerateError> {
    finite(name, v)?;
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(GenerateError::invalid(name, format!("{v} must be in [0, 1]")))
    }
}

fn half_open_unit(name: &'static str, v: f64) -> Result<(), GenerateError> {
    finite(name, v)?;
    if (0.0..1.0).contains(&v) {
        Ok(())
    } else {
        Err(GenerateError::invalid(name, format!("{v} must be in [0, 1)")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweatdrop_engine::EngineError;

    fn rejected(options: GenerationOptions) -> &'static str {
        match options.validate() {
            Err(GenerateError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        GenerationOptions::ellipse().validate().unwrap();
        GenerationOptions::teardrop().validate().unwrap();
    }

    #[test]
    fn teardrop_defaults_differ_where_expected() {
        let t = GenerationOptions::teardrop();
        assert_eq!(t.shadow_opacity, 0.2);
        assert_eq!(t.highlight_opacity, 1.0);
        assert_eq!(t.blend_mode, BlendMode::HardLight);
        assert_eq!(t.drop_size, 20.0);
        assert_eq!(
            t.variant,
            DropVariant::Teardrop { teardrop_ratio: 1.5, rotation_variation: 30.0 }
        );
    }

    #[test]
    fn zero_count_and_zero_area_are_valid() {
        GenerationOptions::ellipse().with_drop_count(0).with_area(0.0, 0.0).validate().unwrap();
    }

    #[test]
    fn drop_count_is_bounded() {
        GenerationOptions::ellipse().with_drop_count(MAX_DROP_COUNT).validate().unwrap();
        assert_eq!(
            rejected(GenerationOptions::ellipse().with_drop_count(MAX_DROP_COUNT + 1)),
            "drop_count"
        );
        let huge = GenerationOptions::ellipse().with_drop_count(usize::MAX);
        assert_eq!(rejected(huge), "drop_count");
    }

    #[test]
    fn size_checks() {
        assert_eq!(rejected(GenerationOptions::ellipse().with_drop_size(0.0)), "drop_size");
        assert_eq!(rejected(GenerationOptions::ellipse().with_drop_size(f64::NAN)), "drop_size");
        let o = GenerationOptions::ellipse;
        assert_eq!(rejected(o().with_size_variation(1.0)), "size_variation");
        assert_eq!(rejected(o().with_size_variation(-0.1)), "size_variation");
    }

    #[test]
    fn opacity_checks() {
        assert_eq!(
            rejected(GenerationOptions::ellipse().with_shadow(45.0, 3.0, 1.2)),
            "shadow_opacity"
        );
        assert_eq!(
            rejected(GenerationOptions::ellipse().with_highlight(135.0, 0.3, -0.01)),
            "highlight_opacity"
        );
    }

    #[test]
    fn angle_and_area_checks() {
        assert_eq!(
            rejected(GenerationOptions::ellipse().with_shadow(f64::INFINITY, 3.0, 0.5)),
            "shadow_angle"
        );
        assert_eq!(rejected(GenerationOptions::ellipse().with_area(-1.0, 10.0)), "area_width");
        assert_eq!(rejected(GenerationOptions::ellipse().with_area(10.0, f64::NAN)), "area_height");
    }

    #[test]
    fn teardrop_checks() {
        let bad_ratio = GenerationOptions::teardrop()
            .with_variant(DropVariant::Teardrop { teardrop_ratio: 0.0, rotation_variation: 30.0 });
        assert_eq!(rejected(bad_ratio), "teardrop_ratio");

        let bad_rotation = GenerationOptions::teardrop()
            .with_variant(DropVariant::Teardrop { teardrop_ratio: 1.5, rotation_variation: -5.0 });
        assert_eq!(rejected(bad_rotation), "rotation_variation");
    }

    #[test]
    fn namespace_checks() {
        GenerationOptions::ellipse().with_id_namespace("run-2").validate().unwrap();
        assert_eq!(rejected(GenerationOptions::ellipse().with_id_namespace("")), "id_namespace");
        assert_eq!(rejected(GenerationOptions::ellipse().with_id_namespace("a b")), "id_namespace");
    }

    #[test]
    fn blend_mode_by_name() {
        let o = GenerationOptions::ellipse().with_blend_mode_name("multiply").unwrap();
        assert_eq!(o.blend_mode, BlendMode::Multiply);

        let err = GenerationOptions::ellipse().with_blend_mode_name("glow").unwrap_err();
        assert_eq!(err, GenerateError::Engine(EngineError::UnknownBlendMode("glow".into())));
    }

    #[test]
    fn labels() {
        assert_eq!(DropVariant::Ellipse.drop_label(0), "Drop_1");
        assert_eq!(DropVariant::DEFAULT_TEARDROP.drop_label(4), "Teardrop_5");
        assert_eq!(DropVariant::DEFAULT_TEARDROP.group_label(), "Teardrop Sweat Drops");
    }
}
