//! Rendering style state and sparse per-shape overrides.

use vectorpad_core::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    #[default]
    SourceOver,
    SourceIn,
    SourceOut,
    SourceAtop,
    DestinationOver,
    DestinationIn,
    DestinationOut,
    DestinationAtop,
    Lighter,
    Copy,
    Xor,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    Difference,
}

impl CompositeMode {
    pub fn blend_mode(&self) -> tiny_skia::BlendMode {
        use tiny_skia::BlendMode;
        match self {
            Self::SourceOver => BlendMode::SourceOver,
            Self::SourceIn => BlendMode::SourceIn,
            Self::SourceOut => BlendMode::SourceOut,
            Self::SourceAtop => BlendMode::SourceAtop,
            Self::DestinationOver => BlendMode::DestinationOver,
            Self::DestinationIn => BlendMode::DestinationIn,
            Self::DestinationOut => BlendMode::DestinationOut,
            Self::DestinationAtop => BlendMode::DestinationAtop,
            Self::Lighter => BlendMode::Plus,
            Self::Copy => BlendMode::Source,
            Self::Xor => BlendMode::Xor,
            Self::Multiply => BlendMode::Multiply,
            Self::Screen => BlendMode::Screen,
            Self::Overlay => BlendMode::Overlay,
            Self::Darken => BlendMode::Darken,
            Self::Lighten => BlendMode::Lighten,
            Self::Difference => BlendMode::Difference,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    Ltr,
    Rtl,
    #[default]
    Inherit,
}

/// Complete style context of a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub stroke: Rgba,
    pub fill: Rgba,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub miter_limit: f32,
    pub line_dash_offset: f32,
    pub global_alpha: f32,
    pub composite: CompositeMode,
    pub shadow_color: Rgba,
    pub shadow_blur: f32,
    pub shadow_offset_x: f32,
    pub shadow_offset_y: f32,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    pub direction: TextDirection,
    pub image_smoothing: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            stroke: Rgba::BLACK,
            fill: Rgba::BLACK,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 10.0,
            line_dash_offset: 0.0,
            global_alpha: 1.0,
            composite: CompositeMode::SourceOver,
            shadow_color: Rgba::TRANSPARENT,
            shadow_blur: 0.0,
            shadow_offset_x: 0.0,
            shadow_offset_y: 0.0,
            font: "10px sans-serif".to_string(),
            text_align: TextAlign::Start,
            text_baseline: TextBaseline::Alphabetic,
            direction: TextDirection::Inherit,
            image_smoothing: true,
        }
    }
}

impl StyleState {
    pub fn has_shadow(&self) -> bool {
        !self.shadow_color.is_transparent()
            && (self.shadow_blur > 0.0 || self.shadow_offset_x != 0.0 || self.shadow_offset_y != 0.0)
    }
}

/// Sparse style override attached to a shape.
///
/// Only fields that are `Some` are written into the surface style; the rest
/// keep whatever the surface had before.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawState {
    pub stroke: Option<Rgba>,
    pub fill: Option<Rgba>,
    pub line_width: Option<f32>,
    pub line_cap: Option<LineCap>,
    pub line_join: Option<LineJoin>,
    pub miter_limit: Option<f32>,
    pub line_dash_offset: Option<f32>,
    pub global_alpha: Option<f32>,
    pub composite: Option<CompositeMode>,
    pub shadow_color: Option<Rgba>,
    pub shadow_blur: Option<f32>,
    pub shadow_offset_x: Option<f32>,
    pub shadow_offset_y: Option<f32>,
    pub font: Option<String>,
    pub text_align: Option<TextAlign>,
    pub text_baseline: Option<TextBaseline>,
    pub direction: Option<TextDirection>,
    pub image_smoothing: Option<bool>,
}

impl DrawState {
    pub fn stroked(color: Rgba) -> Self {
        Self {
            stroke: Some(color),
            ..Default::default()
        }
    }

    pub fn filled(color: Rgba) -> Self {
        Self {
            fill: Some(color),
            ..Default::default()
        }
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, style: &mut StyleState) {
        macro_rules! set {
            ($($field:ident),*) => {
                $(if let Some(v) = &self.$field {
                    style.$field = v.clone();
                })*
            };
        }
        set!(
            stroke,
            fill,
            line_width,
            line_cap,
            line_join,
            miter_limit,
            line_dash_offset,
            global_alpha,
            composite,
            shadow_color,
            shadow_blur,
            shadow_offset_x,
            shadow_offset_y,
            font,
            text_align,
            text_baseline,
            direction,
            image_smoothing
        );
    }
}
