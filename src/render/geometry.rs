//! Gauge geometry: the semicircle, its stroke reveal and the needle.
//!
//! Everything here is a pure function of [`Percent`] and [`Dimensions`].
//! Coordinates are SVG user units with Y growing downward; the arc is the
//! upper half of a circle whose centre sits on the bottom edge of the
//! `size x size/2` box.

use std::f64::consts::PI;
use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::GaugeError;
use crate::types::{NumericError, Percent, Px, Radians, Scalar};

use super::defaults;
use super::svg::fmt_num;

/// Validated outer size and stroke width.
///
/// The only way to get one is through [`Dimensions::new`] or the 220/14
/// default, so the radius is always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    size: Px,
    stroke_width: Px,
}

impl Dimensions {
    pub fn new(size: f64, stroke_width: f64) -> Result<Self, GaugeError> {
        let size = Px::try_positive(size).map_err(|source| GaugeError::InvalidNumber {
            field: "size",
            source,
        })?;
        // Doubling must stay finite so π·radius and the canvas height do too.
        if !(size.raw() * 2.0).is_finite() {
            return Err(GaugeError::InvalidNumber {
                field: "size",
                source: NumericError::TooLarge,
            });
        }
        let stroke_width =
            Px::try_positive(stroke_width).map_err(|source| GaugeError::InvalidNumber {
                field: "stroke width",
                source,
            })?;
        if stroke_width >= size {
            return Err(GaugeError::InvalidDimensions {
                size: size.raw(),
                stroke_width: stroke_width.raw(),
            });
        }
        Ok(Self { size, stroke_width })
    }

    pub fn size(&self) -> Px {
        self.size
    }

    pub fn stroke_width(&self) -> Px {
        self.stroke_width
    }

    /// `(size - stroke_width) / 2`, always > 0
    pub fn radius(&self) -> Px {
        (self.size - self.stroke_width) / 2.0
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            size: defaults::SIZE,
            stroke_width: defaults::STROKE_WIDTH,
        }
    }
}

/// The upper semicircle as a single SVG elliptical-arc command.
///
/// Runs from the leftmost point to the rightmost point, clockwise in
/// screen space, which takes it over the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    pub start: DVec2,
    pub end: DVec2,
    pub radius: Px,
}

impl ArcPath {
    pub const LARGE_ARC: bool = false;
    pub const SWEEP: bool = true;

    fn upper_half(center: DVec2, radius: Px) -> Self {
        let r = radius.raw();
        Self {
            start: center - dvec2(r, 0.0),
            end: center + dvec2(r, 0.0),
            radius,
        }
    }
}

/// `M sx sy A r r 0 0 1 ex ey`
impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = fmt_num(self.radius.raw());
        write!(
            f,
            "M {} {} A {} {} 0 {} {} {} {}",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            r,
            r,
            u8::from(Self::LARGE_ARC),
            u8::from(Self::SWEEP),
            fmt_num(self.end.x),
            fmt_num(self.end.y),
        )
    }
}

/// Everything a renderer needs to draw one gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeGeometry {
    /// Input percentage forced into `[0, 100]`
    pub clamped: Percent,
    /// `clamped / 100`
    pub progress: Scalar,
    pub width: Px,
    pub height: Px,
    pub stroke_width: Px,
    pub radius: Px,
    pub center: DVec2,
    pub arc_path: ArcPath,
    /// Length of the semicircle, `π r`
    pub arc_length: Px,
    /// Hidden part of the arc; pair with a dash array of `arc_length`
    pub dash_offset: Px,
    /// Needle direction, π at 0% down to 0 at 100%
    pub angle: Radians,
    pub needle_tip: DVec2,
    /// Value text, e.g. `33.5%`
    pub label: String,
    /// Optional annotation shown under the value
    pub caption: Option<String>,
    pub text_anchor: DVec2,
    pub font_size: Px,
}

impl GaugeGeometry {
    pub fn clamped_percentage(&self) -> f64 {
        self.clamped.raw()
    }

    /// Dash pattern length for the reveal; one dash covering the whole arc.
    pub fn dash_array(&self) -> Px {
        self.arc_length
    }

    /// Stroke length actually visible, `progress × arc_length`.
    pub fn visible_length(&self) -> Px {
        self.arc_length - self.dash_offset
    }

    /// Distance from the centre to the needle tip.
    pub fn tip_radius(&self) -> Px {
        self.radius - self.stroke_width / 2.0
    }
}

/// Compute the gauge for one percentage.
///
/// Total: any percentage is accepted (NaN and `None` read as 0, the rest is
/// clamped), and `Dimensions` already guarantees a positive radius.
pub fn render(
    percentage: impl Into<Percent>,
    dims: Dimensions,
    label: Option<&str>,
) -> GaugeGeometry {
    let clamped: Percent = percentage.into();

    let width = dims.size();
    let height = dims.size() / 2.0;
    let stroke_width = dims.stroke_width();
    let radius = dims.radius();
    let center = dvec2(width.raw() / 2.0, height.raw());

    let progress = clamped.fraction();
    let arc_length = Px(PI * radius.raw());
    let dash_offset = arc_length * progress.complement();

    // Linear over the half turn; not tied to the arc-length reveal above.
    let angle = Radians::HALF_TURN * progress.complement();
    let tip_radius = radius - stroke_width / 2.0;
    let needle_tip = center + angle.svg_direction() * tip_radius.raw();

    let text_anchor = dvec2(center.x, center.y - radius.raw() / 2.0);
    let font_size = (radius * defaults::FONT_RADIUS_FACTOR).max(defaults::MIN_FONT_SIZE);

    crate::log::debug!(
        percent = clamped.raw(),
        radius = radius.raw(),
        dash_offset = dash_offset.raw(),
        "rendered gauge geometry"
    );

    GaugeGeometry {
        clamped,
        progress,
        width,
        height,
        stroke_width,
        radius,
        center,
        arc_path: ArcPath::upper_half(center, radius),
        arc_length,
        dash_offset,
        angle,
        needle_tip,
        label: clamped.to_string(),
        caption: label.map(str::to_owned),
        text_anchor,
        font_size,
    }
}

/// Caller-facing gauge description with raw sizes.
///
/// Fields change only through the setters; [`GaugeInput::render`] validates
/// the sizes and fails fast instead of producing a degenerate arc.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeInput {
    percentage: Percent,
    size: f64,
    stroke_width: f64,
    label: Option<String>,
}

impl Default for GaugeInput {
    fn default() -> Self {
        Self {
            percentage: Percent::MIN,
            size: defaults::SIZE.raw(),
            stroke_width: defaults::STROKE_WIDTH.raw(),
            label: None,
        }
    }
}

impl GaugeInput {
    pub fn new(percentage: impl Into<Percent>) -> Self {
        Self {
            percentage: percentage.into(),
            ..Self::default()
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn set_percentage(&mut self, percentage: impl Into<Percent>) {
        self.percentage = percentage.into();
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn percentage(&self) -> Percent {
        self.percentage
    }

    pub fn dimensions(&self) -> Result<Dimensions, GaugeError> {
        Dimensions::new(self.size, self.stroke_width)
    }

    pub fn render(&self) -> Result<GaugeGeometry, GaugeError> {
        let dims = self.dimensions()?;
        Ok(render(self.percentage, dims, self.label.as_deref()))
    }
}
