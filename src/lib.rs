//! Semi-circular progress gauges.
//!
//! [`render`] turns a percentage into [`GaugeGeometry`]: the arc path, the
//! dash offset that reveals the filled part of the arc, the needle tip and
//! the value text. [`GaugeGeometry::to_svg`] draws it as a standalone SVG
//! document.
//!
//! ```
//! use arcgauge::{Dimensions, GaugeStyle, render};
//!
//! let gauge = render(33.456, Dimensions::default(), Some("Under warranty"));
//! assert_eq!(gauge.label, "33.5%");
//! let svg = gauge.to_svg(&GaugeStyle::default());
//! assert!(svg.contains("stroke-dashoffset"));
//! ```

pub mod errors;
mod log;
pub mod render;
pub mod types;

pub use errors::GaugeError;
pub use render::{
    ArcPath, ColorBands, Dimensions, GaugeGeometry, GaugeInput, GaugeStyle, Layer, LineCap,
    SvgDocument, SvgLayer, render,
};
pub use types::{Color, NumericError, Percent, Px, Radians, Scalar};

/// Render a gauge to SVG with the default style.
///
/// `size` and `stroke_width` fall back to 220 and 14. Returns an error with
/// diagnostics when the stroke is not thinner than the gauge.
pub fn gauge_svg(
    percentage: impl Into<Percent>,
    size: Option<f64>,
    stroke_width: Option<f64>,
    label: Option<&str>,
) -> Result<String, miette::Report> {
    let mut input = GaugeInput::new(percentage);
    if let Some(size) = size {
        input = input.size(size);
    }
    if let Some(stroke_width) = stroke_width {
        input = input.stroke_width(stroke_width);
    }
    input.set_label(label.map(str::to_owned));

    let geometry = input.render()?;
    Ok(geometry.to_svg(&GaugeStyle::default()))
}
