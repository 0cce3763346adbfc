//! Gauge rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `geometry`: Dimensions, the arc/needle geometry and the `render` entry point
//! - `style`: Colours, line caps and threshold bands
//! - `layers`: One type per SVG element, dispatched through `Layer`
//! - `svg`: SVG document assembly and number formatting

pub mod defaults;
pub mod geometry;
pub mod layers;
pub mod style;
pub mod svg;

// Re-export commonly used items
pub use geometry::{ArcPath, Dimensions, GaugeGeometry, GaugeInput, render};
pub use layers::{Layer, SvgLayer};
pub use style::{ColorBands, GaugeStyle, LineCap};
pub use svg::SvgDocument;
