//! Default sizes and settings (SVG user units)

use crate::types::Px;

pub const SIZE: Px = Px::px(220.0);
pub const STROKE_WIDTH: Px = Px::px(14.0);
/// Smallest font size for the centre value text
pub const MIN_FONT_SIZE: Px = Px::px(14.0);
/// Centre text grows with the radius by this factor
pub const FONT_RADIUS_FACTOR: f64 = 0.32;
/// Smallest font size for the caption under the value
pub const MIN_CAPTION_FONT_SIZE: Px = Px::px(11.0);
pub const CAPTION_FONT_FACTOR: f64 = 0.4;
/// Caption baseline sits this many value-font-sizes below the value text
pub const CAPTION_OFFSET_FACTOR: f64 = 0.75;
pub const NEEDLE_WIDTH: Px = Px::px(3.0);
pub const FONT_FAMILY: &str = "system-ui, sans-serif";
/// Significant decimals kept when printing SVG numbers
pub const DECIMALS: usize = 3;
