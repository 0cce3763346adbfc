//! SVG layers of a gauge
//!
//! Each layer is its own type that knows how to write itself as one SVG
//! element. [`Layer`] dispatches over them in paint order.

use std::fmt::{self, Write};

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::types::{Color, Px};

use super::style::LineCap;
use super::svg::{escape_text, fmt_num};

/// Common behavior for all gauge layers
#[enum_dispatch]
pub trait SvgLayer {
    /// Append this layer as one SVG element (no trailing newline)
    fn write_svg(&self, out: &mut dyn Write) -> fmt::Result;
}

#[enum_dispatch(SvgLayer)]
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Track,
    Progress,
    Needle,
    Hub,
    ValueText,
    Caption,
}

/// The full grey semicircle behind the progress stroke
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub d: String,
    pub stroke: Color,
    pub stroke_width: Px,
    pub line_cap: LineCap,
}

impl SvgLayer for Track {
    fn write_svg(&self, out: &mut dyn Write) -> fmt::Result {
        write!(
            out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="{}"/>"#,
            self.d,
            self.stroke,
            fmt_num(self.stroke_width.raw()),
            self.line_cap.as_str(),
        )
    }
}

/// The same semicircle, revealed up to the current value with a dash
/// pattern of one arc length shifted by the dash offset
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub d: String,
    pub stroke: Color,
    pub stroke_width: Px,
    pub line_cap: LineCap,
    pub dash_array: Px,
    pub dash_offset: Px,
}

impl SvgLayer for Progress {
    fn write_svg(&self, out: &mut dyn Write) -> fmt::Result {
        write!(
            out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="{}" stroke-dasharray="{}" stroke-dashoffset="{}"/>"#,
            self.d,
            self.stroke,
            fmt_num(self.stroke_width.raw()),
            self.line_cap.as_str(),
            fmt_num(self.dash_array.raw()),
            fmt_num(self.dash_offset.raw()),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Needle {
    pub from: DVec2,
    pub to: DVec2,
    pub stroke: Color,
    pub stroke_width: Px,
}

impl SvgLayer for Needle {
    fn write_svg(&self, out: &mut dyn Write) -> fmt::Result {
        write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            fmt_num(self.from.x),
            fmt_num(self.from.y),
            fmt_num(self.to.x),
            fmt_num(self.to.y),
            self.stroke,
            fmt_num(self.stroke_width.raw()),
        )
    }
}

/// Pivot disc drawn over the needle's base
#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    pub center: DVec2,
    pub radius: Px,
    pub fill: Color,
}

impl SvgLayer for Hub {
    fn write_svg(&self, out: &mut dyn Write) -> fmt::Result {
        write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(self.center.x),
            fmt_num(self.center.y),
            fmt_num(self.radius.raw()),
            self.fill,
        )
    }
}

/// Percentage text in the middle of the arc
#[derive(Debug, Clone, PartialEq)]
pub struct ValueText {
    pub at: DVec2,
    pub font_size: Px,
    pub fill: Color,
    pub content: String,
}

impl SvgLayer for ValueText {
    fn write_svg(&self, out: &mut dyn Write) -> fmt::Result {
        write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" font-weight="600" text-anchor="middle" dominant-baseline="middle" fill="{}">{}</text>"#,
            fmt_num(self.at.x),
            fmt_num(self.at.y),
            fmt_num(self.font_size.raw()),
            super::defaults::FONT_FAMILY,
            self.fill,
            escape_text(&self.content),
        )
    }
}

/// Annotation under the value; right-to-left when the text is
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub at: DVec2,
    pub font_size: Px,
    pub fill: Color,
    pub content: String,
    pub rtl: bool,
}

impl SvgLayer for Caption {
    fn write_svg(&self, out: &mut dyn Write) -> fmt::Result {
        write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" text-anchor="middle" dominant-baseline="middle" fill="{}""#,
            fmt_num(self.at.x),
            fmt_num(self.at.y),
            fmt_num(self.font_size.raw()),
            super::defaults::FONT_FAMILY,
            self.fill,
        )?;
        if self.rtl {
            out.write_str(r#" direction="rtl""#)?;
        }
        write!(out, ">{}</text>", escape_text(&self.content))
    }
}
