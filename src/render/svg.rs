//! SVG generation

use std::fmt::{self, Write};

use glam::dvec2;

use super::defaults;
use super::geometry::GaugeGeometry;
use super::layers::{Caption, Hub, Layer, Needle, Progress, SvgLayer, Track, ValueText};
use super::style::GaugeStyle;
use crate::types::Px;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

impl GaugeGeometry {
    /// Layers in paint order: track, progress, needle, hub, value, caption.
    pub fn layers(&self, style: &GaugeStyle) -> Vec<Layer> {
        let d = self.arc_path.to_string();
        let mut layers: Vec<Layer> = vec![
            Track {
                d: d.clone(),
                stroke: style.track.clone(),
                stroke_width: self.stroke_width,
                line_cap: style.line_cap,
            }
            .into(),
            Progress {
                d,
                stroke: style.progress_color(self.clamped).clone(),
                stroke_width: self.stroke_width,
                line_cap: style.line_cap,
                dash_array: self.dash_array(),
                dash_offset: self.dash_offset,
            }
            .into(),
            Needle {
                from: self.center,
                to: self.needle_tip,
                stroke: style.needle.clone(),
                stroke_width: defaults::NEEDLE_WIDTH,
            }
            .into(),
            Hub {
                center: self.center,
                radius: self.stroke_width / 2.0,
                fill: style.needle.clone(),
            }
            .into(),
            ValueText {
                at: self.text_anchor,
                font_size: self.font_size,
                fill: style.text.clone(),
                content: self.label.clone(),
            }
            .into(),
        ];

        if let Some(caption) = &self.caption {
            let font_size = (self.font_size * defaults::CAPTION_FONT_FACTOR)
                .max(defaults::MIN_CAPTION_FONT_SIZE);
            let baseline =
                self.text_anchor.y + (self.font_size * defaults::CAPTION_OFFSET_FACTOR).raw();
            layers.push(
                Caption {
                    at: dvec2(self.text_anchor.x, baseline),
                    font_size,
                    fill: style.caption.clone(),
                    content: caption.clone(),
                    rtl: is_rtl(caption),
                }
                .into(),
            );
        }

        layers
    }

    /// Height of the SVG canvas: the half-size box plus room for the
    /// stroke's lower edge and the hub below the centre line.
    pub fn canvas_height(&self) -> Px {
        self.height + self.stroke_width
    }

    /// The SVG document for this gauge, written on demand.
    pub fn document<'a>(&'a self, style: &'a GaugeStyle) -> SvgDocument<'a> {
        SvgDocument {
            geometry: self,
            style,
        }
    }

    /// Render a standalone SVG document.
    pub fn to_svg(&self, style: &GaugeStyle) -> String {
        let out = self.document(style).to_string();
        crate::log::debug!(bytes = out.len(), "serialized gauge svg");
        out
    }
}

/// A gauge paired with its style; `Display` writes the whole `<svg>` element.
#[derive(Clone, Copy, Debug)]
pub struct SvgDocument<'a> {
    geometry: &'a GaugeGeometry,
    style: &'a GaugeStyle,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.geometry;
        let width = fmt_num(g.width.raw());
        let height = fmt_num(g.canvas_height().raw());
        let aria = g.caption.as_deref().unwrap_or(&g.label);

        writeln!(
            f,
            r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" aria-label="{}">"#,
            escape_attr(aria),
        )?;
        for layer in g.layers(self.style) {
            layer.write_svg(f)?;
            f.write_char('\n')?;
        }
        f.write_str("</svg>\n")
    }
}

/// Format a number with at most three decimals, trailing zeros trimmed.
///
/// Negative zero (e.g. from `-sin(π)` noise) prints as `0`.
pub(crate) fn fmt_num(value: f64) -> String {
    let s = format!("{:.prec$}", value, prec = defaults::DECIMALS);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape text content for an SVG `<text>` element.
pub(crate) fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Escape a double-quoted attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// True if the text contains right-to-left script (Hebrew, Arabic and the
/// other scripts of the U+0590..U+08FF block, plus their presentation forms).
pub(crate) fn is_rtl(s: &str) -> bool {
    s.chars().any(|c| {
        matches!(c,
            '\u{0590}'..='\u{08FF}'
            | '\u{FB1D}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::{Dimensions, render};
    use crate::render::style::ColorBands;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(110.0), "110");
        assert_eq!(fmt_num(58.5), "58.5");
        assert_eq!(fmt_num(323.58404338), "323.584");
        assert_eq!(fmt_num(0.0004), "0");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(-12.25), "-12.25");
    }

    #[test]
    fn escape_text_keeps_utf8() {
        assert_eq!(escape_text("a & b < c > d"), "a &amp; b &lt; c &gt; d");
        assert_eq!(escape_text("نسبة الضمان"), "نسبة الضمان");
    }

    #[test]
    fn escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn rtl_detection() {
        assert!(is_rtl("الأجهزة الطبية"));
        assert!(is_rtl("Assets: الأجهزة"));
        assert!(is_rtl("שלום"));
        assert!(is_rtl("ܫܠܡܐ"));
        assert!(is_rtl("ދިވެހި"));
        assert!(!is_rtl("Medical assets"));
        assert!(!is_rtl(""));
    }

    #[test]
    fn layers_without_caption() {
        let g = render(20.0, Dimensions::default(), None);
        let layers = g.layers(&GaugeStyle::default());
        assert_eq!(layers.len(), 5);
        assert!(matches!(layers[0], Layer::Track(_)));
        assert!(matches!(layers[1], Layer::Progress(_)));
        assert!(matches!(layers[4], Layer::ValueText(_)));
    }

    #[test]
    fn caption_sits_below_value() {
        let g = render(20.0, Dimensions::default(), Some("Warranty"));
        let layers = g.layers(&GaugeStyle::default());
        let Some(Layer::Caption(caption)) = layers.last() else {
            panic!("expected a caption layer, got {:?}", layers.last());
        };
        assert!(caption.at.y > g.text_anchor.y);
        assert!((caption.font_size.raw() - 13.184).abs() < 1e-9);
        assert!(!caption.rtl);
    }

    #[test]
    fn progress_layer_uses_band_color() {
        let style = GaugeStyle::default().with_bands(ColorBands::default());
        let g = render(95.0, Dimensions::default(), None);
        let layers = g.layers(&style);
        let Layer::Progress(progress) = &layers[1] else {
            panic!("second layer must be the progress arc");
        };
        assert_eq!(progress.stroke, ColorBands::default().critical_color);
        assert_eq!(progress.dash_array, g.arc_length);
        assert_eq!(progress.dash_offset, g.dash_offset);
    }

    #[test]
    fn document_shape() {
        let g = render(50.0, Dimensions::default(), Some("a \"quoted\" <caption>"));
        let svg = g.to_svg(&GaugeStyle::default());
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="220" height="124""#));
        assert!(svg.contains(r#"aria-label="a &quot;quoted&quot; &lt;caption&gt;""#));
        assert!(svg.contains(">a \"quoted\" &lt;caption&gt;</text>"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.lines().count(), 8);
    }

    #[test]
    fn document_streams_into_any_writer() {
        let style = GaugeStyle::default();
        let g = render(12.25, Dimensions::new(160.0, 12.0).unwrap(), Some("Spare parts"));
        let mut streamed = String::new();
        write!(streamed, "{}", g.document(&style)).unwrap();
        assert_eq!(streamed, g.to_svg(&style));
        assert!(streamed.contains(">12.3%</text>"));
    }
}
