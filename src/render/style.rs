//! Paint settings for the SVG gauge

use crate::errors::GaugeError;
use crate::types::{Color, Percent};

/// How the ends of the track and progress strokes are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

/// Switch the progress colour once the value crosses a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBands {
    pub warn: Percent,
    pub critical: Percent,
    pub warn_color: Color,
    pub critical_color: Color,
}

impl Default for ColorBands {
    fn default() -> Self {
        Self {
            warn: Percent::new(70.0),
            critical: Percent::new(90.0),
            warn_color: Color::rgb(245, 158, 11),
            critical_color: Color::rgb(239, 68, 68),
        }
    }
}

impl ColorBands {
    pub fn new(warn: impl Into<Percent>, critical: impl Into<Percent>) -> Self {
        Self {
            warn: warn.into(),
            critical: critical.into(),
            ..Self::default()
        }
    }

    /// The band colour for `value`, or `None` below the warning threshold.
    pub fn color_for(&self, value: Percent) -> Option<&Color> {
        if value >= self.critical {
            Some(&self.critical_color)
        } else if value >= self.warn {
            Some(&self.warn_color)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeStyle {
    pub track: Color,
    pub progress: Color,
    pub needle: Color,
    pub text: Color,
    pub caption: Color,
    pub line_cap: LineCap,
    pub bands: Option<ColorBands>,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            track: Color::rgb(229, 231, 235),
            progress: Color::rgb(16, 185, 129),
            needle: Color::rgb(55, 65, 81),
            text: Color::rgb(17, 24, 39),
            caption: Color::rgb(107, 114, 128),
            line_cap: LineCap::Butt,
            bands: None,
        }
    }
}

impl GaugeStyle {
    pub fn with_progress_color(mut self, color: &str) -> Result<Self, GaugeError> {
        self.progress = color.parse()?;
        Ok(self)
    }

    pub fn with_track_color(mut self, color: &str) -> Result<Self, GaugeError> {
        self.track = color.parse()?;
        Ok(self)
    }

    pub fn with_needle_color(mut self, color: &str) -> Result<Self, GaugeError> {
        self.needle = color.parse()?;
        Ok(self)
    }

    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    pub fn with_bands(mut self, bands: ColorBands) -> Self {
        self.bands = Some(bands);
        self
    }

    /// Progress stroke colour after threshold bands are applied.
    pub fn progress_color(&self, value: Percent) -> &Color {
        self.bands
            .as_ref()
            .and_then(|bands| bands.color_for(value))
            .unwrap_or(&self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_progress_color_without_bands() {
        let style = GaugeStyle::default();
        assert_eq!(style.progress_color(Percent::MAX), &Color::rgb(16, 185, 129));
    }

    #[test]
    fn bands_switch_colors() {
        let style = GaugeStyle::default().with_bands(ColorBands::new(50.0, 80.0));
        assert_eq!(style.progress_color(Percent::new(49.9)), &style.progress);
        assert_eq!(style.progress_color(Percent::new(50.0)), &Color::rgb(245, 158, 11));
        assert_eq!(style.progress_color(Percent::new(80.0)), &Color::rgb(239, 68, 68));
        assert_eq!(style.progress_color(Percent::new(300.0)), &Color::rgb(239, 68, 68));
    }

    #[test]
    fn colour_setters_parse() {
        let style = GaugeStyle::default()
            .with_progress_color("#3b82f6")
            .unwrap()
            .with_track_color("lightgray")
            .unwrap()
            .with_needle_color("rgb(0, 0, 0)")
            .unwrap();
        assert_eq!(style.progress, Color::rgb(0x3b, 0x82, 0xf6));
        assert_eq!(style.track, Color::rgb(211, 211, 211));
        assert_eq!(style.needle, Color::rgb(0, 0, 0));
    }

    #[test]
    fn bad_colour_is_an_error() {
        let err = GaugeStyle::default().with_progress_color("#12").unwrap_err();
        assert_eq!(
            err,
            GaugeError::InvalidColor {
                value: "#12".to_string()
            }
        );
    }

    #[test]
    fn line_cap_names() {
        assert_eq!(LineCap::default().as_str(), "butt");
        assert_eq!(LineCap::Round.as_str(), "round");
    }
}
