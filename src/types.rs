//! Strongly-typed numeric primitives for arcgauge (zero-cost newtypes).
//!
//! - No raw `f64` crosses the public geometry API without a unit
//! - Percentages are clamped on construction, never later
//! - Sizes are validated once, at the `Dimensions` boundary

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
    /// Value is finite but derived lengths would overflow
    TooLarge,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::TooLarge => write!(f, "value is too large"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in SVG user units (pixels)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a length (const-friendly, unchecked).
    /// Use `try_positive` for user-provided values.
    #[inline]
    pub(crate) const fn px(val: f64) -> Px {
        Px(val)
    }

    /// Create a strictly positive, finite length
    #[inline]
    pub fn try_positive(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Px(val))
        }
    }

    /// Get the maximum of two lengths
    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px { Px(self.0 + rhs.0) }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px { Px(self.0 - rhs.0) }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px { Px(self.0 * rhs) }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px { Px(self.0 / rhs) }
}
impl Neg for Px {
    type Output = Px;
    fn neg(self) -> Px { Px(-self.0) }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unitless fraction (progress through the arc, 0..=1)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0.0);
    pub const ONE: Scalar = Scalar(1.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// `1 - self`
    #[inline]
    pub fn complement(self) -> Scalar {
        Scalar(1.0 - self.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length * Scalar = Length (scaling a length)
impl Mul<Scalar> for Px {
    type Output = Px;
    fn mul(self, rhs: Scalar) -> Px {
        Px(self.0 * rhs.0)
    }
}

/// Angle in radians, counter-clockwise from the positive x axis (Y-up).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Radians {
    pub const HALF_TURN: Radians = Radians(std::f64::consts::PI);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Unit vector in SVG space (Y-down) pointing along this angle.
    #[inline]
    pub fn svg_direction(self) -> glam::DVec2 {
        glam::dvec2(self.0.cos(), -self.0.sin())
    }
}

impl Mul<Scalar> for Radians {
    type Output = Radians;
    fn mul(self, rhs: Scalar) -> Radians {
        Radians(self.0 * rhs.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

/// A percentage already forced into `[0, 100]`.
///
/// Construction never fails: NaN and missing values become 0, everything
/// else saturates at the bounds. Negative zero is stored as `+0` so the
/// formatted label never reads `-0.0%`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Percent(f64);

impl Percent {
    pub const MIN: Percent = Percent(0.0);
    pub const MAX: Percent = Percent(100.0);

    /// Normalise an arbitrary float into `[0, 100]`.
    pub fn new(value: f64) -> Percent {
        if value.is_nan() {
            crate::log::warn!("percentage is NaN, reading it as 0");
            return Percent::MIN;
        }
        let clamped = value.clamp(0.0, 100.0);
        if clamped != value {
            crate::log::debug!(value, clamped, "percentage clamped");
        }
        if clamped == 0.0 {
            Percent::MIN
        } else {
            Percent(clamped)
        }
    }

    /// `part / whole` as a percentage; an empty whole reads as 0%.
    pub fn from_ratio(part: f64, whole: f64) -> Percent {
        if whole == 0.0 || !whole.is_finite() {
            return Percent::MIN;
        }
        Percent::new(part / whole * 100.0)
    }

    /// Parse text leniently. Surrounding whitespace and one trailing `%` are
    /// accepted; anything unparseable is 0.
    pub fn parse_lossy(text: &str) -> Percent {
        let trimmed = text.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        number.parse::<f64>().map(Percent::new).unwrap_or(Percent::MIN)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Progress through the arc, `0..=1`.
    #[inline]
    pub fn fraction(self) -> Scalar {
        Scalar(self.0 / 100.0)
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Percent::new(value)
    }
}

impl From<f32> for Percent {
    fn from(value: f32) -> Self {
        Percent::new(f64::from(value))
    }
}

impl From<Option<f64>> for Percent {
    fn from(value: Option<f64>) -> Self {
        value.map(Percent::new).unwrap_or(Percent::MIN)
    }
}

/// One decimal place and a percent sign, e.g. `33.5%`.
///
/// Exact ties round up (`12.25` reads `12.3%`), unlike `{:.1}` which
/// rounds them to even.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", round_half_up_tenths(self.0) / 10.0)
    }
}

/// Nearest whole number of tenths, ties going up. Only for `[0, 100]`.
fn round_half_up_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    // `scaled` can land on .5 through rounding of the product alone; the
    // fused remainder tells a real tie from one that sits just below it.
    if scaled.fract() == 0.5 && value.mul_add(10.0, -scaled) < 0.0 {
        scaled.floor()
    } else {
        scaled.round()
    }
}

/// Colour model for gauge strokes and text.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
    /// `none` (no paint)
    None,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::Rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::None => write!(f, "none"),
        }
    }
}

/// Error for colour strings that are not `#rgb`, `#rrggbb`, `rgb(r,g,b)`
/// or a known name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised colour `{}`", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let err = || ParseColorError(trimmed.to_string());

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err);
        }
        if let Some(args) = lower.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if let [r, g, b] = parts.as_slice() {
                let channel = |c: &str| c.parse::<u8>().ok();
                return match (channel(r), channel(g), channel(b)) {
                    (Some(r), Some(g), Some(b)) => Ok(Color::Rgb(r, g, b)),
                    _ => Err(err()),
                };
            }
            return Err(err());
        }

        let named = match lower.as_str() {
            "none" | "transparent" => Color::None,
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 128, 0),
            "blue" => Color::rgb(0, 0, 255),
            "orange" => Color::rgb(255, 165, 0),
            "yellow" => Color::rgb(255, 255, 0),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
            _ => return Err(err()),
        };
        Ok(named)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::Rgb(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}
