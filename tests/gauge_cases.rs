//! Data-driven gauge cases.
//!
//! Each `tests/cases/*.gauge` file holds `key = value` inputs, a `---`
//! separator, then the expected geometry. Only the keys present are checked.

use arcgauge::{Dimensions, GaugeGeometry, GaugeInput, Percent, render};
use datatest_stable::Utf8Path;
use miette::Diagnostic;
use std::collections::HashMap;

/// Expected values are written with three decimals
const FLOAT_TOLERANCE: f64 = 1e-3;

type Fields = HashMap<String, String>;

fn parse_fields(section: &str) -> Fields {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

fn parse_percent(fields: &Fields) -> Percent {
    if let Some(text) = fields.get("percentage_text") {
        return Percent::parse_lossy(text);
    }
    match fields.get("percentage").map(String::as_str) {
        None | Some("none") => Percent::from(None::<f64>),
        Some(raw) => Percent::from(raw.parse::<f64>().expect("percentage must be a number")),
    }
}

fn number(fields: &Fields, key: &str, default: f64) -> f64 {
    fields
        .get(key)
        .map(|v| v.parse().unwrap_or_else(|_| panic!("{key} must be a number")))
        .unwrap_or(default)
}

fn pair(value: &str) -> (f64, f64) {
    let mut parts = value.split_whitespace().map(|p| p.parse::<f64>().expect("number"));
    (parts.next().expect("x"), parts.next().expect("y"))
}

fn check_close(key: &str, expected: f64, actual: f64) -> Result<(), String> {
    if (expected - actual).abs() <= FLOAT_TOLERANCE {
        Ok(())
    } else {
        Err(format!("{key}: expected {expected}, got {actual}"))
    }
}

fn check_geometry(g: &GaugeGeometry, expected: &Fields) -> Result<(), String> {
    for (key, value) in expected {
        match key.as_str() {
            "clamped" => check_close(key, value.parse().unwrap(), g.clamped_percentage())?,
            "radius" => check_close(key, value.parse().unwrap(), g.radius.raw())?,
            "arc_length" => check_close(key, value.parse().unwrap(), g.arc_length.raw())?,
            "dash_offset" => check_close(key, value.parse().unwrap(), g.dash_offset.raw())?,
            "angle" => check_close(key, value.parse().unwrap(), g.angle.raw())?,
            "font_size" => check_close(key, value.parse().unwrap(), g.font_size.raw())?,
            "tip" => {
                let (x, y) = pair(value);
                check_close("tip.x", x, g.needle_tip.x)?;
                check_close("tip.y", y, g.needle_tip.y)?;
            }
            "text_anchor" => {
                let (x, y) = pair(value);
                check_close("text_anchor.x", x, g.text_anchor.x)?;
                check_close("text_anchor.y", y, g.text_anchor.y)?;
            }
            "label" if &g.label != value => {
                return Err(format!("label: expected {value:?}, got {:?}", g.label));
            }
            "caption" if g.caption.as_deref() != Some(value.as_str()) => {
                return Err(format!("caption: expected {value:?}, got {:?}", g.caption));
            }
            "path" if &g.arc_path.to_string() != value => {
                return Err(format!("path: expected {value:?}, got {:?}", g.arc_path.to_string()));
            }
            "label" | "caption" | "path" => {}
            "error" => return Err(format!("expected error {value}, but rendering succeeded")),
            other => return Err(format!("unknown expectation key {other:?}")),
        }
    }
    Ok(())
}

fn test_gauge_case(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let (input, expected) = source
        .split_once("\n---\n")
        .ok_or_else(|| format!("{path}: missing --- separator"))?;
    let input = parse_fields(input);
    let expected = parse_fields(expected);

    let mut gauge = GaugeInput::new(parse_percent(&input))
        .size(number(&input, "size", 220.0))
        .stroke_width(number(&input, "stroke_width", 14.0));
    gauge.set_label(input.get("caption").cloned());

    match gauge.render() {
        Ok(geometry) => {
            check_geometry(&geometry, &expected).map_err(|e| format!("{path}: {e}"))?;

            // The total entry point agrees with the validating builder.
            let dims = Dimensions::new(geometry.width.raw(), geometry.stroke_width.raw())?;
            let again = render(geometry.clamped, dims, geometry.caption.as_deref());
            if again != geometry {
                return Err(format!("{path}: render and GaugeInput::render disagree").into());
            }
        }
        Err(err) => {
            let code = err.code().map(|c| c.to_string()).unwrap_or_default();
            match expected.get("error") {
                Some(want) if *want == code => {}
                Some(want) => {
                    return Err(format!("{path}: expected error {want}, got {code} ({err})").into());
                }
                None => return Err(format!("{path}: unexpected error: {err}").into()),
            }
        }
    }

    Ok(())
}

datatest_stable::harness! {
    { test = test_gauge_case, root = "tests/cases", pattern = r"\.gauge$" },
}
