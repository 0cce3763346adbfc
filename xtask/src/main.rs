use arcgauge::{ColorBands, Dimensions, GaugeGeometry, GaugeStyle, LineCap, render};
use camino::Utf8PathBuf;
use rayon::prelude::*;
use std::fs;

/// (percentage, size, stroke width, caption)
const SAMPLES: &[(f64, f64, f64, Option<&str>)] = &[
    (0.0, 220.0, 14.0, Some("No warranty data")),
    (12.5, 220.0, 14.0, Some("الأجهزة تحت الضمان")),
    (33.456, 220.0, 14.0, None),
    (50.0, 220.0, 14.0, Some("Spare parts in stock")),
    (71.0, 160.0, 12.0, Some("أوامر الشراء المعتمدة")),
    (92.3, 160.0, 12.0, None),
    (100.0, 120.0, 10.0, Some("Complete")),
    (150.0, 120.0, 10.0, Some("Clamped from 150")),
    (f64::NAN, 120.0, 10.0, Some("NaN input")),
];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [OUTPUT]    Render sample gauges into an HTML page");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => {
            let output = args
                .get(2)
                .map(|p| Utf8PathBuf::from(p.clone()))
                .unwrap_or_else(|| Utf8PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../gallery.html")));
            gallery(&output);
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn gallery(output_path: &Utf8PathBuf) {
    let flat = GaugeStyle::default();
    let banded = GaugeStyle::default()
        .with_bands(ColorBands::default())
        .with_line_cap(LineCap::Round);

    // Rendering is pure, so samples go through the pool in any order.
    let cards: Vec<String> = SAMPLES
        .par_iter()
        .map(|&(percentage, size, stroke_width, caption)| {
            let title = format!("{} @ {}/{}", percentage, size, stroke_width);
            match Dimensions::new(size, stroke_width) {
                Ok(dims) => {
                    let geometry = render(percentage, dims, caption);
                    card(&title, &geometry, &flat, &banded)
                }
                Err(e) => format!(
                    r#"<div class="card"><div class="title">{}</div><div class="error">{}</div></div>"#,
                    html_escape(&title),
                    html_escape(&e.to_string())
                ),
            }
        })
        .collect();

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>arcgauge gallery</title>
    <style>
        body {
            font-family: system-ui, sans-serif;
            margin: 0;
            padding: 24px;
            background: #eee;
            color: #333;
        }
        h1 {
            font-weight: 600;
            font-size: 20px;
            margin: 0 0 24px 0;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(520px, 1fr));
            gap: 16px;
        }
        .card {
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            padding: 12px 16px;
        }
        .title {
            font-family: ui-monospace, monospace;
            font-size: 13px;
            margin-bottom: 8px;
        }
        .pair {
            display: flex;
            gap: 16px;
            align-items: flex-end;
        }
        .error {
            color: #b91c1c;
        }
        dl {
            font-size: 12px;
            display: grid;
            grid-template-columns: auto 1fr;
            gap: 2px 12px;
        }
        dt { color: #666; }
        dd { margin: 0; font-family: ui-monospace, monospace; }
    </style>
</head>
<body>
<h1>arcgauge gallery</h1>
<div class="grid">
"#,
    );
    for card in &cards {
        html.push_str(card);
        html.push('\n');
    }
    html.push_str("</div>\n</body></html>\n");

    fs::write(output_path, html).expect("Failed to write gallery");
    println!("Generated gallery at: {}", output_path);
}

fn card(title: &str, geometry: &GaugeGeometry, flat: &GaugeStyle, banded: &GaugeStyle) -> String {
    format!(
        r#"<div class="card">
    <div class="title">{}</div>
    <div class="pair">{}{}</div>
    <dl>
        <dt>clamped</dt><dd>{}</dd>
        <dt>arc length</dt><dd>{:.3}</dd>
        <dt>dash offset</dt><dd>{:.3}</dd>
        <dt>angle</dt><dd>{:.4}</dd>
        <dt>path</dt><dd>{}</dd>
    </dl>
</div>"#,
        html_escape(title),
        geometry.to_svg(flat),
        geometry.to_svg(banded),
        geometry.label,
        geometry.arc_length.raw(),
        geometry.dash_offset.raw(),
        geometry.angle.raw(),
        geometry.arc_path,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
