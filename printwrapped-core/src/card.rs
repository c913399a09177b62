//! SVG card renderer.
//!
//! Builds the "year in review" card as an SVG string. This is a pure
//! function with no I/O -- it returns a `String` the host serves as
//! `image/svg+xml`.
//!
//! When the embedded font loaded, an `@font-face` block carries it
//! into the document as a data URI so the card looks the same wherever
//! it is viewed; otherwise the viewer's sans-serif fallback applies.

use std::fmt::Write;

use crate::summary::YearSummary;

/// Card canvas size in SVG user units.
const CARD_WIDTH: u32 = 600;
const CARD_HEIGHT: u32 = 800;

const COLOR_BACKGROUND: &str = "#141b2d";
const COLOR_ACCENT: &str = "#7bd88f";
const COLOR_LABEL: &str = "#8a93a6";
const COLOR_VALUE: &str = "#f5f7fa";

/// Escape the five XML special characters for safe embedding in
/// element text content and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the year card for `summary`.
///
/// `font_data_uri` is the embedded card font as a `data:` URI, or
/// `None` to fall back to system fonts.
pub fn render_card(summary: &YearSummary, font_data_uri: Option<&str>) -> String {
    let mut out = String::with_capacity(4096);

    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        CARD_WIDTH, CARD_HEIGHT, CARD_WIDTH, CARD_HEIGHT,
    );

    // The base64 payload stays within the data-URI safe alphabet, so
    // no escaping is needed inside the url() literal.
    if let Some(uri) = font_data_uri {
        let _ = writeln!(out, "  <style>");
        let _ = writeln!(out, "    @font-face {{");
        let _ = writeln!(out, "      font-family: 'Open Sans';");
        let _ = writeln!(out, "      font-weight: 700;");
        let _ = writeln!(out, "      src: url({}) format('woff');", uri);
        let _ = writeln!(out, "    }}");
        let _ = writeln!(out, "  </style>");
    }

    let _ = writeln!(
        out,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        CARD_WIDTH, CARD_HEIGHT, COLOR_BACKGROUND,
    );

    let font_family = "'Open Sans', sans-serif";

    // Header
    let _ = writeln!(
        out,
        r#"  <text x="48" y="96" font-family="{}" font-weight="700" font-size="28" fill="{}">Your year in print</text>"#,
        font_family, COLOR_LABEL,
    );
    let _ = writeln!(
        out,
        r#"  <text x="48" y="176" font-family="{}" font-weight="700" font-size="72" fill="{}">{}</text>"#,
        font_family,
        COLOR_ACCENT,
        xml_escape(&summary.year.to_string()),
    );

    // Stat rows
    let rows = [
        ("Prints completed", summary.prints_completed.to_string()),
        ("Total print time", summary.total_print_duration.clone()),
        ("Longest print", summary.longest_print.clone()),
        ("Busiest weekday", summary.busiest_weekday.clone()),
        ("Files uploaded", summary.files_uploaded.to_string()),
        ("Versions used", summary.octoprint_versions.to_string()),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let y = 270 + (i as u32) * 88;
        let _ = writeln!(
            out,
            r#"  <text x="48" y="{}" font-family="{}" font-weight="700" font-size="18" fill="{}">{}</text>"#,
            y,
            font_family,
            COLOR_LABEL,
            xml_escape(label),
        );
        let _ = writeln!(
            out,
            r#"  <text x="48" y="{}" font-family="{}" font-weight="700" font-size="36" fill="{}">{}</text>"#,
            y + 42,
            font_family,
            COLOR_VALUE,
            xml_escape(value),
        );
    }

    let _ = writeln!(out, "</svg>");

    out
}
