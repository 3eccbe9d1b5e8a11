use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;

use crate::types::Report;

/// One `"<version>, <mean_seconds>\n"` line per version, sorted by version string.
///
/// The mean uses `f64`'s `Debug` rendering so whole seconds keep their
/// fractional part (`1.0`, not `1`).
pub fn format_plain(report: &Report) -> String {
    let mut out = String::new();
    for (version, timing) in &report.results {
        out.push_str(&format!("{}, {:?}\n", version, timing.mean));
    }
    out
}

fn style_version() -> Style {
    Style::new().cyan().bold()
}

/// Aligned, colored table for reading in a terminal.
pub fn format_table(report: &Report) -> String {
    let mut out = String::new();

    let header = format!(
        "{} ({} trials per version):",
        report.package, report.trials
    );
    out.push_str(
        &header
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string(),
    );
    out.push_str("\n\n");

    let version_width = report
        .results
        .keys()
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0);
    let version_style = style_version();

    for (version, timing) in &report.results {
        // Version: left-aligned padded, cyan bold
        let version_padded = format!("{:<width$}", version, width = version_width);
        let version_colored = version_padded
            .if_supports_color(Stream::Stdout, |s| s.style(version_style))
            .to_string();

        // Mean: right-aligned, yellow
        let mean_padded = format!("{:>10.3}s", timing.mean);
        let mean_colored = mean_padded
            .if_supports_color(Stream::Stdout, |s| s.yellow())
            .to_string();

        out.push_str(&format!("  {}  {}\n", version_colored, mean_colored));
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    package: &'a str,
    started_at: String,
    trials: usize,
    results: Vec<JsonVersion<'a>>,
}

#[derive(Serialize)]
struct JsonVersion<'a> {
    version: &'a str,
    mean_seconds: f64,
    samples: &'a [f64],
}

pub fn format_json(report: &Report, started_at: DateTime<Utc>) -> String {
    let json = JsonReport {
        package: &report.package,
        started_at: started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        trials: report.trials,
        results: report
            .results
            .iter()
            .map(|(version, timing)| JsonVersion {
                version,
                mean_seconds: timing.mean,
                samples: &timing.samples,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
}
