// SPDX-License-Identifier: MIT OR Apache-2.0
//! sidelight CLI binary - compare two JSON documents side by side

use clap::Parser;
use serde_json::Value;
use sidelight_cli::sanitize::{SanitizeOptions, sanitize};
use sidelight_core::{CompareError, Side};
use sidelight_diff::{DiffReport, analyze};
use sidelight_render::render;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Compare two JSON documents and render both with diff highlights
#[derive(Parser)]
#[command(name = "sidelight")]
#[command(version, about, long_about = None)]
struct Args {
    /// First JSON document (left side)
    #[arg(value_name = "LEFT")]
    left: PathBuf,

    /// Second JSON document (right side)
    #[arg(value_name = "RIGHT")]
    right: PathBuf,

    /// Which rendering to emit: left, right, or both
    #[arg(short = 's', long = "side", default_value = "both")]
    side: String,

    /// Print only the change summary, no renderings
    #[arg(long = "summary-only")]
    summary_only: bool,

    /// Emit the full diff report as JSON instead of markup
    #[arg(long = "json")]
    json: bool,

    /// Run the sanitation pass (drop nulls, strip .000 time fractions)
    /// before comparing
    #[arg(long = "sanitize")]
    sanitize: bool,

    /// Drop this field everywhere before comparing (repeatable; implies
    /// --sanitize)
    #[arg(long = "ignore-field", value_name = "FIELD")]
    ignore_fields: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let sides = parse_sides(&args.side)?;

    let mut left = load_value(&args.left, Side::Left)?;
    let mut right = load_value(&args.right, Side::Right)?;

    if args.sanitize || !args.ignore_fields.is_empty() {
        let options = SanitizeOptions {
            ignored_fields: args.ignore_fields.clone(),
            ..SanitizeOptions::default()
        };
        left = sanitize(&left, &options).unwrap_or(Value::Null);
        right = sanitize(&right, &options).unwrap_or(Value::Null);
    }

    let report = analyze(&left, &right);

    let output = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        format_report(&report, &left, &right, &sides, args.summary_only)
    };
    write_output(&output, args.output.as_ref())?;

    Ok(report.is_match)
}

fn parse_sides(side: &str) -> Result<Vec<Side>, Box<dyn std::error::Error>> {
    match side {
        "left" => Ok(vec![Side::Left]),
        "right" => Ok(vec![Side::Right]),
        "both" => Ok(vec![Side::Left, Side::Right]),
        other => Err(format!("Invalid side: {other}. Use: left, right, or both").into()),
    }
}

fn load_value(path: &PathBuf, side: Side) -> Result<Value, CompareError> {
    let text = fs::read_to_string(path).map_err(|source| CompareError::Io { side, source })?;
    serde_json::from_str(&text).map_err(|source| CompareError::Parse { side, source })
}

fn format_report(
    report: &DiffReport,
    left: &Value,
    right: &Value,
    sides: &[Side],
    summary_only: bool,
) -> String {
    let mut out = String::new();

    if report.is_match {
        out.push_str("documents match\n");
    } else {
        let summary = report.changes.summary();
        out.push_str(&format!(
            "{} changed, {} added, {} removed\n",
            summary.changed, summary.added, summary.removed
        ));
    }

    if !summary_only {
        for side in sides {
            let value = match side {
                Side::Left => left,
                Side::Right => right,
            };
            out.push_str(&format!("--- {side} ---\n"));
            out.push_str(&render(value, &report.changes, *side));
            out.push('\n');
        }
    }

    out
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(p) = path {
        fs::write(p, output)?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(output.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sides() {
        assert_eq!(parse_sides("left").unwrap(), vec![Side::Left]);
        assert_eq!(parse_sides("right").unwrap(), vec![Side::Right]);
        assert_eq!(parse_sides("both").unwrap(), vec![Side::Left, Side::Right]);
        assert!(parse_sides("middle").is_err());
    }

    #[test]
    fn test_format_report_match() {
        let report = DiffReport {
            is_match: true,
            ..DiffReport::default()
        };
        let out = format_report(
            &report,
            &Value::Null,
            &Value::Null,
            &[Side::Left],
            true,
        );
        assert_eq!(out, "documents match\n");
    }

    #[test]
    fn test_format_report_counts_and_sections() {
        let left = serde_json::json!({"a": 1});
        let right = serde_json::json!({"a": 2});
        let report = analyze(&left, &right);
        let out = format_report(&report, &left, &right, &[Side::Left, Side::Right], false);
        assert!(out.starts_with("1 changed, 0 added, 0 removed\n"));
        assert!(out.contains("--- left ---\n"));
        assert!(out.contains("--- right ---\n"));
        assert!(out.contains("diff-changed"));
    }
}
