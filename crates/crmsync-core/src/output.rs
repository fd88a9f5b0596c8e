//! Output rendering in table, JSON or CSV form
//!
//! The output mode is always passed in by the caller.

use std::fmt;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::dispatch::DispatchPlan;
use crate::error::Result;
use crate::mapping::MappingDefinition;

/// Output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns for terminals
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma separated values with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

/// Row-oriented data with a fixed header
struct Table {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl Table {
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Csv => self.to_csv(),
            _ => self.to_aligned(),
        }
    }

    fn to_aligned(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        let headers: Vec<String> = self.headers.iter().map(|h| h.to_uppercase()).collect();
        Self::push_aligned(&mut output, &headers, &widths);
        for row in &self.rows {
            Self::push_aligned(&mut output, row, &widths);
        }
        output
    }

    fn push_aligned(output: &mut String, cells: &[String], widths: &[usize]) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');
    }

    fn to_csv(&self) -> String {
        let mut output = String::new();
        let headers: Vec<String> = self.headers.iter().map(|h| (*h).to_string()).collect();
        for row in std::iter::once(&headers).chain(&self.rows) {
            let line: Vec<String> = row.iter().map(|cell| csv_field(cell)).collect();
            output.push_str(&line.join(","));
            output.push_str("\r\n");
        }
        output
    }
}

/// Quote a CSV field when it holds a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn yes_no(flag: bool) -> String {
    (if flag { "yes" } else { "no" }).to_string()
}

/// Render a list of mappings
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_mappings(mappings: &[&MappingDefinition], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(mappings)
            .map(|json| json + "\n")
            .context("Failed to serialize mappings");
    }

    let table = Table {
        headers: &["name", "label", "remote_object", "local_entity", "push", "pull"],
        rows: mappings
            .iter()
            .map(|m| {
                vec![
                    m.name.clone(),
                    m.display_label().to_string(),
                    m.remote_object.clone().unwrap_or_default(),
                    m.local_entity.clone().unwrap_or_default(),
                    yes_no(m.push),
                    yes_no(m.pull),
                ]
            })
            .collect(),
    };

    Ok(table.render(format))
}

/// Render a dispatch plan
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_dispatch(plan: &DispatchPlan<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(plan)
            .map(|json| json + "\n")
            .context("Failed to serialize dispatch plan"),
        OutputFormat::Csv => Ok(dispatch_table(plan).render(format)),
        OutputFormat::Table => {
            let mut output = dispatch_table(plan).render(format);
            output.push_str(&plan.summary());
            output.push('\n');
            Ok(output)
        }
    }
}

fn dispatch_table(plan: &DispatchPlan<'_>) -> Table {
    Table {
        headers: &["mapping", "direction", "remote_object", "local_entity"],
        rows: plan
            .jobs
            .iter()
            .map(|job| {
                vec![
                    job.mapping.to_string(),
                    job.direction.to_string(),
                    job.remote_object.unwrap_or_default().to_string(),
                    job.local_entity.unwrap_or_default().to_string(),
                ]
            })
            .collect(),
    }
}
