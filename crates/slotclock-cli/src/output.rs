//! Output formatting utilities.
//!
//! Plain `label: value` lines for people, one JSON object for scripts.

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use colored::Colorize;
use serde::Serialize;
use slotclock_core::SlotTime;
use slotclock_types::{Network, Slot, SlotQuery, UnixTimestamp};
use std::io::Write;

/// Largest representable date, in seconds (same bound as ECMAScript dates).
const MAX_DATE_SECS: f64 = 8.64e12;

/// Output format.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable result.
#[derive(Debug, Serialize)]
pub struct SlotReport {
    pub mode: &'static str,
    pub slot: Slot,
    pub network: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<UnixTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_slot: Option<Slot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_timestamp: Option<UnixTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_difference: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_slot_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<usize>,
}

impl SlotReport {
    pub fn new(query: &SlotQuery, result: &SlotTime) -> Self {
        let mut report = SlotReport {
            mode: "not_found",
            slot: result.slot(),
            network: query.network,
            timestamp: None,
            estimated_timestamp: None,
            date_utc: result.timestamp().and_then(format_rfc3339),
            current_slot: None,
            current_timestamp: None,
            slot_difference: None,
            avg_slot_time: None,
            sample_count: None,
        };

        match result {
            SlotTime::Exact { timestamp, .. } => {
                report.mode = "exact";
                report.timestamp = Some(*timestamp);
            }
            SlotTime::Estimated {
                current_slot,
                current_timestamp,
                slot_difference,
                estimated_timestamp,
                avg_slot_time,
                sample_count,
                ..
            } => {
                report.mode = "estimated";
                report.estimated_timestamp = Some(*estimated_timestamp);
                report.current_slot = Some(*current_slot);
                report.current_timestamp = Some(*current_timestamp);
                report.slot_difference = Some(*slot_difference);
                report.avg_slot_time = Some(*avg_slot_time);
                report.sample_count = Some(*sample_count);
            }
            SlotTime::NotFound { .. } => {}
        }

        report
    }
}

/// Format a Unix timestamp as a local date and time,
/// e.g. `Tue Nov 14 2023 22:13:20 GMT+0000`.
pub fn format_date(secs: f64) -> String {
    to_millis(secs)
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// Format a Unix timestamp as RFC 3339 in UTC.
pub fn format_rfc3339(secs: f64) -> Option<String> {
    let ms = to_millis(secs)?;
    let dt: DateTime<Utc> = Utc.timestamp_millis_opt(ms).single()?;
    Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Format a timestamp without a trailing `.0` for whole seconds.
pub fn format_timestamp(secs: f64) -> String {
    format!("{}", secs)
}

fn to_millis(secs: f64) -> Option<i64> {
    if !secs.is_finite() || secs.abs() > MAX_DATE_SECS {
        return None;
    }
    Some((secs * 1000.0).round() as i64)
}

/// Labelled lines for the text output. Empty for [`SlotTime::NotFound`].
pub fn text_fields(result: &SlotTime) -> Vec<(&'static str, String)> {
    match result {
        SlotTime::Exact { slot, timestamp } => vec![
            ("slot", slot.to_string()),
            ("timestamp", timestamp.to_string()),
            ("date and time", format_date(*timestamp as f64)),
        ],
        SlotTime::Estimated {
            slot,
            estimated_timestamp,
            avg_slot_time,
            ..
        } => vec![
            ("slot", slot.to_string()),
            ("estimated timestamp", format_timestamp(*estimated_timestamp)),
            ("estimated date and time", format_date(*estimated_timestamp)),
            ("avg slot time", format!("{:.4} seconds", avg_slot_time)),
        ],
        SlotTime::NotFound { .. } => Vec::new(),
    }
}

/// Write a result in the requested format.
pub fn write_slot_time<W: Write>(
    out: &mut W,
    query: &SlotQuery,
    result: &SlotTime,
    format: OutputFormat,
    color: bool,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            for (label, value) in text_fields(result) {
                if color {
                    writeln!(out, "{} {}", format!("{}:", label).bold(), value.bright_cyan())?;
                } else {
                    writeln!(out, "{}: {}", label, value)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &SlotReport::new(query, result))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Message for a past slot without a block time.
pub fn not_found_message(slot: Slot) -> String {
    format!("block time not found for slot {}.", slot)
}

/// Print error message.
pub fn print_error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{}", msg.yellow());
}
