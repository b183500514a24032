//! Entry date formatting

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the human-readable date of an entry is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// Indonesian long form (Senin, 19 Oktober 2026)
    #[default]
    Long,
    /// ISO calendar date (2026-10-19)
    Iso,
}

impl DateStyle {
    /// Format a date in this style
    pub fn format(&self, date: NaiveDate) -> String {
        match self {
            DateStyle::Long => format!(
                "{}, {} {} {}",
                weekday_name(date.weekday()),
                date.day(),
                month_name(date.month()),
                date.year()
            ),
            DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(DateStyle::Long),
            "iso" => Ok(DateStyle::Iso),
            _ => Err(format!(
                "Invalid date style: '{}'. Valid date styles are: long, iso",
                s
            )),
        }
    }
}

impl std::fmt::Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Long => write!(f, "long"),
            DateStyle::Iso => write!(f, "iso"),
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Januari",
        "Februari",
        "Maret",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Agustus",
        "September",
        "Oktober",
        "November",
        "Desember",
    ];
    MONTHS[(month as usize).saturating_sub(1) % 12]
}

/// Local calendar date encoded in a millisecond timestamp id
pub fn date_from_id(id: i64) -> Option<NaiveDate> {
    let instant: DateTime<Local> = Local.timestamp_millis_opt(id).single()?;
    Some(instant.date_naive())
}

/// Parse a DD-MM-YYYY command-line date
pub fn parse_cli_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y")
        .map_err(|_| format!("Invalid date format: '{}'", input))
}
