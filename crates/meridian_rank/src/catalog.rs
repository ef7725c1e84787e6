//! Tab-separated catalog rows as returned by the source database query.
//!
//! Each line is `name<TAB>ra<TAB>dec<TAB>epoch`. The first line is a header.
//! Dec is always in radians; RA is converted to radians according to
//! [`RaUnit`] before anything else touches it.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Epoch assumed when a row leaves the epoch column empty.
pub const DEFAULT_EPOCH: f64 = 2000.0;

/// Unit of the RA column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RaUnit {
    #[default]
    Radians,
    Hours,
    Degrees,
}

impl RaUnit {
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            RaUnit::Radians => value,
            RaUnit::Hours => value * PI / 12.0,
            RaUnit::Degrees => value.to_radians(),
        }
    }
}

impl FromStr for RaUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "radians" | "rad" => Ok(RaUnit::Radians),
            "hours" | "h" => Ok(RaUnit::Hours),
            "degrees" | "deg" => Ok(RaUnit::Degrees),
            other => Err(format!("unknown RA unit: {other}")),
        }
    }
}

impl fmt::Display for RaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RaUnit::Radians => "radians",
            RaUnit::Hours => "hours",
            RaUnit::Degrees => "degrees",
        })
    }
}

/// One parsed catalog entry, RA already in radians.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub name: String,
    pub ra_rad: f64,
    pub dec_rad: f64,
    /// Julian epoch of the coordinates, e.g. 2000.0.
    pub epoch: f64,
    /// 1-based line number in the source text.
    pub line: usize,
}

/// Rows that parsed plus the lines that didn't.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCatalog {
    pub rows: Vec<CatalogRow>,
    pub issues: Vec<RankError>,
}

/// Parse query output. The header line is skipped, blank lines are ignored,
/// and malformed lines become [`RankError::MalformedRow`] issues.
pub fn parse_catalog(text: &str, unit: RaUnit) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();
    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match parse_row(raw, line, unit) {
            Ok(row) => parsed.rows.push(row),
            Err(reason) => parsed.issues.push(RankError::MalformedRow { line, reason }),
        }
    }
    parsed
}

fn parse_row(raw: &str, line: usize, unit: RaUnit) -> Result<CatalogRow, String> {
    let mut fields = raw.split('\t');
    let name = fields.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err("missing source name".into());
    }
    let ra = parse_number(fields.next(), "ra")?;
    let dec = parse_number(fields.next(), "dec")?;
    let epoch = match fields.next().map(str::trim) {
        None | Some("") => DEFAULT_EPOCH,
        Some(text) => parse_epoch(text)?,
    };
    Ok(CatalogRow {
        name: name.to_string(),
        ra_rad: unit.to_radians(ra),
        dec_rad: dec,
        epoch,
        line,
    })
}

fn parse_number(field: Option<&str>, what: &str) -> Result<f64, String> {
    let text = field.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(format!("missing {what} column"));
    }
    text.parse::<f64>()
        .map_err(|_| format!("{what} is not a number: {text:?}"))
}

/// Accepts `2000`, `2000.0` and `J2000`.
fn parse_epoch(text: &str) -> Result<f64, String> {
    let digits = text.strip_prefix(['J', 'j']).unwrap_or(text);
    match digits.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("epoch is not a year: {text:?}")),
    }
}
