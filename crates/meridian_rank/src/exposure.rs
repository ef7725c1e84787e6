//! Apparent magnitude and the suggested exposure derived from it.

use std::fmt;

use serde::Serialize;

/// Magnitude embedded in a source name such as `"HR 4.52 Vega"`.
///
/// The name is split on whitespace; when it has more than two tokens and the
/// second one is a finite number, that number is the magnitude.
pub fn magnitude_from_name(name: &str) -> Option<f64> {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.len() <= 2 {
        return None;
    }
    tokens[1].parse::<f64>().ok().filter(|m| m.is_finite())
}

/// Suggested exposure for a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureHint {
    Seconds(f64),
    /// No magnitude to base a suggestion on.
    Unavailable,
}

impl ExposureHint {
    pub fn seconds(&self) -> Option<f64> {
        match *self {
            ExposureHint::Seconds(s) => Some(s),
            ExposureHint::Unavailable => None,
        }
    }
}

impl fmt::Display for ExposureHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposureHint::Seconds(s) => write!(f, "{s:.1}"),
            ExposureHint::Unavailable => f.write_str("-"),
        }
    }
}

/// Step function from magnitude to exposure. Fainter targets get longer.
pub fn exposure_for(magnitude: Option<f64>) -> ExposureHint {
    match magnitude {
        None => ExposureHint::Unavailable,
        Some(m) if m > 4.0 => ExposureHint::Seconds(2.0),
        Some(m) if m > 3.0 => ExposureHint::Seconds(1.5),
        Some(m) if m > 2.0 => ExposureHint::Seconds(1.0),
        Some(_) => ExposureHint::Seconds(0.5),
    }
}
