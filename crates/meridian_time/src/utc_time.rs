//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the only way a timestamp enters the model. It parses the
//! observing-log layout `YYYY/MM/DD HH:MM:SS` as well as ISO-8601 variants.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, calendar_to_jd, days_in_month, in_gregorian_gap, jd_to_calendar,
    jd_to_julian_year,
};

/// Julian Date of the Unix epoch (1970-Jan-01 0h UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Construct and range-check every field.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let t = Self::new(year, month, day, hour, minute, second);
        t.validate()?;
        Ok(t)
    }

    /// Current wall-clock time.
    pub fn now() -> Result<Self, TimeError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| TimeError::ClockBeforeEpoch)?;
        Ok(Self::from_jd_utc(
            UNIX_EPOCH_JD + elapsed.as_secs_f64() / SECONDS_PER_DAY,
        ))
    }

    /// Check calendar field ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidTimestamp("month must be 1-12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidTimestamp("day is outside the month"));
        }
        if in_gregorian_gap(self.year, self.month, self.day) {
            return Err(TimeError::InvalidTimestamp(
                "1582-10-05 to 1582-10-14 do not exist (Gregorian reform)",
            ));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidTimestamp("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidTimestamp("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidTimestamp("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Julian Date on the UTC scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Date on the TT scale (UTC + ΔT).
    pub fn to_jd_tt(&self) -> f64 {
        let jd = self.to_jd_utc();
        jd + delta_t_seconds(jd_to_julian_year(jd)) / SECONDS_PER_DAY
    }

    /// Convert a UTC Julian Date back to calendar form, rounded to the microsecond.
    pub fn from_jd_utc(jd: f64) -> Self {
        let mut day_start = (jd + 0.5).floor() - 0.5;
        let mut micros = ((jd - day_start) * SECONDS_PER_DAY * 1e6).round() as u64;
        if micros >= 86_400_000_000 {
            day_start += 1.0;
            micros -= 86_400_000_000;
        }
        let (year, month, day) = jd_to_calendar(day_start);
        let whole = micros / 1_000_000;
        Self {
            year,
            month,
            day: day.round() as u32,
            hour: (whole / 3600) as u32,
            minute: ((whole % 3600) / 60) as u32,
            second: (whole % 60) as f64 + (micros % 1_000_000) as f64 / 1e6,
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts `YYYY/MM/DD HH:MM:SS`, `YYYY-MM-DD HH:MM:SS`,
    /// `YYYY-MM-DDTHH:MM:SSZ`, `HH:MM` without seconds, or a bare date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognised = || TimeError::UnrecognisedFormat(s.to_string());

        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = match trimmed.split_once(|c: char| c == 'T' || c == ' ') {
            Some((d, t)) => (d, t.trim()),
            None => (trimmed, ""),
        };

        let date_parts: Vec<&str> = date.split(['/', '-']).collect();
        if date_parts.len() != 3 {
            return Err(unrecognised());
        }
        let year: i32 = date_parts[0].parse().map_err(|_| unrecognised())?;
        let month: u32 = date_parts[1].parse().map_err(|_| unrecognised())?;
        let day: u32 = date_parts[2].parse().map_err(|_| unrecognised())?;

        let (hour, minute, second) = if time.is_empty() {
            (0, 0, 0.0)
        } else {
            let time_parts: Vec<&str> = time.split(':').collect();
            if !(2..=3).contains(&time_parts.len()) {
                return Err(unrecognised());
            }
            let hour: u32 = time_parts[0].parse().map_err(|_| unrecognised())?;
            let minute: u32 = time_parts[1].parse().map_err(|_| unrecognised())?;
            let second: f64 = match time_parts.get(2) {
                Some(sec) => sec.parse().map_err(|_| unrecognised())?,
                None => 0.0,
            };
            (hour, minute, second)
        };

        Self::try_new(year, month, day, hour, minute, second)
    }
}

impl Display for UtcTime {
    /// Seconds are truncated to the microsecond, so the output never shows
    /// a rounded-up `60` and always parses back.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let micros = ((self.second * 1e6).floor().max(0.0) as u64).min(59_999_999);
        let (whole, frac) = (micros / 1_000_000, micros % 1_000_000);
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, whole
        )?;
        if frac != 0 {
            write!(f, ".{frac:06}")?;
        }
        Ok(())
    }
}

impl From<UtcTime> for String {
    fn from(t: UtcTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for UtcTime {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_observing_log_layout() {
        let t: UtcTime = "2024/03/20 04:30:15".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 3, 20, 4, 30, 15.0));
    }

    #[test]
    fn parses_iso_layout() {
        let t: UtcTime = "2024-03-20T04:30:15.5Z".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 3, 20, 4, 30, 15.5));
    }

    #[test]
    fn parses_date_only_as_midnight() {
        let t: UtcTime = "2024/03/20".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 3, 20, 0, 0, 0.0));
    }

    #[test]
    fn parses_minutes_without_seconds() {
        let t: UtcTime = "2024/03/20 22:05".parse().unwrap();
        assert_eq!(t, UtcTime::new(2024, 3, 20, 22, 5, 0.0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "tomorrow".parse::<UtcTime>(),
            Err(TimeError::UnrecognisedFormat(_))
        ));
        assert!(matches!(
            "2024/03/20 12".parse::<UtcTime>(),
            Err(TimeError::UnrecognisedFormat(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(matches!(
            "2023/02/29 00:00:00".parse::<UtcTime>(),
            Err(TimeError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            "2024/13/01 00:00:00".parse::<UtcTime>(),
            Err(TimeError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            "2024/01/01 24:00:00".parse::<UtcTime>(),
            Err(TimeError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn leap_day_accepted() {
        assert!("2024/02/29 12:00:00".parse::<UtcTime>().is_ok());
        assert!("2000/02/29 12:00:00".parse::<UtcTime>().is_ok());
        assert!("1900/02/29 12:00:00".parse::<UtcTime>().is_err());
    }

    #[test]
    fn jd_of_j2000() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(t.to_jd_utc(), 2_451_545.0);
        // ΔT ≈ 64 s at J2000
        let dt_s = (t.to_jd_tt() - t.to_jd_utc()) * SECONDS_PER_DAY;
        assert!((dt_s - 63.86).abs() < 0.5, "ΔT = {dt_s}");
    }

    #[test]
    fn jd_roundtrip_keeps_seconds() {
        let t = UtcTime::new(2031, 7, 9, 23, 59, 59.25);
        let back = UtcTime::from_jd_utc(t.to_jd_utc());
        assert_eq!((back.year, back.month, back.day), (2031, 7, 9));
        assert_eq!((back.hour, back.minute), (23, 59));
        assert!((back.second - 59.25).abs() < 1e-3);
    }

    #[test]
    fn from_jd_at_day_boundary() {
        let t = UtcTime::from_jd_utc(2_451_545.5 - 1e-12);
        assert_eq!(t, UtcTime::new(2000, 1, 2, 0, 0, 0.0));
    }

    #[test]
    fn display_layout() {
        assert_eq!(
            UtcTime::new(2024, 1, 5, 3, 4, 5.0).to_string(),
            "2024/01/05 03:04:05"
        );
    }

    #[test]
    fn julian_calendar_leap_day() {
        let t: UtcTime = "1100/02/29 00:00:00".parse().unwrap();
        assert_eq!(t, UtcTime::new(1100, 2, 29, 0, 0, 0.0));
        let back = UtcTime::from_jd_utc(UtcTime::new(1100, 3, 1, 0, 0, 0.0).to_jd_utc() - 1.0);
        assert_eq!((back.year, back.month, back.day), (1100, 2, 29));
        assert!(back.validate().is_ok());
    }

    #[test]
    fn reform_gap_rejected() {
        assert!(matches!(
            "1582/10/10 00:00:00".parse::<UtcTime>(),
            Err(TimeError::InvalidTimestamp(_))
        ));
        assert!("1582/10/04 12:00:00".parse::<UtcTime>().is_ok());
        assert!("1582/10/15 12:00:00".parse::<UtcTime>().is_ok());
    }

    #[test]
    fn from_jd_always_validates_across_reform() {
        let start = UtcTime::new(1582, 9, 20, 0, 0, 0.0).to_jd_utc();
        for k in 0..60 {
            let t = UtcTime::from_jd_utc(start + k as f64 * 0.5);
            assert!(t.validate().is_ok(), "{t:?}");
            let jd = t.to_jd_utc();
            assert!((UtcTime::from_jd_utc(jd).to_jd_utc() - jd).abs() < 1e-6);
        }
    }

    #[test]
    fn display_truncates_instead_of_reaching_sixty() {
        let t: UtcTime = "2024/01/01 00:00:59.9999999".parse().unwrap();
        let shown = t.to_string();
        assert_eq!(shown, "2024/01/01 00:00:59.999999");
        let back: UtcTime = shown.parse().unwrap();
        assert_eq!((back.minute, back.hour, back.day), (0, 0, 1));
    }

    #[test]
    fn display_fraction_roundtrips_through_string() {
        let t = UtcTime::new(2024, 3, 20, 4, 30, 15.5);
        assert_eq!(t.to_string(), "2024/03/20 04:30:15.500000");
        let back = UtcTime::try_from(String::from(t)).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn now_is_plausible() {
        let t = UtcTime::now().unwrap();
        assert!(t.year >= 2024);
        assert!(t.validate().is_ok());
    }
}
