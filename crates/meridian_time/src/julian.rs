//! Julian Date ↔ calendar conversions and epoch helpers.
//!
//! Calendar conversions follow Meeus, _Astronomical Algorithms_ (2nd ed.),
//! Ch. 7. Dates before 1582-Oct-15 are taken in the Julian calendar.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First Julian Date of the Gregorian calendar (1582-Oct-15 0h).
const GREGORIAN_START_JD: f64 = 2_299_160.5;

/// Leap year in the calendar in force that year: Julian rule before 1582,
/// Gregorian rule from 1582 on.
pub fn is_leap_year(year: i32) -> bool {
    if year < 1582 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Whether the date falls in the ten days dropped by the Gregorian reform
/// (1582-Oct-05 through 1582-Oct-14), which never existed.
pub fn in_gregorian_gap(year: i32, month: u32, day: u32) -> bool {
    year == 1582 && month == 10 && (5..=14).contains(&day)
}

/// Calendar date to Julian Date.
///
/// `day` carries the time of day as a fraction (e.g. 1.5 = the 1st at noon).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let jd_julian =
        (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day - 1524.5;
    if jd_julian < GREGORIAN_START_JD {
        return jd_julian;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    jd_julian + b
}

/// Julian Date to calendar `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian epoch year (e.g. 2000.0) to Julian Date.
pub fn julian_year_to_jd(year: f64) -> f64 {
    J2000_JD + (year - 2000.0) * DAYS_PER_JULIAN_YEAR
}

/// Julian Date to Julian epoch year.
pub fn jd_to_julian_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957 Oct 4.81 = JD 2436116.31
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn julian_calendar_date() {
        // Meeus example 7.b: 333 Jan 27.5 = JD 1842713.0
        assert!((calendar_to_jd(333, 1, 27.5) - 1_842_713.0).abs() < 1e-6);
    }

    #[test]
    fn calendar_from_jd() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6);
    }

    #[test]
    fn calendar_roundtrip_across_leap_day() {
        let jd = calendar_to_jd(2024, 2, 29.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.25).abs() < 1e-8);
    }

    #[test]
    fn leap_rule_follows_calendar_in_force() {
        assert!(is_leap_year(1100));
        assert!(is_leap_year(1500));
        assert!(!is_leap_year(1700));
        assert!(is_leap_year(1600));
        assert_eq!(days_in_month(1100, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn julian_leap_day_is_a_real_day() {
        let leap = calendar_to_jd(1100, 2, 29.0);
        assert_eq!(calendar_to_jd(1100, 3, 1.0) - leap, 1.0);
        let (y, m, d) = jd_to_calendar(leap);
        assert_eq!((y, m, d), (1100, 2, 29.0));
    }

    #[test]
    fn reform_gap() {
        assert!(in_gregorian_gap(1582, 10, 5));
        assert!(in_gregorian_gap(1582, 10, 14));
        assert!(!in_gregorian_gap(1582, 10, 4));
        assert!(!in_gregorian_gap(1582, 10, 15));
        // The day after Julian 1582-Oct-04 is Gregorian 1582-Oct-15.
        assert_eq!(calendar_to_jd(1582, 10, 15.0) - calendar_to_jd(1582, 10, 4.0), 1.0);
    }

    #[test]
    fn julian_year_conversions() {
        assert_eq!(julian_year_to_jd(2000.0), J2000_JD);
        assert!((jd_to_julian_year(julian_year_to_jd(1950.0)) - 1950.0).abs() < 1e-12);
        assert!((julian_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }
}
