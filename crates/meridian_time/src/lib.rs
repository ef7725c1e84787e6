//! Time handling for the ranking engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions and Julian epoch helpers
//! - ΔT (TT − UT) approximation
//! - Earth Rotation Angle and mean sidereal time
//! - `UtcTime`, the parsed observation timestamp

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
    days_in_month, in_gregorian_gap, is_leap_year, jd_to_calendar, jd_to_julian_year,
    julian_centuries, julian_year_to_jd,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, hour_angle_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
