//! Coordinate frames for target ranking.
//!
//! Provides the observer site, validated equatorial coordinates,
//! great-circle separation, precession to the equinox of date, and the
//! equatorial → horizontal transform.

pub mod error;
pub mod horizontal;
pub mod precession;
pub mod separation;
pub mod site;
pub mod spherical;

pub use error::FrameError;
pub use horizontal::{
    Horizontal, horizontal_from_hour_angle, horizontal_of, horizontal_of_date, to_equinox_of_date,
    to_horizontal,
};
pub use precession::{precess, precession_angles};
pub use separation::{angular_separation_deg, angular_separation_rad};
pub use site::ObserverSite;
pub use spherical::EquatorialCoord;
