//! Target ranking for ground-based observing.
//!
//! Catalog rows go through per-target astrometry (elevation, azimuth, Moon
//! distance), a nearest-neighbour scan for doublets, the elevation /
//! Moon-distance / magnitude cuts, and finally a sort on one key.
//!
//! ```text
//! CatalogRow ──observe──▶ Target ──nearest_neighbours──▶ scan_proximity
//!                                        │
//!                                        ▼
//!                             filter_targets ──▶ sort_targets ──▶ Report
//! ```

pub mod catalog;
pub mod criteria;
pub mod error;
pub mod exposure;
pub mod pipeline;
pub mod proximity;
pub mod report;
pub mod target;

pub use catalog::{CatalogRow, DEFAULT_EPOCH, ParsedCatalog, RaUnit, parse_catalog};
pub use criteria::{RankingCriteria, SortDirection, SortKey, passes_cuts};
pub use error::RankError;
pub use exposure::{ExposureHint, exposure_for, magnitude_from_name};
pub use pipeline::{Ranked, filter_targets, rank, sort_targets};
pub use proximity::{
    Neighbour, ProximityWarning, nearest_indices, nearest_neighbours, scan_proximity,
};
pub use report::{Report, build_report};
pub use target::{Target, observe};
