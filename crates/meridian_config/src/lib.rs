//! Meridian configuration.
//!
//! Loaded from, in order: an explicit path, `$MERIDIAN_CONFIG`, then
//! `<config dir>/meridian/config.toml`. Every key is optional; a missing
//! default file means built-in defaults.
//!
//! ```toml
//! [site]
//! latitude-deg = 31.675
//! longitude-deg = -110.952
//! elevation-m = 1268.0
//!
//! [criteria]
//! min-elevation = 30.0
//! sort-by = "moonDist"
//! direction = "ascending"
//!
//! [catalog]
//! path = "targets.tsv"
//! ra-unit = "hours"
//! ```

pub mod error;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use meridian_rank::{RaUnit, RankingCriteria, SortDirection};

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "MERIDIAN_CONFIG";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    pub site: SiteConfig,
    pub criteria: CriteriaConfig,
    pub catalog: CatalogConfig,
}

/// Observatory location. Defaults to the VERITAS site on Mt. Hopkins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SiteConfig {
    /// North positive.
    pub latitude_deg: f64,
    /// East positive.
    pub longitude_deg: f64,
    pub elevation_m: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 31.0 + 40.51 / 60.0,
            longitude_deg: -(110.0 + 57.132 / 60.0),
            elevation_m: 1268.0,
        }
    }
}

/// Overrides for [`RankingCriteria`]; unset keys keep the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CriteriaConfig {
    pub min_moon_dist: Option<f64>,
    pub max_moon_dist: Option<f64>,
    pub min_elevation: Option<f64>,
    pub max_elevation: Option<f64>,
    pub max_magnitude: Option<f64>,
    pub sort_by: Option<String>,
    pub direction: Option<SortDirection>,
    pub no_cuts: Option<bool>,
    pub check_proximity: Option<f64>,
}

impl CriteriaConfig {
    /// Layer the set keys over `base`.
    pub fn apply(&self, base: RankingCriteria) -> RankingCriteria {
        RankingCriteria {
            min_moon_dist: self.min_moon_dist.unwrap_or(base.min_moon_dist),
            max_moon_dist: self.max_moon_dist.unwrap_or(base.max_moon_dist),
            min_elevation: self.min_elevation.unwrap_or(base.min_elevation),
            max_elevation: self.max_elevation.unwrap_or(base.max_elevation),
            max_magnitude: self.max_magnitude.unwrap_or(base.max_magnitude),
            sort_by: self.sort_by.clone().unwrap_or(base.sort_by),
            direction: self.direction.unwrap_or(base.direction),
            no_cuts: self.no_cuts.unwrap_or(base.no_cuts),
            check_proximity: self.check_proximity.unwrap_or(base.check_proximity),
        }
    }
}

/// Where the catalog comes from and how to read its RA column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Query output file; standard input when unset.
    pub path: Option<PathBuf>,
    pub ra_unit: RaUnit,
}

impl Config {
    /// Parse a config file's contents. `path` is only used in error messages.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };
        let site = &self.site;
        if !(-90.0..=90.0).contains(&site.latitude_deg) {
            return Err(invalid("site.latitude-deg must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&site.longitude_deg) {
            return Err(invalid("site.longitude-deg must be in [-180, 180]"));
        }
        if !site.elevation_m.is_finite() {
            return Err(invalid("site.elevation-m must be finite"));
        }
        Ok(())
    }

    /// Read and parse a config file that must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Resolve and load the active config.
    ///
    /// Returns the config and the file it came from, or defaults and `None`
    /// when no file was requested and the default file is absent.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let env = std::env::var_os(CONFIG_ENV);
        Self::load_with(explicit, env, Self::default_path())
    }

    /// [`Config::load`] with the environment and default path supplied.
    pub fn load_with(
        explicit: Option<&Path>,
        env: Option<OsString>,
        default_path: Option<PathBuf>,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from));
        if let Some(path) = requested {
            let config = Self::load_from(&path)?;
            debug!(path = %path.display(), "loaded config");
            return Ok((config, Some(path)));
        }
        match default_path {
            Some(path) if path.exists() => {
                let config = Self::load_from(&path)?;
                debug!(path = %path.display(), "loaded default config");
                Ok((config, Some(path)))
            }
            _ => {
                debug!("no config file, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// `<config dir>/meridian/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("meridian").join("config.toml"))
    }

    /// Criteria with this file's overrides applied to the built-in defaults.
    pub fn criteria(&self) -> RankingCriteria {
        self.criteria.apply(RankingCriteria::default())
    }
}
