//! `meridian`: rank catalog targets for one site and instant.
//!
//! Reads tab-separated query output (`source_id, ra, decl, epoch` with a
//! header line) from `--catalog` or standard input.
//!
//! Environment:
//! - `MERIDIAN_CONFIG`: config file used when `--config` is absent
//! - `RUST_LOG`: log filter for stderr (default `warn`)

mod render;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use meridian_config::Config;
use meridian_frames::ObserverSite;
use meridian_rank::{RaUnit, RankingCriteria, SortDirection, build_report, parse_catalog};
use meridian_time::UtcTime;

use render::{TextOptions, write_text};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "meridian",
    version,
    about = "Rank observing targets by elevation and distance from the Moon"
)]
struct Cli {
    /// UT date, "YYYY/MM/DD HH:MM:SS" (default: now)
    #[arg(long)]
    date: Option<UtcTime>,
    /// Minimum distance from the Moon in degrees
    #[arg(long)]
    min_moon_dist: Option<f64>,
    /// Maximum distance from the Moon in degrees
    #[arg(long)]
    max_moon_dist: Option<f64>,
    /// Minimum elevation in degrees
    #[arg(long, allow_negative_numbers = true)]
    min_elevation: Option<f64>,
    /// Maximum elevation in degrees
    #[arg(long)]
    max_elevation: Option<f64>,
    /// Sort key: elevation, moonDist, magnitude, azimuth
    #[arg(long)]
    sort_by: Option<String>,
    /// Faintest magnitude to include
    #[arg(long, allow_negative_numbers = true)]
    mag: Option<f64>,
    /// Sort ascending instead of descending
    #[arg(long)]
    ascending: bool,
    /// Show every target, ignoring elevation, Moon and magnitude cuts
    #[arg(long)]
    no_cuts: bool,
    /// Warn when another target is closer than this many degrees
    #[arg(long, allow_negative_numbers = true)]
    check_proximity: Option<f64>,
    /// Suppress explanation lines and the Exp./Sdist columns
    #[arg(long)]
    suppress: bool,
    /// Catalog file (default: config, then stdin)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Unit of the RA column: radians, hours or degrees
    #[arg(long)]
    ra_unit: Option<RaUnit>,
    /// Config file (default: $MERIDIAN_CONFIG, then the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Site latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Site longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Site elevation in meters
    #[arg(long, allow_negative_numbers = true)]
    elevation: Option<f64>,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command-line flags layered over the config file's criteria.
    fn criteria(&self, base: RankingCriteria) -> RankingCriteria {
        RankingCriteria {
            min_moon_dist: self.min_moon_dist.unwrap_or(base.min_moon_dist),
            max_moon_dist: self.max_moon_dist.unwrap_or(base.max_moon_dist),
            min_elevation: self.min_elevation.unwrap_or(base.min_elevation),
            max_elevation: self.max_elevation.unwrap_or(base.max_elevation),
            max_magnitude: self.mag.unwrap_or(base.max_magnitude),
            sort_by: self.sort_by.clone().unwrap_or(base.sort_by),
            direction: if self.ascending {
                SortDirection::Ascending
            } else {
                base.direction
            },
            no_cuts: self.no_cuts || base.no_cuts,
            check_proximity: self.check_proximity.unwrap_or(base.check_proximity),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_catalog(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            Ok((text, path.display().to_string()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read catalog from stdin")?;
            Ok((text, "stdin".to_string()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, config_path) = Config::load(cli.config.as_deref())?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "using config");
    }

    let time = match cli.date {
        Some(t) => t,
        None => UtcTime::now().context("system clock is unusable")?,
    };
    let site = ObserverSite::new(
        cli.lat.unwrap_or(config.site.latitude_deg),
        cli.lon.unwrap_or(config.site.longitude_deg),
        cli.elevation.unwrap_or(config.site.elevation_m),
        time,
    )
    .context("invalid observer site")?;

    let criteria = cli.criteria(config.criteria());
    debug!(?criteria, "ranking criteria");

    let catalog_path = cli.catalog.as_deref().or(config.catalog.path.as_deref());
    let (text, label) = read_catalog(catalog_path)?;
    let ra_unit = cli.ra_unit.unwrap_or(config.catalog.ra_unit);
    let parsed = parse_catalog(&text, ra_unit);
    info!(rows = parsed.rows.len(), issues = parsed.issues.len(), "catalog parsed");

    let mut report = build_report(&parsed.rows, &site, &criteria)?;
    let mut issues = parsed.issues;
    issues.append(&mut report.issues);
    report.issues = issues;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            let opts = TextOptions {
                suppress: cli.suppress,
                catalog_label: &label,
            };
            write_text(&mut out, &report, &opts)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
