//! Plain-text report layout.

use std::io::{self, Write};

use meridian_rank::{Report, Target};

const RULE: &str = "-----------------------------------------------------------------";

pub struct TextOptions<'a> {
    /// Drop the explanation lines and the Exp./Sdist columns.
    pub suppress: bool,
    /// Where the catalog came from, for the explanation line.
    pub catalog_label: &'a str,
}

/// Width of the name column: the longest name rounded up to a tab stop.
fn name_width(targets: &[Target]) -> usize {
    let longest = targets
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Source".len());
    longest.div_ceil(8) * 8
}

pub fn write_text(out: &mut impl Write, report: &Report, opts: &TextOptions<'_>) -> io::Result<()> {
    let c = &report.criteria;
    writeln!(out)?;
    writeln!(out, "Date and time used (in UT): {}", report.site.time())?;
    if !opts.suppress {
        writeln!(
            out,
            "Will select sources between {} and {} degrees from the moon and above {} degrees elevation..",
            c.min_moon_dist, c.max_moon_dist, c.min_elevation
        )?;
        writeln!(
            out,
            "Generating an ordered list of sources using targets in {}...",
            opts.catalog_label
        )?;
        writeln!(
            out,
            "All parameters listed in degrees except for the exposure (recommended time in seconds, for PSF measurement)"
        )?;
    }

    for warning in &report.warnings {
        writeln!(out, "{warning}")?;
    }
    for issue in &report.issues {
        writeln!(out, "note: {issue}")?;
    }

    let width = name_width(&report.targets);
    writeln!(out)?;
    write!(out, "{:<width$}{:>10}{:>10}{:>10}", "Source", "Elevation", "Azimuth", "MoonDist")?;
    if !opts.suppress {
        write!(out, "{:>7}{:>8}", "Exp.", "Sdist")?;
    }
    writeln!(out)?;
    writeln!(out, "{RULE}")?;

    for t in &report.targets {
        write!(
            out,
            "{:<width$}{:>10.2}{:>10.2}{:>10.2}",
            t.name, t.elevation_deg, t.azimuth_deg, t.moon_dist_deg
        )?;
        if !opts.suppress {
            let sdist = match t.nearest_separation_deg() {
                Some(d) => format!("{d:.2}"),
                None => "-".to_string(),
            };
            write!(out, "{:>7}{:>8}", t.exposure.to_string(), sdist)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{RULE}")?;
    writeln!(out, "The Moon is {:.2}% illuminated", report.moon.illuminated_percent())?;
    Ok(())
}
