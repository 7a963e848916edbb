use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::models::catalog::Catalog;

/// Asset subdirectories created if missing
const ASSET_SUBDIRS: &[&str] = &["images", "videos"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing asset directories and warns about catalog media that
/// is not on disk. The caller aborts when `errors > 0`.
pub fn run(config: &SiteConfig, catalog: &Catalog) -> BootReport {
    info!("Portfolio boot check starting...");

    let mut report = BootReport::default();
    let assets = Path::new(&config.assets_dir);

    // ── 1. Directories ─────────────────────────────────
    let dirs = std::iter::once(assets.to_path_buf())
        .chain(ASSET_SUBDIRS.iter().map(|d| assets.join(d)));
    for path in dirs {
        if !path.exists() {
            match fs::create_dir_all(&path) {
                Ok(_) => info!("  Created directory: {}", path.display()),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", path.display(), e);
                    report.errors += 1;
                }
            }
        }
    }

    // ── 2. Catalog media ───────────────────────────────
    for (kind, record) in catalog.iter() {
        let media = record
            .images
            .iter()
            .map(|m| m.uri.as_str())
            .chain(record.videos.iter().map(String::as_str));
        for uri in media {
            let file = assets.join(uri.trim_start_matches('/'));
            if !file.is_file() {
                warn!(
                    "  Missing media for {} '{}': {}",
                    kind.singular(),
                    record.slug,
                    file.display()
                );
                report.warnings += 1;
            }
        }
    }

    // ── 3. Rocket.toml exists ───────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default config");
        report.warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s).",
            report.errors, report.warnings
        );
    } else if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some media may not load.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }

    report
}
