use crate::domain::BadgeRecord;
use crate::error::{BadgeError, Result};
use crate::services::labeling::clean_team_name;
use std::path::{Component, Path};
use tracing::{debug, info};
use walkdir::WalkDir;

/// File endings treated as badge images, compared case-insensitively.
pub const BADGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

pub fn is_badge_image(filename: &str) -> bool {
    let lowered = filename.to_lowercase();
    BADGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

/// Walks `root` and returns one record per badge image found below it.
///
/// Only files inside at least one subdirectory count; images lying directly in
/// `root` are skipped. The league of a badge is the name of the directory that
/// directly contains it, so `root/A/B/x.png` lands in league `B`. Entries are
/// visited in file name order within each directory.
pub fn scan_badges(root: &Path) -> Result<Vec<BadgeRecord>> {
    if !root.exists() {
        return Err(BadgeError::MissingInput(root.to_path_buf()));
    }

    info!("Scanning Logos folder: {}", root.display());

    let root_name = root_name(root);
    let mut badges = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;

        if entry.file_type().is_dir() {
            info!("  Processing league: {}", entry.file_name().to_string_lossy());
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        if !is_badge_image(&filename) {
            continue;
        }

        if entry.depth() == 1 {
            debug!("Skipping {} in the root folder", filename);
            continue;
        }

        let league = entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let team = clean_team_name(&filename);

        info!("    Added: {} ({})", team, filename);
        badges.push(BadgeRecord::new(
            team,
            badge_url(&root_name, relative),
            league,
            filename,
        ));
    }

    info!("Total badges found: {}", badges.len());
    Ok(badges)
}

/// Builds the `/`-separated asset reference for a file at `relative` below the
/// root folder, whatever separator the host uses.
pub fn badge_url(root_name: &str, relative: &Path) -> String {
    let mut url = root_name.to_string();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            url.push('/');
            url.push_str(&part.to_string_lossy());
        }
    }
    url
}

fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}
