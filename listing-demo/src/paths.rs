//! Where the log file lives, and keeping old ones in check.
//!
//! The log goes to the platform cache directory (XDG on Linux). At startup the
//! previous `latest.log` is archived under a timestamped name and only the
//! newest archives are kept.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "listing";
const APPLICATION: &str = "listing";

pub const LATEST_LOG: &str = "latest.log";

/// Archived logs kept besides `latest.log`.
pub const MAX_OLD_LOGS: usize = 25;

/// - Linux: `$XDG_CACHE_HOME/listing` or `~/.cache/listing`
/// - macOS: `~/Library/Caches/dev.listing.listing`
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Create the log directory, rotate, and return the path for the new log.
pub fn prepare_log_file() -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    if let Err(e) = rotate_logs(&dir, MAX_OLD_LOGS) {
        eprintln!("log rotation in {} failed: {}", dir.display(), e);
    }
    Some(dir.join(LATEST_LOG))
}

/// Archive `latest.log` and prune archives beyond `keep`.
///
/// Returns the number of archives removed.
pub fn rotate_logs(dir: &Path, keep: usize) -> io::Result<usize> {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
        fs::rename(&latest, dir.join(format!("{}.log", stamp)))?;
    }
    prune_logs(dir, keep)
}

/// Remove the oldest archives until at most `keep` remain.
///
/// Archive names are timestamps, so name order is age order.
pub fn prune_logs(dir: &Path, keep: usize) -> io::Result<usize> {
    let mut archives: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();

    if archives.len() <= keep {
        return Ok(0);
    }

    archives.sort();
    let excess = archives.len() - keep;
    for path in &archives[..excess] {
        fs::remove_file(path)?;
    }
    Ok(excess)
}
