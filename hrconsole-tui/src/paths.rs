//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "hrconsole";
const APPLICATION: &str = "hrconsole";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "session-";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/hrconsole` or `~/.config/hrconsole`
/// - macOS: `~/Library/Application Support/dev.hrconsole.hrconsole`
/// - Windows: `C:\Users\<User>\AppData\Roaming\hrconsole\hrconsole\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Cache directory, where logs go.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous session's log and prune old archives.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_in(&cache, MAX_OLD_LOGS);
    }
}

/// Archives are named `session-<timestamp>.log`, so name order is age order.
fn rotate_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.is_file() {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let mut archived = dir.join(format!("{ARCHIVE_PREFIX}{stamp}.log"));
        let mut n = 1;
        while archived.exists() {
            archived = dir.join(format!("{ARCHIVE_PREFIX}{stamp}-{n}.log"));
            n += 1;
        }
        let _ = fs::rename(&latest, &archived);
    }

    let mut archives: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_archive(path))
            .collect(),
        Err(_) => return,
    };
    archives.sort();
    let excess = archives.len().saturating_sub(keep);
    for path in &archives[..excess] {
        let _ = fs::remove_file(path);
    }
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hrconsole-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_latest_is_archived() {
        let dir = scratch("rotate");
        fs::write(dir.join(LATEST_LOG), "old session").unwrap();
        rotate_in(&dir, 5);

        let names = names(&dir);
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with(ARCHIVE_PREFIX));
        assert_eq!(fs::read_to_string(dir.join(&names[0])).unwrap(), "old session");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_oldest_archives_pruned() {
        let dir = scratch("prune");
        for day in 1..=4 {
            fs::write(dir.join(format!("{ARCHIVE_PREFIX}2026010{day}-090000.log")), "").unwrap();
        }
        fs::write(dir.join("notes.txt"), "").unwrap();
        rotate_in(&dir, 2);

        assert_eq!(
            names(&dir),
            vec![
                "notes.txt".to_string(),
                format!("{ARCHIVE_PREFIX}20260103-090000.log"),
                format!("{ARCHIVE_PREFIX}20260104-090000.log"),
            ]
        );
        fs::remove_dir_all(&dir).unwrap();
    }
}
