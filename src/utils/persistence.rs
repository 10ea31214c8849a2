//! File locations and write helpers for everything kept on disk.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SCORES_FILENAME: &str = "scores.json";
pub const LOG_FILENAME: &str = "flappy.log";

/// Get the platform data directory for the game, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "flappy").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    let dir = project_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location of the score store.
pub fn default_scores_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(SCORES_FILENAME))
}

/// Location of the log file.
pub fn log_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILENAME))
}

/// Replace `path` with `contents` via a sibling temp file and a rename, so a
/// failed write never leaves a truncated file behind.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path).inspect_err(|_| {
        fs::remove_file(&tmp_path).ok();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_dir() -> PathBuf {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "flappy-persistence-test-{}-{}",
            std::process::id(),
            id
        ))
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = temp_dir();
        let path = dir.join("nested").join("data.json");
        write_atomic(&path, "{}").expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!dir.join("nested").join("data.json.tmp").exists());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = temp_dir();
        let path = dir.join("data.json");
        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        fs::remove_dir_all(dir).ok();
    }
}
