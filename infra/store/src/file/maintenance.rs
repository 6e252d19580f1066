use crate::file::layout::TMP_MARKER;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

/// Temp files older than this are leftovers of interrupted writes.
const STALE_AFTER: Duration = Duration::from_secs(300);

/// Removes orphaned temp files and empty shard directories under `root`.
pub(crate) fn purge_tmp(root: &Path) {
    let (removed, failed) = remove_stale(root, SystemTime::now(), STALE_AFTER);
    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

fn remove_stale(root: &Path, now: SystemTime, threshold: Duration) -> (usize, usize) {
    let mut removed = 0;
    let mut failed = 0;

    WalkDir::new(root)
        .contents_first(true)
        .into_iter()
        .flatten()
        .filter(|e| e.path() != root)
        .for_each(|entry| {
            let path = entry.path();

            if entry.file_type().is_file() {
                if is_tmp(&entry) && is_stale(&entry, now, threshold) {
                    match std::fs::remove_file(path) {
                        Ok(()) => removed += 1,
                        Err(e) => {
                            warn!(p = %path.display(), err = %e, "IO fail");
                            failed += 1;
                        },
                    }
                }
            } else if entry.file_type().is_dir() {
                // Only succeeds for empty shards.
                let _ = std::fs::remove_dir(path);
            }
        });

    (removed, failed)
}

fn is_tmp(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.contains(TMP_MARKER))
}

fn is_stale(entry: &DirEntry, now: SystemTime, threshold: Duration) -> bool {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn stale_temp_files_are_removed_and_records_kept() {
        let dir = tempdir().unwrap();
        let shard = dir.path().join("records/01/00");
        fs::create_dir_all(&shard).unwrap();
        fs::write(shard.join("1.json"), b"{}").unwrap();
        fs::write(shard.join("1.json.slugeqtmp.7"), b"partial").unwrap();

        // Pretend the clock moved far past the threshold.
        let later = SystemTime::now() + Duration::from_secs(3600);
        let (removed, failed) = remove_stale(dir.path(), later, STALE_AFTER);

        assert_eq!((removed, failed), (1, 0));
        assert!(shard.join("1.json").exists());
        assert!(!shard.join("1.json.slugeqtmp.7").exists());
    }

    #[test]
    fn fresh_temp_files_survive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("5.json.slugeqtmp.1"), b"in flight").unwrap();

        let (removed, _) = remove_stale(dir.path(), SystemTime::now(), STALE_AFTER);

        assert_eq!(removed, 0);
        assert!(dir.path().join("5.json.slugeqtmp.1").exists());
    }
}
