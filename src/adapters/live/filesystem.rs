//! Live filesystem adapter using `std::fs` and `walkdir`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDateTime};
use tracing::warn;
use walkdir::WalkDir;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn list_files(
        &self,
        root: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        if !root.is_dir() {
            return Err(format!("{} is not a directory", root.display()).into());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn modified(
        &self,
        path: &Path,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>> {
        let modified = std::fs::metadata(path)?.modified()?;
        Ok(DateTime::<Local>::from(modified).naive_local())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::*;

    #[test]
    fn lists_files_depth_first_in_name_order() {
        let dir = std::env::temp_dir().join("redate_live_fs_list");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("2001-02-03")).unwrap();
        std::fs::create_dir_all(dir.join("b-empty")).unwrap();
        std::fs::write(dir.join("2001-02-03/b.jpg"), "b").unwrap();
        std::fs::write(dir.join("2001-02-03/a.jpg"), "a").unwrap();
        std::fs::write(dir.join("c.jpg"), "c").unwrap();

        let files = LiveFileSystem.list_files(&dir).unwrap();
        assert_eq!(
            files,
            vec![dir.join("2001-02-03/a.jpg"), dir.join("2001-02-03/b.jpg"), dir.join("c.jpg")]
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_root_is_an_error() {
        let result = LiveFileSystem.list_files(Path::new("/tmp/redate_missing_root_xyz"));
        assert!(result.is_err());
    }

    #[test]
    fn reads_modification_time_as_local_time() {
        let dir = std::env::temp_dir().join("redate_live_fs_mtime");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("photo.jpg");
        std::fs::write(&path, "x").unwrap();

        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_118_131_750);
        std::fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(when)
            .unwrap();

        let expected = DateTime::<Local>::from(when).naive_local();
        assert_eq!(LiveFileSystem.modified(&path).unwrap(), expected);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn modified_of_missing_file_is_an_error() {
        assert!(LiveFileSystem.modified(Path::new("/tmp/redate_missing_file.jpg")).is_err());
    }
}
