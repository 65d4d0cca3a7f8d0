use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local, TimeZone};
use log::{debug, info, trace};
use std::{
    fmt::Display,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::index::{INDEX_FILE, INDEX_HEADER, index_row, latest_version, snapshot_file_name};

/// Default output directory, relative to the project root.
pub const DEFAULT_DIR: &str = "code_docs";

/// What happened when a report was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new snapshot file and index row were written
    Created { version: u32, path: PathBuf },
    /// The report matches the latest snapshot; nothing was written
    Unchanged { version: u32, path: PathBuf },
}

impl RecordOutcome {
    pub fn version(&self) -> u32 {
        match self {
            RecordOutcome::Created { version, .. } | RecordOutcome::Unchanged { version, .. } => {
                *version
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            RecordOutcome::Created { path, .. } | RecordOutcome::Unchanged { path, .. } => path,
        }
    }
}

/// Numbered report snapshots plus a markdown index, stored in one directory.
///
/// Layout:
/// - `index.md`: a table with one `| v<N> | <timestamp> | [file](./file) |` row per snapshot
/// - `v<N>_context.md`: the report text of snapshot `N`
///
/// There is no locking; concurrent writers to the same directory may race.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Store under `<project_root>/code_docs`
    pub fn new(project_root: &Path) -> Self {
        Self::with_dir(project_root.join(DEFAULT_DIR))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE)
    }

    /// Latest recorded version and its snapshot path, if the index has any rows.
    pub fn latest(&self) -> Result<Option<(u32, PathBuf)>> {
        let index_path = self.index_path();
        if !index_path.exists() {
            trace!("No index at {}", index_path.display());
            return Ok(None);
        }
        let index = fs::read_to_string(&index_path)
            .with_context(|| format!("Failed to read {}", index_path.display()))?;
        let latest = latest_version(&index)
            .with_context(|| format!("Failed to parse {}", index_path.display()))?;
        Ok(latest.map(|v| (v, self.dir.join(snapshot_file_name(v)))))
    }

    /// Records `content` as a new snapshot unless it equals the latest one.
    pub fn record(&self, content: &str) -> Result<RecordOutcome> {
        self.record_at(content, &Local::now())
    }

    /// Same as [`SnapshotStore::record`] with an explicit index timestamp.
    pub fn record_at<Tz>(&self, content: &str, at: &DateTime<Tz>) -> Result<RecordOutcome>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let latest = self.latest()?;
        if let Some((version, path)) = &latest
            && path.exists()
        {
            let previous = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if previous == content {
                info!("Report unchanged since v{}", version);
                return Ok(RecordOutcome::Unchanged { version: *version, path: path.clone() });
            }
            debug!("Report differs from v{}", version);
        }

        let version = match latest {
            None => 1,
            Some((v, _)) => match v.checked_add(1) {
                Some(next) => next,
                None => bail!("No version numbers left after v{} in {}", v, self.dir.display()),
            },
        };
        let path = self.dir.join(snapshot_file_name(version));
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        self.append_row(&index_row(version, at))?;

        info!("Recorded snapshot v{} at {}", version, path.display());
        Ok(RecordOutcome::Created { version, path })
    }

    fn append_row(&self, row: &str) -> Result<()> {
        let index_path = self.index_path();
        let is_new = !index_path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
        if is_new {
            trace!("Creating index at {}", index_path.display());
            file.write_all(INDEX_HEADER.as_bytes())?;
        }
        file.write_all(row.as_bytes())
            .with_context(|| format!("Failed to append to {}", index_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use tempfile::TempDir;

    fn at(day: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 1, day, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_first_record_creates_v1_and_index() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        let outcome = store.record_at("report one", &at(1)).unwrap();

        let expected_path = temp_dir.path().join("code_docs").join("v1_context.md");
        assert_eq!(outcome, RecordOutcome::Created { version: 1, path: expected_path.clone() });
        assert_eq!(fs::read_to_string(&expected_path).unwrap(), "report one");
        assert_eq!(
            fs::read_to_string(store.index_path()).unwrap(),
            "| V | Data | Arq |\n|---|---|---|\n\
             | v1 | 01/01/2026, 10:00:00 | [v1_context.md](./v1_context.md) |\n"
        );
    }

    #[test]
    fn test_changed_report_creates_next_version() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        store.record_at("report one", &at(1)).unwrap();
        let outcome = store.record_at("report two", &at(2)).unwrap();

        assert_eq!(outcome.version(), 2);
        assert!(matches!(outcome, RecordOutcome::Created { .. }));
        let index = fs::read_to_string(store.index_path()).unwrap();
        assert_eq!(index.matches("| V | Data | Arq |").count(), 1);
        assert!(index.ends_with("| v2 | 02/01/2026, 10:00:00 | [v2_context.md](./v2_context.md) |\n"));
    }

    #[test]
    fn test_identical_report_is_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        store.record_at("same", &at(1)).unwrap();
        let index_before = fs::read_to_string(store.index_path()).unwrap();
        let outcome = store.record_at("same", &at(2)).unwrap();

        assert_eq!(
            outcome,
            RecordOutcome::Unchanged { version: 1, path: store.dir().join("v1_context.md") }
        );
        assert_eq!(fs::read_to_string(store.index_path()).unwrap(), index_before);
        assert!(!store.dir().join("v2_context.md").exists());
    }

    #[test]
    fn test_only_latest_snapshot_is_compared() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        store.record_at("a", &at(1)).unwrap();
        store.record_at("b", &at(2)).unwrap();
        let outcome = store.record_at("a", &at(3)).unwrap();

        assert_eq!(outcome.version(), 3);
        assert!(matches!(outcome, RecordOutcome::Created { .. }));
    }

    #[test]
    fn test_missing_latest_snapshot_file_records_next_version() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        store.record_at("a", &at(1)).unwrap();
        fs::remove_file(store.dir().join("v1_context.md")).unwrap();
        let outcome = store.record_at("a", &at(2)).unwrap();

        assert_eq!(outcome.version(), 2);
    }

    #[test]
    fn test_version_continues_from_existing_index() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("docs");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.md"), "| V | Data | Arq |\n|---|---|---|\n| v41 | x | y |\n")
            .unwrap();
        let store = SnapshotStore::with_dir(&dir);

        let outcome = store.record_at("new", &at(1)).unwrap();

        assert_eq!(outcome, RecordOutcome::Created { version: 42, path: dir.join("v42_context.md") });
    }

    #[test]
    fn test_latest_without_index() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());
        assert_eq!(store.latest().unwrap(), None);
    }

    #[test]
    fn test_out_of_range_index_does_not_overwrite_v1() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("docs");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.md"), "| V | Data | Arq |\n|---|---|---|\n| v4294967296 | x | y |\n")
            .unwrap();
        fs::write(dir.join("v1_context.md"), "original").unwrap();
        let store = SnapshotStore::with_dir(&dir);

        assert!(store.record_at("new", &at(1)).is_err());
        assert!(store.latest().is_err());
        assert_eq!(fs::read_to_string(dir.join("v1_context.md")).unwrap(), "original");
    }

    #[test]
    fn test_last_version_number_cannot_be_exceeded() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("docs");
        fs::create_dir_all(&dir).unwrap();
        let index = format!("| V | Data | Arq |\n|---|---|---|\n| v{} | x | y |\n", u32::MAX);
        fs::write(dir.join("index.md"), &index).unwrap();
        let store = SnapshotStore::with_dir(&dir);

        let err = store.record_at("new", &at(1)).unwrap_err();

        assert!(err.to_string().contains("No version numbers left"));
        assert!(!dir.join("v1_context.md").exists());
        assert_eq!(fs::read_to_string(dir.join("index.md")).unwrap(), index);
    }
}
