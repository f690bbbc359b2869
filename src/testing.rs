//! In-memory archive double for exercising the reconciler without disk or tools.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use crate::context::ServiceContext;
use crate::ports::{FileSystem, ShellExecutor, ShellOutput};
use crate::tools::exiftool::{EXIFTOOL, EXIF_FORMAT};
use crate::tools::touch::{TOUCH, TOUCH_FORMAT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FakeFile {
    pub metadata: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
}

#[derive(Default)]
struct ArchiveState {
    files: BTreeMap<PathBuf, FakeFile>,
    calls: Vec<(String, Vec<String>)>,
    failing: HashSet<String>,
    metadata_write_sets_mtime: Option<NaiveDateTime>,
}

/// Files with fake dates, plus a log of every tool invocation.
#[derive(Clone, Default)]
pub(crate) struct FakeArchive {
    state: Arc<Mutex<ArchiveState>>,
}

impl FakeArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(
        self,
        path: &str,
        metadata: Option<NaiveDateTime>,
        modified: Option<NaiveDateTime>,
    ) -> Self {
        self.lock()
            .files
            .insert(PathBuf::from(path), FakeFile { metadata, modified });
        self
    }

    /// Makes every run of `program` exit with status 1.
    pub fn failing(self, program: &str) -> Self {
        self.lock().failing.insert(program.to_string());
        self
    }

    /// Makes metadata writes move the file's mtime to `date`, the way
    /// `exiftool` does when it rewrites a file.
    pub fn metadata_write_sets_mtime(self, date: NaiveDateTime) -> Self {
        self.lock().metadata_write_sets_mtime = Some(date);
        self
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(Box::new(self.clone()), Box::new(self.clone()))
    }

    pub fn file(&self, path: &str) -> FakeFile {
        self.lock()
            .files
            .get(Path::new(path))
            .copied()
            .unwrap_or_default()
    }

    /// Programs run so far, writes only.
    pub fn writes(&self) -> Vec<(String, Vec<String>)> {
        self.lock()
            .calls
            .iter()
            .filter(|(program, args)| {
                program != EXIFTOOL || args.first().map(String::as_str) != Some("-s3")
            })
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ArchiveState> {
        self.state.lock().expect("archive lock poisoned")
    }
}

impl FileSystem for FakeArchive {
    fn list_files(
        &self,
        root: &Path,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .lock()
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .cloned()
            .collect())
    }

    fn modified(
        &self,
        path: &Path,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>> {
        self.lock()
            .files
            .get(path)
            .and_then(|file| file.modified)
            .ok_or_else(|| format!("cannot stat {}", path.display()).into())
    }
}

impl ShellExecutor for FakeArchive {
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let mut state = self.lock();
        state.calls.push((program.to_string(), args.to_vec()));

        if state.failing.contains(program) {
            return Ok(ShellOutput {
                exit_code: 1,
                stdout: String::new(),
                stderr: format!("{program}: simulated failure\n"),
            });
        }

        let path = PathBuf::from(args.last().cloned().unwrap_or_default());
        let mut stdout = String::new();
        match (program, args.first().map(String::as_str)) {
            (EXIFTOOL, Some("-s3")) => {
                if let Some(date) = state.files.get(&path).and_then(|file| file.metadata) {
                    stdout = format!("{}\n", date.format(EXIF_FORMAT));
                }
            }
            (EXIFTOOL, Some(assignment)) => {
                let value = assignment.trim_start_matches("-AllDates=");
                let date = NaiveDateTime::parse_from_str(value, EXIF_FORMAT)?;
                let bump = state.metadata_write_sets_mtime;
                let file = state.files.entry(path).or_default();
                file.metadata = Some(date);
                if bump.is_some() {
                    file.modified = bump;
                }
            }
            (TOUCH, _) => {
                let date = NaiveDateTime::parse_from_str(&args[1], TOUCH_FORMAT)?;
                state.files.entry(path).or_default().modified = Some(date);
            }
            _ => return Err(format!("unexpected program {program}").into()),
        }

        Ok(ShellOutput {
            exit_code: 0,
            stdout,
            stderr: String::new(),
        })
    }
}
