use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};
use std::vec;

use indicatif::ProgressBar;

use crate::fsutil::entry::EntryKind;
use crate::util::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Deepest level to report files from. Entries directly under the root are at depth 1.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories that were listed, including the root.
    pub directories: u64,
    /// Symbolic links met and skipped.
    pub symlinks: u64,
    /// Fifos, sockets and devices met and skipped.
    pub others: u64,
}

#[derive(Debug, Default)]
pub struct WalkReport {
    pub files: Vec<PathBuf>,
    pub stats: WalkStats,
}

/// A directory whose entries have not all been visited yet.
struct Listing {
    depth: usize,
    entries: vec::IntoIter<DirEntry>,
}

/// Depth-first walker over a directory tree that collects regular files.
///
/// The walk keeps an explicit stack of open directory listings rather than recursing,
/// so deep trees cannot exhaust the call stack. Files come out in the same order a
/// recursive walk would produce: every entry in the order `read_dir` yields it, with a
/// subdirectory's contents appearing where the subdirectory was met.
///
/// Symbolic links are never followed.
pub struct Walker {
    root: PathBuf,
    options: WalkOptions,
}

impl Walker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            options: WalkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Walks the tree and returns every regular file found beneath the root.
    ///
    /// # Arguments
    ///
    /// * `progress` - Optional progress bar, incremented once per file found.
    ///
    /// # Returns
    ///
    /// * `Result<WalkReport, AppError>` - The file paths, each one the root joined with the
    ///   entry names leading to it, plus counts of what was skipped.
    ///
    /// # Errors
    ///
    /// The walk stops at the first directory that cannot be listed or entry that cannot be
    /// classified. No partial result is returned. This includes a root that does not exist
    /// or is not a directory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use walkrs::fsutil::{WalkOptions, Walker};
    ///
    /// let report = Walker::new(Path::new("."))
    ///     .with_options(WalkOptions { max_depth: Some(2) })
    ///     .walk(None)
    ///     .unwrap();
    /// println!("Found {} files", report.files.len());
    /// ```
    pub fn walk(&self, progress: Option<&ProgressBar>) -> Result<WalkReport, AppError> {
        let mut report = WalkReport::default();
        let mut stack = vec![self.open(&self.root, 1, &mut report.stats)?];

        while let Some(listing) = stack.last_mut() {
            let depth = listing.depth;
            let Some(entry) = listing.entries.next() else {
                stack.pop();
                continue;
            };

            if !self.includes(depth) {
                continue;
            }

            match EntryKind::of(&entry)? {
                EntryKind::File => {
                    if let Some(pb) = progress {
                        pb.inc(1);
                    }
                    report.files.push(entry.path());
                }
                EntryKind::Directory => {
                    if self.descends(depth) {
                        let listing = self.open(&entry.path(), depth + 1, &mut report.stats)?;
                        stack.push(listing);
                    }
                }
                EntryKind::Symlink => report.stats.symlinks += 1,
                EntryKind::Other => report.stats.others += 1,
            }
        }

        Ok(report)
    }

    fn open(&self, dir: &Path, depth: usize, stats: &mut WalkStats) -> Result<Listing, AppError> {
        // Collect all Dir entries into a vector
        let entries = fs::read_dir(dir)
            .map_err(|e| AppError::ReadDirError(dir.to_path_buf(), e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::ReadEntryError(dir.to_path_buf(), e))?;

        stats.directories += 1;

        Ok(Listing {
            depth,
            entries: entries.into_iter(),
        })
    }

    fn includes(&self, depth: usize) -> bool {
        self.options.max_depth.map_or(true, |max| depth <= max)
    }

    fn descends(&self, depth: usize) -> bool {
        self.options.max_depth.map_or(true, |max| depth < max)
    }
}

/// Walks a directory and returns a vector of all regular file paths found.
///
/// # Arguments
///
/// * `path` - A reference to a `Path` representing the root directory to walk.
///
/// # Returns
///
/// * `Result<Vec<PathBuf>, AppError>` - A vector of all discovered file paths on success.
///
/// # Examples
///
/// ```no_run
/// use walkrs::fsutil::walk_dir;
/// use std::path::Path;
/// let files = walk_dir(Path::new(".")).unwrap();
/// println!("Found {} files", files.len());
/// ```
pub fn walk_dir(path: &Path) -> Result<Vec<PathBuf>, AppError> {
    Walker::new(path).walk(None).map(|report| report.files)
}
