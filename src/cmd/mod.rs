pub mod progress_bar;

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::fsutil::WalkReport;
use crate::util::errors::AppError;
use clap::Parser;
use num_format::{Locale, ToFormattedString};
use prettytable::{format::consts::FORMAT_NO_LINESEP_WITH_TITLE, row, Cell, Row, Table};

#[derive(Parser)]
#[command(name = "walkrs", version, about = "List every regular file beneath a directory", long_about = None)]
pub struct Cli {
    /// Directory to walk
    #[arg(default_value = ".", value_parser = clap::value_parser!(PathBuf))]
    pub path: PathBuf,

    /// Print one path per line instead of a single list
    #[arg(long, default_value_t = false)]
    pub lines: bool,

    /// Print a summary table after the listing
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Do not report files nested deeper than this. Entries directly under PATH are depth 1
    #[arg(long = "max-depth", short = 'd')]
    pub max_depth: Option<usize>,
}

/// Renders the files as one human-readable list, e.g. `["./a.txt", "./sub/b.txt"]`.
///
/// Bytes that are not valid UTF-8 are escaped (`\xFF`) rather than replaced, so two
/// distinct file names never render the same.
pub fn format_listing(files: &[PathBuf]) -> String {
    format!("{:?}", files)
}

/// Writes the files one per line, suitable for piping into other tools.
///
/// On unix the raw bytes of each path are written unchanged.
///
/// # Arguments
///
/// * `writer` - Destination for the listing, usually a locked stdout.
/// * `files` - Paths to write, in order.
///
/// # Returns
///
/// * `Result<(), AppError>` - `AppError::WriterError` if writing or flushing fails.
pub fn write_lines<W: Write>(writer: &mut W, files: &[PathBuf]) -> Result<(), AppError> {
    for file in files {
        writer
            .write_all(&path_bytes(file))
            .map_err(AppError::WriterError)?;
        writer.write_all(b"\n").map_err(AppError::WriterError)?;
    }
    writer.flush().map_err(AppError::WriterError)?;
    Ok(())
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_str() {
        Some(s) => Cow::Borrowed(s.as_bytes()),
        // Escape like the list form does
        None => Cow::Owned(format!("{:?}", path).trim_matches('"').as_bytes().to_vec()),
    }
}

/// Builds a summary of a walk followed by a breakdown of files per top-level entry.
///
/// The summary table includes:
/// - Number of files
/// - Number of directories walked
/// - Number of symbolic links skipped
/// - Number of other entries (fifos, sockets, devices) skipped
///
/// Files sitting directly in `root` are grouped under `.`.
///
/// # Arguments
///
/// * `report` - The result of a walk.
/// * `root` - The path the walk started from, stripped from each file before grouping.
///
/// # Example
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use walkrs::cmd::build_summary_table;
/// use walkrs::fsutil::{WalkReport, WalkStats};
///
/// let report = WalkReport {
///     files: vec![PathBuf::from("./src/main.rs")],
///     stats: WalkStats { directories: 2, symlinks: 0, others: 0 },
/// };
///
/// let table = build_summary_table(&report, Path::new("."));
/// assert!(table.contains("src"));
/// ```
pub fn build_summary_table(report: &WalkReport, root: &Path) -> String {
    let mut output = Vec::new();

    // -- Summary Table --
    output.push("\nWalk breakdown:".to_string());
    let mut summary_table = Table::new();
    summary_table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);

    summary_table.set_titles(Row::new(vec![Cell::new("Walk Summary").with_hspan(2)]));

    summary_table.add_row(row![
        "Number of files",
        report.files.len().to_formatted_string(&Locale::en)
    ]);
    summary_table.add_row(row![
        "Directories walked",
        report.stats.directories.to_formatted_string(&Locale::en)
    ]);
    summary_table.add_row(row![
        "Symlinks skipped",
        report.stats.symlinks.to_formatted_string(&Locale::en)
    ]);
    summary_table.add_row(row![
        "Other entries skipped",
        report.stats.others.to_formatted_string(&Locale::en)
    ]);

    output.push(summary_table.to_string());

    let mut dir_counts: HashMap<String, usize> = HashMap::new();
    for file in &report.files {
        *dir_counts.entry(top_level(file, root)).or_insert(0) += 1;
    }

    output.push("\nTop-level breakdown:".to_string());

    let mut breakdown_table = Table::new();
    breakdown_table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    breakdown_table.set_titles(Row::new(vec![
        Cell::new("Entry").style_spec("bFc"),
        Cell::new("File Count").style_spec("bFc"),
    ]));

    // Most files first, ties by name so the table is stable
    let mut dir_counts_vec: Vec<_> = dir_counts.into_iter().collect();
    dir_counts_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    for (dir, count) in dir_counts_vec {
        breakdown_table.add_row(row![dir, count.to_formatted_string(&Locale::en)]);
    }
    output.push(breakdown_table.to_string());

    output.join("\n")
}

/// First component of `file` below `root`, or `.` for files directly in `root`.
fn top_level(file: &Path, root: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut components = relative.components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(first)), Some(_)) => first.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}
