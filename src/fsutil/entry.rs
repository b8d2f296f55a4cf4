use std::fs::{DirEntry, FileType};

use crate::util::errors::AppError;

/// What a directory entry is, as reported by the directory listing itself.
///
/// Symbolic links are never resolved, so a link to a directory is a
/// `Symlink`, not a `Directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Fifos, sockets, block and character devices.
    Other,
}

impl EntryKind {
    /// Classifies a directory entry without following symbolic links.
    ///
    /// # Errors
    ///
    /// Returns `AppError::FileTypeError` if the file type of the entry cannot be read,
    /// for example when it was removed after the directory was listed.
    pub fn of(entry: &DirEntry) -> Result<Self, AppError> {
        entry
            .file_type()
            .map(Self::from)
            .map_err(|e| AppError::FileTypeError(entry.path(), e))
    }
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}
