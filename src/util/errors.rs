use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read directory `{0}`: {1}")]
    ReadDirError(PathBuf, #[source] io::Error),

    #[error("Failed to read entry in `{0}`: {1}")]
    ReadEntryError(PathBuf, #[source] io::Error),

    #[error("Failed to get file type of `{0}`: {1}")]
    FileTypeError(PathBuf, #[source] io::Error),

    #[error("Error writing listing: {0}")]
    WriterError(#[source] io::Error),
}
