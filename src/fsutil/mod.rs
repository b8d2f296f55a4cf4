pub mod directory;
pub mod entry;

pub use directory::{walk_dir, WalkOptions, WalkReport, WalkStats, Walker};
pub use entry::EntryKind;
