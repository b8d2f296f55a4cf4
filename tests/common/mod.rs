use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Guards the process working directory while a tree is being built
static CWD: Mutex<()> = Mutex::new(());

/// Builds a tree under `root` whose deepest directory cannot be listed by anyone, root
/// included, because its full path is longer than `PATH_MAX`.
///
/// The tree holds `visible.txt` directly under `root` and `buried.txt` at the bottom.
/// Returns the path of `visible.txt`.
pub fn build_overlong_tree(root: &Path) -> PathBuf {
    let _guard = CWD.lock().unwrap_or_else(|e| e.into_inner());
    let original = env::current_dir().unwrap();

    let visible = root.join("visible.txt");
    File::create(&visible).unwrap();

    // Each step is relative to the last, so no single call sees the full path
    env::set_current_dir(root).unwrap();
    let name = "d".repeat(200);
    for _ in 0..25 {
        fs::create_dir(&name).unwrap();
        env::set_current_dir(&name).unwrap();
    }
    File::create("buried.txt").unwrap();

    env::set_current_dir(original).unwrap();
    visible
}
