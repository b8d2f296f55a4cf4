use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Creates and configures a spinner for displaying file listing progress.
///
/// The spinner updates every 500 milliseconds, cycles through a sequence of dots and shows
/// the number of files found so far. It draws to stderr so the listing on stdout stays clean.
///
/// # Arguments
///
/// * `message` - A static string slice used as the message prefix displayed alongside the spinner.
///
/// # Returns
///
/// * `ProgressBar` - A configured `ProgressBar` spinner instance ready for use.
///
/// # Example
///
/// ```
/// use walkrs::cmd::progress_bar::create_spinner;
/// let pb = create_spinner("Finding Files");
/// pb.inc(1);
/// pb.finish_and_clear();
/// ```
pub fn create_spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(500)); // update spinner every 500ms
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[".", "..", "...", "...."])
            .template("{msg} ({pos} found) {spinner}")
            .unwrap(),
    );
    pb
}
