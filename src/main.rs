use walkrs::cmd::progress_bar::create_spinner;
use walkrs::cmd::{build_summary_table, format_listing, write_lines, Cli};
use walkrs::fsutil::{WalkOptions, Walker};

use clap::Parser;
use colored::*;
use std::io;

fn main() {
    let cli = Cli::parse();
    let root = cli.path.as_path();

    let files_spinner = create_spinner("Finding Files");

    let report = Walker::new(root)
        .with_options(WalkOptions {
            max_depth: cli.max_depth,
        })
        .walk(Some(&files_spinner))
        .unwrap_or_else(|e| {
            files_spinner.finish_and_clear();
            eprintln!("{}: {e}", "Failed to list files".red());
            std::process::exit(1);
        });
    files_spinner.finish_and_clear();

    if cli.lines {
        if let Err(e) = write_lines(&mut io::stdout().lock(), &report.files) {
            eprintln!("{}: {e}", "Failed to print files".red());
            std::process::exit(1);
        }
    } else {
        println!("{}", format_listing(&report.files));
    }

    if cli.summary {
        println!("{}", build_summary_table(&report, root));
    }
}
