//! magnetize CLI - Command-line torrent-to-magnet conversion
//!
//! Turns `.torrent` files (or directories full of them) into a list of
//! magnet links, written next to the first torrent by default.

use std::path::{Path, PathBuf};

use clap::Parser;
use magnetize::batch;

#[derive(Parser)]
#[command(name = "magnetize")]
#[command(about = "Convert .torrent files into magnet links")]
struct Cli {
    /// Torrent files, or directories to scan for them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Where to write the magnet link list (default: magnet.txt next to the first torrent)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let torrents = collect_torrents(&cli.paths);
    if torrents.is_empty() {
        println!("No valid .torrent files found.");
        return Ok(());
    }

    let summary = batch::convert_files(&torrents);
    for failure in &summary.failures {
        eprintln!(
            "failed to convert {}: {}",
            failure.path.display(),
            failure.error
        );
    }

    if summary.links.is_empty() {
        println!("No magnet links produced.");
        return Ok(());
    }

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&torrents[0]));
    batch::write_magnet_list(&summary.links, &output)?;

    println!(
        "Saved {} magnet link(s) to {}",
        summary.links.len(),
        output.display()
    );

    Ok(())
}

/// Expands the command-line paths into a list of torrent files.
///
/// Directories are scanned recursively. Anything else that is not a torrent
/// file is reported and skipped.
fn collect_torrents(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut torrents = Vec::new();

    for path in paths {
        if path.is_dir() {
            match batch::scan_torrents(path) {
                Ok(found) => torrents.extend(found),
                Err(e) => eprintln!("cannot scan {}: {}", path.display(), e),
            }
        } else if batch::is_torrent_file(path) {
            torrents.push(path.clone());
        } else {
            eprintln!("skipping invalid entry: {}", path.display());
        }
    }

    torrents
}

/// `magnet.txt` in the same directory as `torrent`.
fn default_output_path(torrent: &Path) -> PathBuf {
    match torrent.parent() {
        Some(parent) => parent.join("magnet.txt"),
        None => PathBuf::from("magnet.txt"),
    }
}
