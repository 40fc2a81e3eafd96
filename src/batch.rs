//! Filesystem glue for converting torrents in bulk.
//!
//! This module owns all the I/O around [`convert`](crate::convert()): finding
//! `.torrent` files, reading them, and writing the collected magnet links out
//! as a text file. One unreadable or corrupt file never stops a batch;
//! failures are collected per path alongside the links that did work.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::convert::{convert, ConvertError};

/// Why one file in a batch produced no magnet link.
#[derive(Debug, Error)]
pub enum FileErrorKind {
    /// The file could not be read.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The file's contents did not convert.
    #[error("{0}")]
    Convert(#[from] ConvertError),
}

/// A single file's failure within a batch.
#[derive(Debug)]
pub struct FileError {
    pub path: PathBuf,
    pub error: FileErrorKind,
}

/// The outcome of a batch conversion.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Magnet links for the files that converted, in input order.
    pub links: Vec<String>,
    /// The files that produced no link.
    pub failures: Vec<FileError>,
}

/// Returns `true` for paths named like torrent files.
///
/// Matches on the file name's ending rather than [`Path::extension`], so a
/// bare `.torrent` dotfile counts too. Case-insensitive.
pub fn is_torrent_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".torrent"))
}

/// Recursively collects every `.torrent` file under `dir`, sorted by path.
///
/// Subdirectories that fail to read are logged and skipped; only reading
/// `dir` itself can fail the scan. Directory symlinks are not followed.
pub fn scan_torrents(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(dir, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // file_type() does not follow symlinks, so a symlinked directory is
        // never descended into.
        if entry.file_type()?.is_dir() {
            if let Err(error) = walk(&path, found) {
                warn!("skipping unreadable directory {}: {}", path.display(), error);
            }
        } else if is_torrent_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

/// Reads and converts each path, one magnet link per successful file.
///
/// Failures are collected rather than propagated, so the rest of the batch
/// still runs. Links come out in input order.
pub fn convert_files(paths: &[PathBuf]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for path in paths {
        match convert_file(path) {
            Ok(uri) => {
                debug!("converted {}", path.display());
                summary.links.push(uri);
            }
            Err(error) => {
                warn!("skipping {}: {}", path.display(), error);
                summary.failures.push(FileError {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    summary
}

fn convert_file(path: &Path) -> Result<String, FileErrorKind> {
    let data = fs::read(path)?;
    Ok(convert(&data)?)
}

/// Writes magnet links to `path`, one per line with a trailing newline.
pub fn write_magnet_list(links: &[String], path: &Path) -> io::Result<()> {
    let mut contents = links.join("\n");
    contents.push('\n');
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SIMPLE: &[u8] = b"d4:infod4:name4:test12:piece lengthi16384eee";

    #[test]
    fn test_is_torrent_file() {
        assert!(is_torrent_file(Path::new("a.torrent")));
        assert!(is_torrent_file(Path::new("A.ToRrEnT")));
        assert!(is_torrent_file(Path::new(".torrent")));
        assert!(!is_torrent_file(Path::new("a.torrent.bak")));
        assert!(!is_torrent_file(Path::new("torrent")));
    }

    #[test]
    fn test_scan_finds_nested_torrents() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();

        fs::write(temp.path().join("b.torrent"), SIMPLE).unwrap();
        fs::write(sub.join("a.TORRENT"), SIMPLE).unwrap();
        fs::write(temp.path().join("notes.txt"), b"not a torrent").unwrap();

        let paths = scan_torrents(temp.path()).unwrap();
        assert_eq!(
            paths,
            vec![temp.path().join("b.torrent"), sub.join("a.TORRENT")]
        );
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(scan_torrents(temp.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_unreadable_subdir() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("good.torrent"), SIMPLE).unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let paths = scan_torrents(temp.path());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(paths.unwrap(), vec![temp.path().join("good.torrent")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_ignores_symlinked_dirs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.torrent"), SIMPLE).unwrap();
        // A cycle back to the scanned directory must not duplicate results
        std::os::unix::fs::symlink(temp.path(), temp.path().join("selfref")).unwrap();
        // Symlinks to files are still picked up
        std::os::unix::fs::symlink(
            temp.path().join("a.torrent"),
            temp.path().join("linked.torrent"),
        )
        .unwrap();

        let paths = scan_torrents(temp.path()).unwrap();
        assert_eq!(
            paths,
            vec![
                temp.path().join("a.torrent"),
                temp.path().join("linked.torrent"),
            ]
        );
    }

    #[test]
    fn test_convert_files_collects_failures() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.torrent");
        let bad = temp.path().join("bad.torrent");
        let missing = temp.path().join("missing.torrent");
        fs::write(&good, SIMPLE).unwrap();
        fs::write(&bad, b"garbage").unwrap();

        let summary = convert_files(&[good, bad.clone(), missing.clone()]);

        assert_eq!(summary.links.len(), 1);
        assert!(summary.links[0].starts_with("magnet:?xt=urn:btih:"));

        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].path, bad);
        assert!(matches!(
            summary.failures[0].error,
            FileErrorKind::Convert(_)
        ));
        assert_eq!(summary.failures[1].path, missing);
        assert!(matches!(summary.failures[1].error, FileErrorKind::Io(_)));
    }

    #[test]
    fn test_convert_files_preserves_order() {
        let temp = TempDir::new().unwrap();
        let one = temp.path().join("one.torrent");
        let two = temp.path().join("two.torrent");
        fs::write(&one, b"d4:infod4:name3:one12:piece lengthi16384eee").unwrap();
        fs::write(&two, b"d4:infod4:name3:two12:piece lengthi16384eee").unwrap();

        let summary = convert_files(&[one, two]);
        assert_eq!(summary.links.len(), 2);
        assert!(summary.links[0].ends_with("&dn=one"));
        assert!(summary.links[1].ends_with("&dn=two"));
    }

    #[test]
    fn test_write_magnet_list() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("magnet.txt");
        let links = vec![
            "magnet:?xt=urn:btih:aaaa".to_string(),
            "magnet:?xt=urn:btih:bbbb".to_string(),
        ];

        write_magnet_list(&links, &out).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "magnet:?xt=urn:btih:aaaa\nmagnet:?xt=urn:btih:bbbb\n"
        );
    }
}
