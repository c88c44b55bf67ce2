use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::ScanError;

/// One item yielded while walking the input tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEntry {
    Directory { path: PathBuf },
    File { path: PathBuf, name: String },
    Error { path: Option<PathBuf>, message: String },
}

/// Recursive walk over every directory and file below a root.
pub struct DirectoryScanner {
    input_directory: PathBuf,
    follow_links: bool,
}

impl DirectoryScanner {
    pub fn new<P: AsRef<Path>>(input_directory: P) -> Self {
        Self {
            input_directory: input_directory.as_ref().to_path_buf(),
            follow_links: false,
        }
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Walks the tree below the root, which itself is never yielded.
    ///
    /// Entries come in file-name order within each directory. Errors raised
    /// mid-walk (unreadable directories, symlink loops) are yielded as
    /// [`ScanEntry::Error`] and the walk carries on.
    pub fn entries(&self) -> Result<impl Iterator<Item = ScanEntry>, ScanError> {
        if !self.input_directory.exists() {
            return Err(ScanError::RootNotFound(self.input_directory.clone()));
        }
        if !self.input_directory.is_dir() {
            return Err(ScanError::NotADirectory(self.input_directory.clone()));
        }

        debug!(
            "Scanning {} (follow_links={})",
            self.input_directory.display(),
            self.follow_links
        );

        let walker = WalkDir::new(&self.input_directory)
            .min_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        Ok(walker.into_iter().map(|result| match result {
            Ok(entry) => classify(entry),
            Err(e) => {
                let path = e.path().map(Path::to_path_buf);
                warn!("Scan error: {}", e);
                ScanEntry::Error {
                    path,
                    message: e.to_string(),
                }
            }
        }))
    }
}

fn classify(entry: DirEntry) -> ScanEntry {
    // An unfollowed symlink to a directory still counts as a directory.
    let is_dir =
        entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir());

    if is_dir {
        ScanEntry::Directory {
            path: entry.into_path(),
        }
    } else {
        let name = entry.file_name().to_string_lossy().into_owned();
        ScanEntry::File {
            path: entry.into_path(),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collect(scanner: &DirectoryScanner) -> Vec<ScanEntry> {
        scanner.entries().unwrap().collect()
    }

    fn file_names(entries: &[ScanEntry]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|e| match e {
                ScanEntry::File { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    fn directory_count(entries: &[ScanEntry]) -> usize {
        entries
            .iter()
            .filter(|e| matches!(e, ScanEntry::Directory { .. }))
            .count()
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = DirectoryScanner::new(temp_dir.path());

        assert!(collect(&scanner).is_empty());
    }

    #[test]
    fn test_scan_yields_every_file_type() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("doc1.pdf"), b"PDF content").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), b"Text content").unwrap();
        std::fs::write(temp_dir.path().join("unknown.xyz"), b"Unknown").unwrap();

        let scanner = DirectoryScanner::new(temp_dir.path());
        let entries = collect(&scanner);

        assert_eq!(file_names(&entries), ["doc1.pdf", "notes.txt", "unknown.xyz"]);
        assert_eq!(directory_count(&entries), 0);
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir(temp_dir.path().join("c")).unwrap();
        std::fs::write(nested.join("deep.pdf"), b"deep").unwrap();
        std::fs::write(temp_dir.path().join("top.pdf"), b"top").unwrap();

        let scanner = DirectoryScanner::new(temp_dir.path());
        let entries = collect(&scanner);

        assert_eq!(directory_count(&entries), 3);
        assert_eq!(file_names(&entries), ["deep.pdf", "top.pdf"]);
    }

    #[test]
    fn test_scan_file_entries_carry_full_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        std::fs::write(temp_dir.path().join("sub").join("x.pdf"), b"x").unwrap();

        let scanner = DirectoryScanner::new(temp_dir.path());
        let entries = collect(&scanner);

        assert!(entries.contains(&ScanEntry::File {
            path: temp_dir.path().join("sub").join("x.pdf"),
            name: "x.pdf".to_string(),
        }));
    }

    #[test]
    fn test_scan_missing_root() {
        let scanner = DirectoryScanner::new("/nonexistent/pdfwords/root");
        assert!(matches!(
            scanner.entries(),
            Err(ScanError::RootNotFound(_))
        ));
    }

    #[test]
    fn test_scan_root_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.pdf");
        std::fs::write(&file, b"x").unwrap();

        let scanner = DirectoryScanner::new(&file);
        assert!(matches!(
            scanner.entries(),
            Err(ScanError::NotADirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unfollowed_directory_symlink_counts_as_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        std::fs::write(target.path().join("inner.pdf"), b"x").unwrap();
        std::os::unix::fs::symlink(target.path(), temp_dir.path().join("link")).unwrap();

        let scanner = DirectoryScanner::new(temp_dir.path());
        let entries = collect(&scanner);
        assert_eq!(directory_count(&entries), 1);
        assert!(file_names(&entries).is_empty());

        let following = DirectoryScanner::new(temp_dir.path()).follow_links(true);
        let entries = collect(&following);
        assert_eq!(directory_count(&entries), 1);
        assert_eq!(file_names(&entries), ["inner.pdf"]);
    }
}
