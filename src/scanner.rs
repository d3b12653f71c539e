use crate::error::ScanError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, FilterEntry, WalkDir};

/// Name of the metadata directory that marks a repository root
pub const GIT_DIR: &str = ".git";

/// A directory is a repository root when it directly holds a `.git` directory
pub fn is_repository_root(dir: &Path) -> bool {
    dir.join(GIT_DIR).is_dir()
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
}

/// Lazily walks a directory tree and yields repository roots
///
/// Directories are visited in file-name order. Once a directory is found to be
/// a repository root the walk does not descend into it, so repositories nested
/// in another repository's working tree are not reported. Unreadable
/// directories and symlink loops are yielded as errors and the walk goes on.
pub struct RepoScanner {
    walker: FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
}

impl RepoScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, ScanError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(is_dir as fn(&DirEntry) -> bool);

        Ok(Self { walker })
    }
}

impl Iterator for RepoScanner {
    type Item = Result<PathBuf, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source.path().map(Path::to_path_buf).unwrap_or_default();
                    return Some(Err(ScanError::Traversal { path, source }));
                }
            };

            if is_repository_root(entry.path()) {
                log::info!("Found git directory in: {}", entry.path().display());
                self.walker.skip_current_dir();
                return Some(Ok(entry.into_path()));
            }

            log::debug!("Entering directory: {}", entry.path().display());
        }
    }
}
