// Path-addressed backing storage for the drawings engine.

use std::io;
use std::path::{Path, PathBuf};

/// Name-addressed byte storage the engine persists through.
///
/// Implementations must tolerate concurrent readers; the engine itself only
/// ever writes from the single ResultLog worker task.
pub trait Storage: Send + Sync {
    /// Whether a resource with this name currently exists.
    fn exists(&self, name: &str) -> bool;

    /// Read the full contents of a resource as UTF-8 text.
    fn read_to_string(&self, name: &str) -> io::Result<String>;

    /// Replace the resource's contents entirely (create + truncate).
    fn write(&self, name: &str, contents: &str) -> io::Result<()>;
}

/// Filesystem-backed storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(DirectoryStorage { root })
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for DirectoryStorage {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).exists()
    }

    fn read_to_string(&self, name: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(name))
    }

    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        std::fs::write(self.resolve(name), contents)
    }
}
