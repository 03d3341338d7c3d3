//! Mock system implementation for testing

use super::System;
use crate::utils::path::normalize_path;
use std::collections::{HashMap, HashSet};
use std::env::VarError;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem and environment,
/// perfect for fast, isolated unit tests without side effects.
///
/// # Example
/// ```
/// use pkgprep::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_env("USER", "myuser")
///     .with_file("/info/packages.yml", "packages: []");
///
/// assert_eq!(system.env_var("USER").unwrap(), "myuser");
/// assert!(system.exists(Path::new("/info/packages.yml")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    env_vars: HashMap<String, String>,
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                env_vars: HashMap::new(),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
            })),
        }
    }

    /// Set an environment variable (builder pattern)
    #[must_use]
    pub fn with_env(self, key: &str, value: &str) -> Self {
        {
            let mut state = self.state.write().expect("mock state poisoned");
            state.env_vars.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    /// Add a file with contents, creating parent directories (builder pattern)
    #[must_use]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &str) -> Self {
        let path_buf = path.as_ref().to_path_buf();
        {
            let mut state = self.state.write().expect("mock state poisoned");
            let mut parent = path_buf.parent();
            while let Some(dir) = parent {
                state.dirs.insert(dir.to_path_buf());
                parent = dir.parent();
            }
            state.files.insert(path_buf, contents.to_owned());
        }
        self
    }

    /// Add a directory and its parents (builder pattern)
    #[must_use]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> Self {
        {
            let mut state = self.state.write().expect("mock state poisoned");
            let mut current = Some(path.as_ref());
            while let Some(dir) = current {
                state.dirs.insert(dir.to_path_buf());
                current = dir.parent();
            }
        }
        self
    }
}

impl Default for MockSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        let state = self.state.read().expect("mock state poisoned");
        state.env_vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self.state.read().expect("mock state poisoned");
        state.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file: {}", path.display()),
            )
        })
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().expect("mock state poisoned");
        let mut current = Some(path);
        while let Some(dir) = current {
            state.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.read().expect("mock state poisoned");
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let state = self.state.read().expect("mock state poisoned");
        state.dirs.contains(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        // No symlinks in the in-memory filesystem; normalizing is enough
        if self.exists(path) {
            Ok(normalize_path(path))
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such path: {}", path.display()),
            ))
        }
    }
}
