//! Mock provider implementation for testing

use crate::info::{InfoProvider, InfoRequest, InfoSnapshot};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Mutex;

/// Recording provider for tests
///
/// Every request is recorded verbatim so tests can assert the exact call
/// shape the driver produced; the snapshot returned is canned.
pub struct MockProvider {
    snapshot: InfoSnapshot,
    requests: Mutex<Vec<InfoRequest>>,
}

impl MockProvider {
    /// Create a provider returning an empty package list
    #[must_use]
    pub fn new() -> Self {
        Self::with_snapshot(InfoSnapshot {
            packages: Vec::new(),
            info_path: PathBuf::from("packages.yml"),
        })
    }

    /// Create a provider returning the given snapshot
    #[must_use]
    pub fn with_snapshot(snapshot: InfoSnapshot) -> Self {
        Self {
            snapshot,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The requests recorded so far, in call order
    #[must_use]
    pub fn requests(&self) -> Vec<InfoRequest> {
        self.requests.lock().expect("mock state poisoned").clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoProvider for MockProvider {
    fn fetch(&self, request: &InfoRequest) -> Result<InfoSnapshot> {
        self.requests
            .lock()
            .expect("mock state poisoned")
            .push(request.clone());
        Ok(self.snapshot.clone())
    }
}
