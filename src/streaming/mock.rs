//! Mock sink for testing

use super::MarkerSink;
use crate::error::Result;
use crate::marker::MarkerDescriptor;
use std::sync::{Arc, Mutex};

/// Recording sink for unit testing
///
/// Clones share the same record, so a test can keep a handle for
/// inspection while the scheduler owns the other.
#[derive(Clone, Default)]
pub struct MockSink {
    published: Arc<Mutex<Vec<MarkerDescriptor>>>,
}

impl MockSink {
    /// Create a new mock sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All descriptors published so far, in order
    pub fn published(&self) -> Vec<MarkerDescriptor> {
        self.published.lock().unwrap().clone()
    }
}

impl MarkerSink for MockSink {
    fn publish(&mut self, marker: &MarkerDescriptor) -> Result<()> {
        self.published.lock().unwrap().push(marker.clone());
        Ok(())
    }
}
