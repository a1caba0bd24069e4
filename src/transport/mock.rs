//! Mock transport for testing

use super::Transport;
use crate::error::Result;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock transport for unit testing
///
/// Clones share the same buffer, so a test can keep a handle for
/// injecting bytes while the scheduler owns the other.
#[derive(Clone, Default)]
pub struct MockTransport {
    read_buffer: Arc<Mutex<VecDeque<u8>>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject data to be read
    pub fn inject_read(&self, data: &[u8]) {
        let mut buffer = self.read_buffer.lock().unwrap();
        buffer.extend(data);
    }
}

impl Transport for MockTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut read_buffer = self.read_buffer.lock().unwrap();
        let available = read_buffer.len().min(buffer.len());

        for item in buffer.iter_mut().take(available) {
            *item = read_buffer.pop_front().unwrap();
        }

        Ok(available)
    }
}
