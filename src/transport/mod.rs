//! Transport layer for sensor I/O abstraction

use crate::error::Result;

mod mock;
mod serial;

pub use mock::MockTransport;
pub use serial::SerialTransport;

/// Bounded-wait byte source for a sensor link
pub trait Transport: Send {
    /// Read data into buffer, returns number of bytes read
    ///
    /// A return of 0 means no data arrived within the link's read
    /// timeout; it is a valid empty result, not an error.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;
}
