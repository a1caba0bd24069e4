//! Marker publishing: the sink seam plus the UDP implementation

use crate::error::Result;
use crate::marker::MarkerDescriptor;

mod mock;
mod udp_publisher;
pub mod wire;

pub use mock::MockSink;
pub use udp_publisher::UdpMarkerPublisher;
pub use wire::{Serializer, WireFormat};

/// Publish collaborator for classified descriptors
///
/// Fire-and-forget from the scheduler's perspective: at most one
/// descriptor per tick, no queuing or backpressure.
pub trait MarkerSink: Send {
    /// Hand one descriptor to the consumer
    fn publish(&mut self, marker: &MarkerDescriptor) -> Result<()>;
}
