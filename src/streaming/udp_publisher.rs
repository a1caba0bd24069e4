//! UDP publisher for marker descriptors
//!
//! Unicasts each descriptor to the configured consumer as a single
//! length-prefixed datagram. Unicast keeps the traffic off hosts that
//! never asked for it; at one datagram per 500 ms tick there is no
//! need for batching or a dedicated sender thread.

use super::{MarkerSink, Serializer};
use crate::error::{Error, Result};
use crate::marker::MarkerDescriptor;
use std::net::{SocketAddr, UdpSocket};

/// Expected upper bound for one datagram (4-byte length prefix plus
/// serialized descriptor, ~250 bytes of JSON typical)
const MAX_DATAGRAM_SIZE: usize = 1024;

/// UDP publisher that streams descriptors to one consumer
pub struct UdpMarkerPublisher {
    socket: UdpSocket,
    target: SocketAddr,
    serializer: Serializer,
    /// Reused per send to avoid an allocation per datagram
    send_buffer: Vec<u8>,
}

impl UdpMarkerPublisher {
    /// Create a new UDP publisher
    ///
    /// Binds an ephemeral local port; this end only sends.
    pub fn new(target_address: &str, serializer: Serializer) -> Result<Self> {
        let target: SocketAddr = target_address
            .parse()
            .map_err(|_| Error::InvalidAddress(target_address.to_string()))?;

        let socket = UdpSocket::bind("0.0.0.0:0")?;

        log::info!("Marker publisher ready, streaming to {}", target);

        Ok(Self {
            socket,
            target,
            serializer,
            send_buffer: Vec::with_capacity(MAX_DATAGRAM_SIZE),
        })
    }
}

impl MarkerSink for UdpMarkerPublisher {
    /// Send one descriptor as `[4-byte length (big-endian)] + [payload]`
    fn publish(&mut self, marker: &MarkerDescriptor) -> Result<()> {
        let payload = self.serializer.serialize(marker)?;
        let len = (payload.len() as u32).to_be_bytes();

        self.send_buffer.clear();
        self.send_buffer.extend_from_slice(&len);
        self.send_buffer.extend_from_slice(&payload);

        self.socket.send_to(&self.send_buffer, self.target)?;

        Ok(())
    }
}
