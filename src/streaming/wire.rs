//! Wire format serialization for published descriptors
//!
//! Each datagram is length-prefixed:
//!
//! ```text
//! ┌──────────────────┬──────────────────────────┐
//! │ Length (4 bytes) │ Payload (variable)       │
//! │ Big-endian u32   │ JSON or Postcard binary  │
//! └──────────────────┴──────────────────────────┘
//! ```
//!
//! JSON is the default (human-readable, easy to debug from any
//! language); Postcard is the compact binary alternative for
//! constrained links.

use crate::error::{Error, Result};
use crate::marker::MarkerDescriptor;
use serde::{Deserialize, Serialize};

/// Supported wire formats
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// Binary format using postcard - fast and compact
    Postcard,
    /// JSON format - human-readable for debugging
    #[default]
    Json,
}

/// Serializer that can handle both formats
#[derive(Debug, Clone)]
pub struct Serializer {
    format: WireFormat,
}

impl Serializer {
    /// Create a new serializer for the given format
    pub fn new(format: WireFormat) -> Self {
        Self { format }
    }

    /// Serialize a descriptor to payload bytes
    pub fn serialize(&self, marker: &MarkerDescriptor) -> Result<Vec<u8>> {
        match self.format {
            WireFormat::Postcard => {
                postcard::to_allocvec(marker).map_err(|e| Error::Serialization(e.to_string()))
            }
            WireFormat::Json => {
                serde_json::to_vec(marker).map_err(|e| Error::Serialization(e.to_string()))
            }
        }
    }

    /// Deserialize payload bytes back into a descriptor
    pub fn deserialize(&self, bytes: &[u8]) -> Result<MarkerDescriptor> {
        match self.format {
            WireFormat::Postcard => {
                postcard::from_bytes(bytes).map_err(|e| Error::Serialization(e.to_string()))
            }
            WireFormat::Json => {
                serde_json::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))
            }
        }
    }
}
