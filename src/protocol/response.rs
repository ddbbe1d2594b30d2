//! Raw response buffer
//!
//! What a single read from the transport produced.

use bytes::Bytes;

use super::RESPONSE_BUFFER_SIZE;

/// A fixed-capacity response buffer filled by one read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The whole buffer, zero-filled past `received`
    buffer: Bytes,

    /// Number of bytes the read returned
    received: usize,
}

impl RawResponse {
    /// Wrap a buffer of which the first `received` bytes were read
    pub fn new(buffer: impl Into<Bytes>, received: usize) -> Self {
        let buffer = buffer.into();
        let received = received.min(buffer.len());
        Self { buffer, received }
    }

    /// Build a zero-padded response buffer from a payload.
    ///
    /// Payloads longer than [`RESPONSE_BUFFER_SIZE`] are truncated, the same
    /// way a single read would truncate them.
    pub fn padded(payload: &[u8]) -> Self {
        let received = payload.len().min(RESPONSE_BUFFER_SIZE);
        let mut buffer = vec![0u8; RESPONSE_BUFFER_SIZE];
        buffer[..received].copy_from_slice(&payload[..received]);
        Self::new(buffer, received)
    }

    /// The full buffer including the zero fill
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Only the bytes that were actually received
    pub fn received(&self) -> &[u8] {
        &self.buffer[..self.received]
    }

    /// Number of bytes received
    pub fn len(&self) -> usize {
        self.received
    }

    pub fn is_empty(&self) -> bool {
        self.received == 0
    }
}
