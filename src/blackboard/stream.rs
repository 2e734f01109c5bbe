//! Binary stream abstraction for blackboard serialization
//!
//! The blackboard persists as "N raw bytes, N = buffer size at time of
//! serialization"; field layout is determined entirely by the external
//! element tree. Streams declare their direction up front and transfer exact
//! byte counts: a short transfer is an error, never a partial success.

use alloc::vec::Vec;
use core::fmt;

/// Errors from binary stream transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// Fewer bytes were transferred than requested
    ShortTransfer {
        /// Bytes the caller asked to transfer
        requested: usize,
        /// Bytes actually available/transferred
        transferred: usize,
    },
    /// Read attempted on a writing stream, or write on a reading stream
    WrongDirection,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::ShortTransfer {
                requested,
                transferred,
            } => write!(
                f,
                "short stream transfer: requested {} bytes, transferred {}",
                requested, transferred
            ),
            StreamError::WrongDirection => write!(f, "stream accessed against its direction"),
        }
    }
}

/// Direction-aware exact-length binary stream.
///
/// Implementations back serialization with files, sockets, flash blocks or
/// plain memory; the blackboard only requires the exact-length contract.
pub trait BinaryStream {
    /// Whether this stream supplies bytes (`true`) or consumes them.
    fn is_reading(&self) -> bool;

    /// Fill `buf` exactly, or fail without consuming a defined amount.
    fn read(&mut self, buf: &mut [u8]) -> Result<(), StreamError>;

    /// Write all of `buf`, or fail.
    fn write(&mut self, buf: &[u8]) -> Result<(), StreamError>;
}

/// In-memory binary stream.
///
/// Always available: serves both as the test double for serialization and as
/// a RAM carrier for blackboard snapshots.
///
/// # Example
///
/// ```
/// use param_blackboard::{BinaryStream, MemoryStream, ParameterBlackboard};
///
/// let mut blackboard = ParameterBlackboard::with_size(4);
/// blackboard.write_bytes(&[1, 2, 3, 4], 0);
///
/// let mut out = MemoryStream::writing();
/// blackboard.serialize(&mut out).unwrap();
///
/// let mut restored = ParameterBlackboard::with_size(4);
/// let mut input = MemoryStream::reading(out.into_bytes());
/// restored.serialize(&mut input).unwrap();
/// assert_eq!(restored, blackboard);
/// ```
#[derive(Debug)]
pub struct MemoryStream {
    bytes: Vec<u8>,
    position: usize,
    reading: bool,
}

impl MemoryStream {
    /// Create a reading stream over the given bytes.
    pub fn reading(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            position: 0,
            reading: true,
        }
    }

    /// Create an empty writing stream.
    pub fn writing() -> Self {
        Self {
            bytes: Vec::new(),
            position: 0,
            reading: false,
        }
    }

    /// Consume the stream and return its accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Bytes written so far, or bytes not yet read.
    pub fn remaining(&self) -> usize {
        if self.reading {
            self.bytes.len() - self.position
        } else {
            self.bytes.len()
        }
    }
}

impl BinaryStream for MemoryStream {
    fn is_reading(&self) -> bool {
        self.reading
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        if !self.reading {
            return Err(StreamError::WrongDirection);
        }

        let available = self.bytes.len() - self.position;
        if available < buf.len() {
            return Err(StreamError::ShortTransfer {
                requested: buf.len(),
                transferred: available,
            });
        }

        buf.copy_from_slice(&self.bytes[self.position..self.position + buf.len()]);
        self.position += buf.len();
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), StreamError> {
        if self.reading {
            return Err(StreamError::WrongDirection);
        }

        self.bytes.extend_from_slice(buf);
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
