//! Parameter blackboard storage
//!
//! The blackboard is a flat, size-fixed byte buffer holding the live binary
//! image of all configuration parameter values. This module provides the
//! buffer itself, the endian-aware scalar/string codec layered on top of it,
//! bounded region views for subsystem access, and whole-buffer serialization
//! through an abstract binary stream.
//!
//! # Layout ownership
//!
//! The blackboard has no knowledge of which byte ranges belong to which
//! configurable elements. Offsets and footprints are computed by the external
//! element tree, which guarantees regions never overlap. The buffer trusts
//! its callers' offset arithmetic: any out-of-bounds access is a programming
//! defect and panics rather than being clamped or partially applied.

pub mod buffer;
pub mod region;
pub mod stream;

// Re-export commonly used types
pub use buffer::ParameterBlackboard;
pub use region::{Region, RegionCursor};
pub use stream::{BinaryStream, MemoryStream, StreamError};
