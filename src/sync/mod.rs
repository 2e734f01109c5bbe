//! Subsystem synchronization protocol
//!
//! Each configurable element gets one syncer: an adapter that binds the
//! element to a subsystem liveness source and a hardware access delegate,
//! and runs the forward/backward synchronization protocol over the element's
//! blackboard region.
//!
//! # Protocol
//!
//! Per `sync` call:
//!
//! ```text
//! ResolveRegion → CheckLiveness → AccessHW → Success
//!                      │              │
//!                      └──────┬───────┘
//!                             ▼
//!                          Failure ──(backward only)──▶ ApplyDefaults
//! ```
//!
//! No state persists across calls; the region cursor is created fresh each
//! time. Failures are recoverable: they surface as [`SyncError`] results and
//! a warning on the element's logging channel. A failed backward sync
//! additionally rewrites the element's region with its default values, so the
//! blackboard never retains indeterminate content after a failed pull.
//! Forward failures need no fallback: the blackboard already holds the
//! intended values.

pub mod error;
pub mod hw;
pub mod set;
pub mod subsystem;
pub mod syncer;

// Re-export commonly used types
pub use error::{HwAccessError, SyncCause, SyncError};
pub use hw::{format_mapping_integer, parse_mapping_integer, HardwareAccess, NoHardwareAccess};
pub use set::SyncerSet;
pub use subsystem::{AlwaysAlive, Subsystem};
pub use syncer::{SubsystemObject, Syncer};

/// Direction of a synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Push current blackboard values out to hardware
    Forward,
    /// Pull current hardware state into the blackboard
    Backward,
}

impl SyncDirection {
    /// Short adverb used when composing diagnostics ("forward"/"back").
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncDirection::Forward => "forward",
            SyncDirection::Backward => "back",
        }
    }
}
