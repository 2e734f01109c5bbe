#![cfg_attr(not(test), no_std)]

//! param_blackboard - Parameter blackboard and subsystem synchronization core
//!
//! This library provides the binary parameter store ("blackboard") and the
//! per-element synchronization protocol that keeps blackboard regions
//! consistent with external subsystem/hardware state.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │           SyncerSet                    │
//! │  (element → syncer relation,           │
//! │   bulk forward/backward sync)          │
//! └──────────────┬─────────────────────────┘
//!                │
//!                ▼
//! ┌────────────────────────────────────────┐
//! │        SubsystemObject                 │
//! │  - Subsystem liveness check            │
//! │  - HardwareAccess dispatch             │
//! │  - Default-value fallback              │
//! └──────────────┬─────────────────────────┘
//!                │ RegionCursor
//!                ▼
//! ┌────────────────────────────────────────┐
//! │      ParameterBlackboard               │
//! │  - Owned byte buffer                   │
//! │  - Endian-aware integer/string codec   │
//! │  - Snapshot copy and serialization     │
//! └────────────────────────────────────────┘
//! ```
//!
//! The blackboard knows nothing about synchronization; syncers know nothing
//! about byte layout beyond their own element's offset and footprint. Region
//! layout (offsets, footprints, non-overlap) is computed by an external
//! configurable-element tree and is not this crate's concern.
//!
//! # Error model
//!
//! Bounds violations (bad offset arithmetic, cursor overrun, unterminated
//! strings) are programming-contract breaches and panic. Synchronization
//! failures (subsystem down, hardware access refused) are environmental and
//! surface as [`SyncError`] results.

extern crate alloc;

// Blackboard storage and codec
pub mod blackboard;

// Configurable element collaborator interface
pub mod element;

// Mock collaborators for testing
pub mod mock;

// Synchronization protocol
pub mod sync;

// Re-export commonly used types
pub use blackboard::{
    BinaryStream, MemoryStream, ParameterBlackboard, Region, RegionCursor, StreamError,
};
pub use element::{ConfigurableElement, StaticElement};
pub use sync::{
    AlwaysAlive, HardwareAccess, HwAccessError, NoHardwareAccess, Subsystem, SubsystemObject,
    SyncCause, SyncDirection, SyncError, Syncer, SyncerSet,
};
