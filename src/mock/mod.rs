//! Mock collaborators for testing
//!
//! This module provides mock implementations of the subsystem and hardware
//! access interfaces so syncer behavior can be exercised without hardware.
//!
//! # Feature Gate
//!
//! Available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::blackboard::RegionCursor;
use crate::sync::{HardwareAccess, HwAccessError, Subsystem};

/// Subsystem with scripted liveness.
///
/// # Example
///
/// ```
/// use param_blackboard::mock::MockSubsystem;
/// use param_blackboard::Subsystem;
///
/// let subsystem = MockSubsystem::alive();
/// assert!(subsystem.is_alive());
///
/// subsystem.set_alive(false);
/// assert!(!subsystem.is_alive());
/// ```
#[derive(Debug, Default)]
pub struct MockSubsystem {
    alive: Cell<bool>,
}

impl MockSubsystem {
    /// Create a subsystem reporting itself alive.
    pub fn alive() -> Self {
        Self {
            alive: Cell::new(true),
        }
    }

    /// Create a subsystem reporting itself dead.
    pub fn dead() -> Self {
        Self {
            alive: Cell::new(false),
        }
    }

    /// Script the liveness state for subsequent sync passes.
    pub fn set_alive(&self, alive: bool) {
        self.alive.set(alive);
    }
}

impl Subsystem for MockSubsystem {
    fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

/// Hardware access delegate with scripted results and traffic recording.
///
/// Forward sync drains the element's region into an internal log; backward
/// sync fills the region from scripted hardware bytes. Either direction can
/// be scripted to fail with a given diagnostic.
#[derive(Debug, Default)]
pub struct MockHardware {
    send_error: Option<String>,
    receive_error: Option<String>,
    hw_bytes: Vec<u8>,
    sent: RefCell<Vec<Vec<u8>>>,
    send_count: Cell<usize>,
    receive_count: Cell<usize>,
    mapping_value: String,
}

impl MockHardware {
    /// Create a delegate where both directions succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script forward sync to fail with `message`.
    pub fn failing_send(message: impl Into<String>) -> Self {
        Self {
            send_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Script backward sync to fail with `message`.
    pub fn failing_receive(message: impl Into<String>) -> Self {
        Self {
            receive_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Script the hardware state a successful backward sync reports.
    ///
    /// Must be exactly the element's footprint.
    pub fn with_hw_bytes(bytes: Vec<u8>) -> Self {
        Self {
            hw_bytes: bytes,
            ..Self::default()
        }
    }

    /// Script the diagnostic mapping value.
    pub fn with_mapping_value(value: impl Into<String>) -> Self {
        Self {
            mapping_value: value.into(),
            ..Self::default()
        }
    }

    /// Region contents captured by successful forward syncs, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.borrow().clone()
    }

    /// Number of forward transfer attempts.
    pub fn send_count(&self) -> usize {
        self.send_count.get()
    }

    /// Number of backward transfer attempts.
    pub fn receive_count(&self) -> usize {
        self.receive_count.get()
    }
}

impl HardwareAccess for MockHardware {
    fn send_to_hw(&mut self, region: &mut RegionCursor<'_>) -> Result<(), HwAccessError> {
        self.send_count.set(self.send_count.get() + 1);
        if let Some(message) = &self.send_error {
            return Err(HwAccessError::new(message.clone()));
        }

        let mut bytes = alloc::vec![0u8; region.remaining()];
        region.read(&mut bytes);
        self.sent.borrow_mut().push(bytes);
        Ok(())
    }

    fn receive_from_hw(&mut self, region: &mut RegionCursor<'_>) -> Result<(), HwAccessError> {
        self.receive_count.set(self.receive_count.get() + 1);
        if let Some(message) = &self.receive_error {
            return Err(HwAccessError::new(message.clone()));
        }

        region.write(&self.hw_bytes);
        Ok(())
    }

    fn formatted_mapping_value(&self) -> String {
        self.mapping_value.clone()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_subsystem_scripted_liveness() {
        let subsystem = MockSubsystem::dead();
        assert!(!subsystem.is_alive());
        subsystem.set_alive(true);
        assert!(subsystem.is_alive());
    }

    #[test]
    fn mock_hardware_records_sent_region() {
        let mut hw = MockHardware::new();
        let mut bytes = [0xAB, 0xCD];
        let mut cursor = RegionCursor::new(&mut bytes);

        hw.send_to_hw(&mut cursor).unwrap();
        assert_eq!(hw.sent(), alloc::vec![alloc::vec![0xAB, 0xCD]]);
        assert_eq!(hw.send_count(), 1);
    }

    #[test]
    fn mock_hardware_scripted_receive_bytes() {
        let mut hw = MockHardware::with_hw_bytes(alloc::vec![7, 8, 9]);
        let mut bytes = [0u8; 3];
        let mut cursor = RegionCursor::new(&mut bytes);

        hw.receive_from_hw(&mut cursor).unwrap();
        assert_eq!(bytes, [7, 8, 9]);
        assert_eq!(hw.receive_count(), 1);
    }

    #[test]
    fn mock_hardware_scripted_failures() {
        let mut hw = MockHardware::failing_send("bus timeout");
        let mut bytes = [0u8; 1];
        let mut cursor = RegionCursor::new(&mut bytes);

        let err = hw.send_to_hw(&mut cursor).unwrap_err();
        assert_eq!(err.message(), "bus timeout");
        assert_eq!(hw.send_count(), 1);
    }

    #[test]
    fn mock_hardware_mapping_value() {
        let hw = MockHardware::with_mapping_value("reg 0x42");
        assert_eq!(hw.formatted_mapping_value(), "reg 0x42");
    }
}
