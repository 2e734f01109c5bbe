//! Synchronization failure types
//!
//! Sync failures are environmental, not programming defects: they carry a
//! human-readable diagnostic and are always consumed as explicit results.
//! Contract breaches (bad offsets, cursor overruns) panic instead and never
//! appear here.

use alloc::string::String;
use core::fmt;

use super::SyncDirection;

/// Failure reported by a hardware access delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HwAccessError {
    message: String,
}

impl HwAccessError {
    /// Wrap a delegate's diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The delegate's diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HwAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Underlying cause of a failed synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCause {
    /// The owning subsystem reported itself not alive; hardware access was
    /// not attempted
    SubsystemNotAlive,
    /// The hardware access delegate refused the transfer
    Hardware(HwAccessError),
}

impl fmt::Display for SyncCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncCause::SubsystemNotAlive => write!(f, "Subsystem not alive"),
            SyncCause::Hardware(err) => err.fmt(f),
        }
    }
}

/// Failed synchronization pass for one configurable element.
///
/// Display output carries full context: direction, element path and the
/// underlying cause, e.g.
/// `Unable to back synchronize configurable element /radio/power: Subsystem not alive`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncError {
    /// Direction of the failed pass
    pub direction: SyncDirection,
    /// Path of the element whose sync failed
    pub path: String,
    /// Underlying cause
    pub cause: SyncCause,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to {} synchronize configurable element {}: {}",
            self.direction.as_str(),
            self.path,
            self.cause
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn sync_error_message_carries_full_context() {
        let err = SyncError {
            direction: SyncDirection::Backward,
            path: "/radio/power".to_string(),
            cause: SyncCause::SubsystemNotAlive,
        };
        assert_eq!(
            err.to_string(),
            "Unable to back synchronize configurable element /radio/power: Subsystem not alive"
        );
    }

    #[test]
    fn forward_hardware_cause_message() {
        let err = SyncError {
            direction: SyncDirection::Forward,
            path: "/imu/range".to_string(),
            cause: SyncCause::Hardware(HwAccessError::new("bus timeout")),
        };
        let message = err.to_string();
        assert!(message.contains("forward synchronize"));
        assert!(message.contains("/imu/range"));
        assert!(message.contains("bus timeout"));
    }
}
