//! Per-element synchronization adapter
//!
//! One [`SubsystemObject`] exists per configurable element. It binds the
//! element to its subsystem's liveness source and hardware access delegate,
//! and runs the forward/backward protocol over the element's blackboard
//! region.

use alloc::string::{String, ToString};

use super::error::{SyncCause, SyncError};
use super::hw::HardwareAccess;
use super::subsystem::Subsystem;
use super::SyncDirection;
use crate::blackboard::ParameterBlackboard;
use crate::element::ConfigurableElement;

/// Object-safe synchronization interface.
///
/// Lets heterogeneous adapters (different element, subsystem and delegate
/// types) live in one collection; see [`SyncerSet`](super::SyncerSet).
pub trait Syncer {
    /// Run one synchronization pass for the bound element.
    fn sync(
        &mut self,
        blackboard: &mut ParameterBlackboard,
        direction: SyncDirection,
    ) -> Result<(), SyncError>;

    /// Footprint size of the bound element, in bytes.
    fn footprint(&self) -> usize;

    /// Diagnostic path of the bound element.
    fn path(&self) -> &str;

    /// Write the element's default values into its blackboard region,
    /// bypassing hardware access entirely.
    fn set_default_values(&self, blackboard: &mut ParameterBlackboard);

    /// Formatted mapping metadata for diagnostics; empty unless the
    /// delegate surfaces any.
    fn formatted_mapping_value(&self) -> String;
}

/// Synchronization adapter binding one element to its subsystem and
/// hardware access delegate.
///
/// Carries no per-call state: the region cursor is created fresh on every
/// [`sync`](Syncer::sync), so calls on different adapters over disjoint
/// regions are independent.
///
/// # Example
///
/// ```
/// use param_blackboard::{
///     AlwaysAlive, NoHardwareAccess, ParameterBlackboard, StaticElement, SubsystemObject,
///     SyncDirection, Syncer,
/// };
///
/// let element = StaticElement::new("/radio/power", 0, vec![0x10]);
/// let mut syncer = SubsystemObject::new(element, AlwaysAlive, NoHardwareAccess);
///
/// let mut blackboard = ParameterBlackboard::with_size(1);
/// // Default receive trusts blackboard content: backward sync succeeds
/// assert!(syncer.sync(&mut blackboard, SyncDirection::Backward).is_ok());
/// ```
#[derive(Debug)]
pub struct SubsystemObject<E, S, H> {
    element: E,
    subsystem: S,
    hw: H,
}

impl<E, S, H> SubsystemObject<E, S, H>
where
    E: ConfigurableElement,
    S: Subsystem,
    H: HardwareAccess,
{
    /// Bind an element to its subsystem and hardware access delegate.
    pub fn new(element: E, subsystem: S, hw: H) -> Self {
        Self {
            element,
            subsystem,
            hw,
        }
    }

    /// The bound configurable element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The bound subsystem liveness source.
    pub fn subsystem(&self) -> &S {
        &self.subsystem
    }

    /// The bound hardware access delegate.
    pub fn hardware(&self) -> &H {
        &self.hw
    }

    /// Release the adapter, returning the bound element.
    ///
    /// The adapter's lifetime is independent of, and typically shorter than,
    /// the element's.
    pub fn into_element(self) -> E {
        self.element
    }

    fn access_hw(
        &mut self,
        blackboard: &mut ParameterBlackboard,
        direction: SyncDirection,
    ) -> Result<(), SyncCause> {
        if !self.subsystem.is_alive() {
            return Err(SyncCause::SubsystemNotAlive);
        }

        let mut cursor = blackboard.region_cursor(self.element.region());
        let result = match direction {
            SyncDirection::Backward => self.hw.receive_from_hw(&mut cursor),
            SyncDirection::Forward => self.hw.send_to_hw(&mut cursor),
        };
        result.map_err(SyncCause::Hardware)
    }
}

impl<E, S, H> Syncer for SubsystemObject<E, S, H>
where
    E: ConfigurableElement,
    S: Subsystem,
    H: HardwareAccess,
{
    fn sync(
        &mut self,
        blackboard: &mut ParameterBlackboard,
        direction: SyncDirection,
    ) -> Result<(), SyncError> {
        let cause = match self.access_hw(blackboard, direction) {
            Ok(()) => return Ok(()),
            Err(cause) => cause,
        };

        let error = SyncError {
            direction,
            path: self.element.path().to_string(),
            cause,
        };
        self.element.log_warning(&error.to_string());

        // A failed pull must not leave stale hardware state in the
        // blackboard; fall back to the element's defaults. A failed push
        // needs no fallback: the blackboard already holds the intended
        // values.
        if direction == SyncDirection::Backward {
            self.set_default_values(blackboard);
        }

        Err(error)
    }

    fn footprint(&self) -> usize {
        self.element.footprint()
    }

    fn path(&self) -> &str {
        self.element.path()
    }

    fn set_default_values(&self, blackboard: &mut ParameterBlackboard) {
        let region = blackboard.region_mut(self.element.region());
        self.element.apply_defaults(region);
    }

    fn formatted_mapping_value(&self) -> String {
        self.hw.formatted_mapping_value()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
