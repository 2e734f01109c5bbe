//! Syncer collection for bulk synchronization
//!
//! The element→syncer relation is held explicitly here rather than as a
//! back-pointer inside each element: adapters are registered into the set and
//! looked up by element path. Whole-configuration synchronization runs every
//! registered syncer, continuing past failures so one dead subsystem cannot
//! mask another's diagnostics.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::error::SyncError;
use super::syncer::Syncer;
use super::SyncDirection;
use crate::blackboard::ParameterBlackboard;

/// Owning collection of the syncers of one configuration.
#[derive(Default)]
pub struct SyncerSet {
    syncers: Vec<Box<dyn Syncer>>,
}

impl SyncerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            syncers: Vec::new(),
        }
    }

    /// Register an element's syncer.
    pub fn add(&mut self, syncer: Box<dyn Syncer>) {
        self.syncers.push(syncer);
    }

    /// Unregister and return the syncer bound to the element at `path`.
    pub fn remove(&mut self, path: &str) -> Option<Box<dyn Syncer>> {
        let index = self.syncers.iter().position(|s| s.path() == path)?;
        Some(self.syncers.remove(index))
    }

    /// Look up the syncer bound to the element at `path`.
    pub fn get(&self, path: &str) -> Option<&dyn Syncer> {
        self.syncers
            .iter()
            .find(|s| s.path() == path)
            .map(|s| s.as_ref())
    }

    /// Number of registered syncers.
    pub fn len(&self) -> usize {
        self.syncers.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.syncers.is_empty()
    }

    /// Total footprint of all registered elements, in bytes.
    pub fn footprint(&self) -> usize {
        self.syncers.iter().map(|s| s.footprint()).sum()
    }

    /// Run one synchronization pass over every registered syncer.
    ///
    /// Failures do not stop the pass; every failed element's error is
    /// collected and returned together.
    pub fn sync_all(
        &mut self,
        blackboard: &mut ParameterBlackboard,
        direction: SyncDirection,
    ) -> Result<(), Vec<SyncError>> {
        let mut errors = Vec::new();
        for syncer in &mut self.syncers {
            if let Err(error) = syncer.sync(blackboard, direction) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Write every registered element's default values into the blackboard.
    pub fn set_default_values(&self, blackboard: &mut ParameterBlackboard) {
        for syncer in &self.syncers {
            syncer.set_default_values(blackboard);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::StaticElement;
    use crate::mock::MockSubsystem;
    use crate::sync::hw::NoHardwareAccess;
    use crate::sync::syncer::SubsystemObject;

    fn set_of_two() -> SyncerSet {
        let mut set = SyncerSet::new();
        set.add(Box::new(SubsystemObject::new(
            StaticElement::new("/a", 0, alloc::vec![1, 2]),
            MockSubsystem::alive(),
            NoHardwareAccess,
        )));
        set.add(Box::new(SubsystemObject::new(
            StaticElement::new("/b", 2, alloc::vec![3, 4]),
            MockSubsystem::dead(),
            NoHardwareAccess,
        )));
        set
    }

    #[test]
    fn lookup_and_remove_by_path() {
        let mut set = set_of_two();
        assert_eq!(set.len(), 2);
        assert_eq!(set.footprint(), 4);
        assert!(set.get("/a").is_some());
        assert!(set.get("/missing").is_none());

        let removed = set.remove("/a").unwrap();
        assert_eq!(removed.path(), "/a");
        assert_eq!(set.len(), 1);
        assert!(set.get("/a").is_none());
    }

    #[test]
    fn sync_all_continues_past_failures() {
        let mut set = set_of_two();
        let mut blackboard = ParameterBlackboard::with_size(4);

        // /a succeeds (trusted no-op receive), /b fails (dead subsystem)
        let errors = set
            .sync_all(&mut blackboard, SyncDirection::Backward)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "/b");

        // /b fell back to its defaults
        let mut region = [0u8; 2];
        blackboard.read_bytes(&mut region, 2);
        assert_eq!(region, [3, 4]);
    }

    #[test]
    fn set_default_values_covers_all_elements() {
        let set = set_of_two();
        let mut blackboard = ParameterBlackboard::with_size(4);

        set.set_default_values(&mut blackboard);

        let mut content = [0u8; 4];
        blackboard.read_bytes(&mut content, 0);
        assert_eq!(content, [1, 2, 3, 4]);
    }
}
