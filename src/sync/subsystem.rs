//! Subsystem liveness interface
//!
//! The subsystem object proper (hardware transport, connection management)
//! lives outside this crate; syncers only need to know whether the subsystem
//! can currently be reached.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;

/// Liveness source for a hardware subsystem.
///
/// Queried at the start of every sync pass; a dead subsystem short-circuits
/// the pass without attempting hardware access.
pub trait Subsystem {
    /// Whether the subsystem is currently reachable.
    fn is_alive(&self) -> bool;
}

// Shared-ownership wrappers delegate, so one subsystem instance can back
// the many syncers of its elements.

impl<S: Subsystem + ?Sized> Subsystem for Arc<S> {
    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }
}

impl<S: Subsystem + ?Sized> Subsystem for Rc<S> {
    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }
}

impl<S: Subsystem + ?Sized> Subsystem for Box<S> {
    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }
}

impl<S: Subsystem + ?Sized> Subsystem for &S {
    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }
}

/// Subsystem that is always reachable.
///
/// Useful when hardware access cannot fail at the liveness level, or when a
/// syncer's delegate performs its own reachability handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysAlive;

impl Subsystem for AlwaysAlive {
    fn is_alive(&self) -> bool {
        true
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_alive_is_alive() {
        assert!(AlwaysAlive.is_alive());
    }

    #[test]
    fn shared_wrappers_delegate() {
        let subsystem = Arc::new(AlwaysAlive);
        assert!(subsystem.is_alive());
        assert!((&AlwaysAlive).is_alive());

        let boxed: Box<dyn Subsystem> = Box::new(AlwaysAlive);
        assert!(boxed.is_alive());
    }
}
