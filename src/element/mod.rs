//! Configurable element collaborator interface
//!
//! The configurable-element tree lives outside this crate: it parses
//! configuration descriptions, computes each element's blackboard offset and
//! footprint, and guarantees regions never overlap. This module defines the
//! contract an element must satisfy for a syncer to operate on its behalf,
//! plus a minimal concrete element for layouts known at construction time.

use alloc::string::String;
use alloc::vec::Vec;

use crate::blackboard::Region;

/// Contract a configurable element satisfies toward its syncer.
///
/// Supplies the element's blackboard region, its diagnostic path, its
/// statically-known default values, and its logging channel.
pub trait ConfigurableElement {
    /// Hierarchical element path, used in diagnostics.
    fn path(&self) -> &str;

    /// Byte offset of the element's region in the blackboard.
    fn offset(&self) -> usize;

    /// Footprint size in bytes.
    fn footprint(&self) -> usize;

    /// Write the element's default configuration values into its region.
    ///
    /// `region` is exactly [`footprint`](Self::footprint) bytes long; the
    /// element cannot reach outside its own claimed range.
    fn apply_defaults(&self, region: &mut [u8]);

    /// The element's blackboard region descriptor.
    fn region(&self) -> Region {
        Region::new(self.offset(), self.footprint())
    }

    /// Emit an informational message on the element's logging channel.
    fn log_info(&self, message: &str) {
        log::info!("{}: {}", self.path(), message);
    }

    /// Emit a warning on the element's logging channel.
    fn log_warning(&self, message: &str) {
        log::warn!("{}: {}", self.path(), message);
    }
}

/// Concrete element with a fixed layout and owned default values.
///
/// Footprint equals the default-value length. Suitable for layouts known at
/// construction time and for exercising syncers in tests.
///
/// # Example
///
/// ```
/// use param_blackboard::{ConfigurableElement, StaticElement};
///
/// let element = StaticElement::new("/vehicle/radio/power", 4, vec![0x10, 0x00]);
/// assert_eq!(element.footprint(), 2);
///
/// let mut region = [0u8; 2];
/// element.apply_defaults(&mut region);
/// assert_eq!(region, [0x10, 0x00]);
/// ```
#[derive(Debug, Clone)]
pub struct StaticElement {
    path: String,
    offset: usize,
    defaults: Vec<u8>,
}

impl StaticElement {
    /// Create an element at `offset` whose footprint and default content are
    /// given by `defaults`.
    pub fn new(path: impl Into<String>, offset: usize, defaults: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            offset,
            defaults,
        }
    }

    /// The element's default configuration bytes.
    pub fn defaults(&self) -> &[u8] {
        &self.defaults
    }
}

impl ConfigurableElement for StaticElement {
    fn path(&self) -> &str {
        &self.path
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn footprint(&self) -> usize {
        self.defaults.len()
    }

    fn apply_defaults(&self, region: &mut [u8]) {
        assert!(
            region.len() == self.defaults.len(),
            "default values for {} are {} bytes, region is {}",
            self.path,
            self.defaults.len(),
            region.len()
        );
        region.copy_from_slice(&self.defaults);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_element_layout() {
        let element = StaticElement::new("/sys/gain", 12, alloc::vec![1, 2, 3, 4]);
        assert_eq!(element.path(), "/sys/gain");
        assert_eq!(element.offset(), 12);
        assert_eq!(element.footprint(), 4);
        assert_eq!(element.region(), Region::new(12, 4));
    }

    #[test]
    fn apply_defaults_fills_region() {
        let element = StaticElement::new("/sys/mode", 0, alloc::vec![0xAA, 0xBB]);
        let mut region = [0u8; 2];
        element.apply_defaults(&mut region);
        assert_eq!(region, [0xAA, 0xBB]);
    }

    #[test]
    #[should_panic(expected = "region is")]
    fn apply_defaults_region_size_mismatch_panics() {
        let element = StaticElement::new("/sys/mode", 0, alloc::vec![0xAA, 0xBB]);
        let mut region = [0u8; 3];
        element.apply_defaults(&mut region);
    }
}
