//! Element regions and bounded cursor access
//!
//! A region describes the byte range one configurable element claims in the
//! blackboard. Layout (offsets, footprints, non-overlap) is computed by the
//! external element tree; regions here are plain descriptors.
//!
//! `RegionCursor` is the bounded view hardware access delegates use: all of
//! their blackboard traffic goes through it, so a delegate can never read or
//! write outside its own element's claimed bytes regardless of what its
//! implementation does internally.

/// Byte range claimed by one configurable element.
///
/// Non-owning and copyable; never overlaps another element's region by
/// construction of the external layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    offset: usize,
    size: usize,
}

impl Region {
    /// Create a region descriptor.
    pub fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    /// Start offset in the blackboard.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Footprint size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// One past the last byte of the region.
    pub fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// Mutable view of one region's bytes with a read/write cursor.
///
/// The cursor starts at 0 and advances with each access. Cumulative access
/// beyond the region size indicates a defect in the hardware access delegate
/// and panics.
///
/// # Example
///
/// ```
/// use param_blackboard::{ParameterBlackboard, Region};
///
/// let mut blackboard = ParameterBlackboard::with_size(8);
/// let mut cursor = blackboard.region_cursor(Region::new(2, 4));
///
/// cursor.write(&[0x11, 0x22]);
/// cursor.write(&[0x33, 0x44]);
/// assert_eq!(cursor.remaining(), 0);
/// ```
#[derive(Debug)]
pub struct RegionCursor<'a> {
    bytes: &'a mut [u8],
    position: usize,
}

impl<'a> RegionCursor<'a> {
    /// Wrap a region's bytes, cursor at 0.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Region footprint in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the region is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Current cursor position, relative to the region start.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the region end.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Reset the cursor to the region start.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Copy `dst.len()` bytes from the cursor into `dst`, advancing the
    /// cursor.
    ///
    /// # Panics
    ///
    /// Panics if the read would pass the region end.
    pub fn read(&mut self, dst: &mut [u8]) {
        self.assert_in_footprint(dst.len());
        dst.copy_from_slice(&self.bytes[self.position..self.position + dst.len()]);
        self.position += dst.len();
    }

    /// Copy `src` into the region at the cursor, advancing the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the write would pass the region end.
    pub fn write(&mut self, src: &[u8]) {
        self.assert_in_footprint(src.len());
        self.bytes[self.position..self.position + src.len()].copy_from_slice(src);
        self.position += src.len();
    }

    fn assert_in_footprint(&self, size: usize) {
        assert!(
            self.position + size <= self.bytes.len(),
            "region cursor overrun: position {} access {} footprint {}",
            self.position,
            size,
            self.bytes.len()
        );
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
