//! Parameter blackboard buffer and value codec
//!
//! Provides the owned byte buffer storing all parameter values, with
//! offset-addressed access for fixed-width integers (explicit byte order),
//! NUL-terminated strings and raw byte blocks, plus snapshot copy between
//! blackboards and whole-buffer stream serialization.

use alloc::string::String;
use alloc::vec::Vec;

use super::region::{Region, RegionCursor};
use super::stream::{BinaryStream, StreamError};

/// Flat byte buffer holding the live binary image of all parameter values.
///
/// The buffer is created empty and sized once during configuration
/// construction, before any region is handed out. Every access is strictly
/// bounds-checked; a violation indicates a layout defect and panics.
///
/// # Example
///
/// ```
/// use param_blackboard::ParameterBlackboard;
///
/// let mut blackboard = ParameterBlackboard::new();
/// blackboard.set_size(8);
///
/// blackboard.write_integer(&0x1234u16.to_ne_bytes(), 0, false);
/// let mut value = [0u8; 2];
/// blackboard.read_integer(&mut value, 0, false);
/// assert_eq!(u16::from_ne_bytes(value), 0x1234);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParameterBlackboard {
    data: Vec<u8>,
}

impl ParameterBlackboard {
    /// Create an empty blackboard.
    ///
    /// Call [`set_size`](Self::set_size) during construction to allocate
    /// storage before any element region is claimed.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a blackboard of the given size, zero-initialized.
    pub fn with_size(size: usize) -> Self {
        let mut blackboard = Self::new();
        blackboard.set_size(size);
        blackboard
    }

    /// Resize the buffer to exactly `size` bytes.
    ///
    /// Content beyond the new bound is discarded; newly added bytes are
    /// zero-initialized. Intended to be called once during the
    /// configuration-construction phase, before regions are claimed.
    pub fn set_size(&mut self, size: usize) {
        self.data.resize(size, 0);
    }

    /// Current buffer size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Write a host-order integer representation at `offset`.
    ///
    /// `src` holds the scalar's bytes in host order; its length is the field
    /// width (commonly 1, 2, 4 or 8). When `big_endian` differs from the host
    /// byte order, bytes are reversed during the copy.
    ///
    /// # Panics
    ///
    /// Panics if `offset + src.len()` exceeds the buffer size.
    pub fn write_integer(&mut self, src: &[u8], offset: usize, big_endian: bool) {
        self.assert_valid_access(offset, src.len());

        let dst = &mut self.data[offset..offset + src.len()];
        if needs_swap(big_endian) {
            for (d, s) in dst.iter_mut().zip(src.iter().rev()) {
                *d = *s;
            }
        } else {
            dst.copy_from_slice(src);
        }
    }

    /// Read an integer field at `offset` into a host-order representation.
    ///
    /// `dst.len()` is the field width. When `big_endian` differs from the
    /// host byte order, bytes are reversed during the copy.
    ///
    /// # Panics
    ///
    /// Panics if `offset + dst.len()` exceeds the buffer size.
    pub fn read_integer(&self, dst: &mut [u8], offset: usize, big_endian: bool) {
        self.assert_valid_access(offset, dst.len());

        let src = &self.data[offset..offset + dst.len()];
        if needs_swap(big_endian) {
            for (d, s) in dst.iter_mut().zip(src.iter().rev()) {
                *d = *s;
            }
        } else {
            dst.copy_from_slice(src);
        }
    }

    /// Write a string at `offset` followed by one NUL terminator.
    ///
    /// Bytes after the terminator within the element's footprint are left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `offset + value.len() + 1` exceeds the buffer size.
    pub fn write_string(&mut self, value: &str, offset: usize) {
        self.assert_valid_access(offset, value.len() + 1);

        self.data[offset..offset + value.len()].copy_from_slice(value.as_bytes());
        self.data[offset + value.len()] = 0;
    }

    /// Read the NUL-terminated string starting at `offset`.
    ///
    /// Returns the bytes between `offset` and the terminator, exclusive of
    /// the terminator itself.
    ///
    /// # Panics
    ///
    /// Panics if `offset` exceeds the buffer size, if no terminator exists
    /// before the buffer end (malformed blackboard content), or if the bytes
    /// are not valid UTF-8.
    pub fn read_string(&self, offset: usize) -> String {
        self.assert_valid_access(offset, 0);

        let tail = &self.data[offset..];
        let len = tail
            .iter()
            .position(|&b| b == 0)
            .unwrap_or_else(|| panic!("unterminated string at blackboard offset {}", offset));

        String::from_utf8(tail[..len].to_vec())
            .unwrap_or_else(|_| panic!("invalid UTF-8 string at blackboard offset {}", offset))
    }

    /// Write a raw byte block at `offset`, without endian handling.
    ///
    /// # Panics
    ///
    /// Panics if `offset + src.len()` exceeds the buffer size.
    pub fn write_bytes(&mut self, src: &[u8], offset: usize) {
        self.assert_valid_access(offset, src.len());
        self.data[offset..offset + src.len()].copy_from_slice(src);
    }

    /// Read a raw byte block at `offset`, without endian handling.
    ///
    /// # Panics
    ///
    /// Panics if `offset + dst.len()` exceeds the buffer size.
    pub fn read_bytes(&self, dst: &mut [u8], offset: usize) {
        self.assert_valid_access(offset, dst.len());
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
    }

    /// Mutable view of one element's byte region.
    ///
    /// Bounds-checked replacement for a raw location pointer: the returned
    /// slice carries the region length, so further access cannot escape the
    /// claimed bytes.
    ///
    /// # Panics
    ///
    /// Panics if the region exceeds the buffer.
    pub fn region_mut(&mut self, region: Region) -> &mut [u8] {
        self.assert_valid_access(region.offset(), region.size());
        &mut self.data[region.offset()..region.end()]
    }

    /// Shared view of one element's byte region.
    ///
    /// # Panics
    ///
    /// Panics if the region exceeds the buffer.
    pub fn region(&self, region: Region) -> &[u8] {
        self.assert_valid_access(region.offset(), region.size());
        &self.data[region.offset()..region.end()]
    }

    /// Cursor-carrying view of one element's byte region.
    ///
    /// The cursor starts at 0; hardware access delegates use it for all
    /// blackboard reads/writes so they can never touch bytes outside their
    /// own element's footprint.
    ///
    /// # Panics
    ///
    /// Panics if the region exceeds the buffer.
    pub fn region_cursor(&mut self, region: Region) -> RegionCursor<'_> {
        RegionCursor::new(self.region_mut(region))
    }

    /// Copy `source`'s full content into `self` starting at `offset`.
    ///
    /// Used to restore a configuration snapshot into the live blackboard.
    ///
    /// # Panics
    ///
    /// Panics if `offset + source.size()` exceeds the buffer size.
    pub fn restore_from(&mut self, source: &ParameterBlackboard, offset: usize) {
        self.assert_valid_access(offset, source.size());
        self.data[offset..offset + source.size()].copy_from_slice(&source.data);
    }

    /// Copy `destination.size()` bytes from `self` at `offset` into the
    /// start of `destination`.
    ///
    /// Inverse of [`restore_from`](Self::restore_from), used to capture a
    /// configuration snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `offset + destination.size()` exceeds the buffer size.
    pub fn save_to(&self, destination: &mut ParameterBlackboard, offset: usize) {
        self.assert_valid_access(offset, destination.size());
        let size = destination.size();
        destination
            .data
            .copy_from_slice(&self.data[offset..offset + size]);
    }

    /// Round-trip the whole buffer content through a binary stream.
    ///
    /// Writes the entire content to a writing stream, or reads exactly
    /// [`size`](Self::size) bytes from a reading stream into the buffer. A
    /// short transfer is propagated as an error, never silently tolerated.
    pub fn serialize<S: BinaryStream>(&mut self, stream: &mut S) -> Result<(), StreamError> {
        if stream.is_reading() {
            stream.read(&mut self.data)
        } else {
            stream.write(&self.data)
        }
    }

    fn assert_valid_access(&self, offset: usize, size: usize) {
        assert!(
            offset
                .checked_add(size)
                .is_some_and(|end| end <= self.data.len()),
            "blackboard access out of bounds: offset {} size {} buffer {}",
            offset,
            size,
            self.data.len()
        );
    }
}

/// Whether a copy between host order and the requested byte order must
/// reverse bytes.
fn needs_swap(big_endian: bool) -> bool {
    big_endian != cfg!(target_endian = "big")
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_size_zero_fills() {
        let mut blackboard = ParameterBlackboard::new();
        assert_eq!(blackboard.size(), 0);

        blackboard.set_size(16);
        assert_eq!(blackboard.size(), 16);

        let mut content = [0xAAu8; 16];
        blackboard.read_bytes(&mut content, 0);
        assert_eq!(content, [0u8; 16]);
    }

    #[test]
    fn set_size_shrink_discards_tail() {
        let mut blackboard = ParameterBlackboard::with_size(8);
        blackboard.write_bytes(&[1, 2, 3, 4, 5, 6, 7, 8], 0);

        blackboard.set_size(4);
        assert_eq!(blackboard.size(), 4);

        // Regrow: previously discarded bytes come back zeroed
        blackboard.set_size(8);
        let mut content = [0xFFu8; 8];
        blackboard.read_bytes(&mut content, 0);
        assert_eq!(content, [1, 2, 3, 4, 0, 0, 0, 0]);
    }

    #[test]
    fn integer_round_trip_all_widths() {
        let mut blackboard = ParameterBlackboard::with_size(16);

        for big_endian in [false, true] {
            blackboard.write_integer(&0xA5u8.to_ne_bytes(), 0, big_endian);
            let mut v1 = [0u8; 1];
            blackboard.read_integer(&mut v1, 0, big_endian);
            assert_eq!(u8::from_ne_bytes(v1), 0xA5);

            blackboard.write_integer(&0xBEEFu16.to_ne_bytes(), 2, big_endian);
            let mut v2 = [0u8; 2];
            blackboard.read_integer(&mut v2, 2, big_endian);
            assert_eq!(u16::from_ne_bytes(v2), 0xBEEF);

            blackboard.write_integer(&0xDEADBEEFu32.to_ne_bytes(), 4, big_endian);
            let mut v4 = [0u8; 4];
            blackboard.read_integer(&mut v4, 4, big_endian);
            assert_eq!(u32::from_ne_bytes(v4), 0xDEADBEEF);

            blackboard.write_integer(&0x0123_4567_89AB_CDEFu64.to_ne_bytes(), 8, big_endian);
            let mut v8 = [0u8; 8];
            blackboard.read_integer(&mut v8, 8, big_endian);
            assert_eq!(u64::from_ne_bytes(v8), 0x0123_4567_89AB_CDEF);
        }
    }

    #[test]
    fn integer_endian_mismatch_swaps_bytes() {
        let mut blackboard = ParameterBlackboard::with_size(8);

        blackboard.write_integer(&0x01020304u32.to_ne_bytes(), 0, true);
        let mut value = [0u8; 4];
        blackboard.read_integer(&mut value, 0, false);
        assert_eq!(u32::from_ne_bytes(value), 0x04030201);
    }

    #[test]
    fn integer_big_endian_buffer_layout() {
        let mut blackboard = ParameterBlackboard::with_size(4);
        blackboard.write_integer(&0x01020304u32.to_ne_bytes(), 0, true);

        // Big-endian storage: most significant byte first
        let mut raw = [0u8; 4];
        blackboard.read_bytes(&mut raw, 0);
        assert_eq!(raw, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn string_round_trip() {
        let mut blackboard = ParameterBlackboard::with_size(32);

        blackboard.write_string("codec", 3);
        assert_eq!(blackboard.read_string(3), "codec");

        // Terminator occupies one byte past the content
        let mut terminator = [0xFFu8; 1];
        blackboard.read_bytes(&mut terminator, 3 + 5);
        assert_eq!(terminator, [0]);
    }

    #[test]
    fn empty_string_round_trip() {
        let mut blackboard = ParameterBlackboard::with_size(4);
        blackboard.write_string("", 2);
        assert_eq!(blackboard.read_string(2), "");
    }

    #[test]
    #[should_panic(expected = "unterminated string")]
    fn unterminated_string_panics() {
        let mut blackboard = ParameterBlackboard::with_size(4);
        blackboard.write_bytes(&[b'a', b'b', b'c', b'd'], 0);
        let _ = blackboard.read_string(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn write_integer_out_of_bounds_panics() {
        let mut blackboard = ParameterBlackboard::with_size(4);
        blackboard.write_integer(&0u32.to_ne_bytes(), 1, false);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn read_integer_out_of_bounds_panics() {
        let blackboard = ParameterBlackboard::with_size(2);
        let mut value = [0u8; 4];
        blackboard.read_integer(&mut value, 0, false);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn write_string_without_terminator_room_panics() {
        let mut blackboard = ParameterBlackboard::with_size(4);
        // 4 content bytes + terminator needs 5
        blackboard.write_string("abcd", 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn region_out_of_bounds_panics() {
        let mut blackboard = ParameterBlackboard::with_size(8);
        let _ = blackboard.region_mut(Region::new(6, 4));
    }

    #[test]
    fn snapshot_restore_then_save_round_trips() {
        let mut live = ParameterBlackboard::with_size(16);
        let mut snapshot = ParameterBlackboard::with_size(4);
        snapshot.write_bytes(&[0xDE, 0xAD, 0xBE, 0xEF], 0);

        live.restore_from(&snapshot, 8);

        let mut captured = ParameterBlackboard::with_size(4);
        live.save_to(&mut captured, 8);
        assert_eq!(captured, snapshot);
    }

    #[test]
    fn restore_does_not_touch_surrounding_bytes() {
        let mut live = ParameterBlackboard::with_size(8);
        live.write_bytes(&[1, 2, 3, 4, 5, 6, 7, 8], 0);

        let mut snapshot = ParameterBlackboard::with_size(2);
        snapshot.write_bytes(&[0xAA, 0xBB], 0);
        live.restore_from(&snapshot, 3);

        let mut content = [0u8; 8];
        live.read_bytes(&mut content, 0);
        assert_eq!(content, [1, 2, 3, 0xAA, 0xBB, 6, 7, 8]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn restore_from_larger_snapshot_panics() {
        let mut live = ParameterBlackboard::with_size(4);
        let snapshot = ParameterBlackboard::with_size(8);
        live.restore_from(&snapshot, 0);
    }
}
