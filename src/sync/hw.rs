//! Hardware access delegate interface
//!
//! Syncers do not talk to hardware themselves: they dispatch to an injected
//! delegate that knows the subsystem's transport and register mapping. All of
//! the delegate's blackboard traffic goes through the [`RegionCursor`] it is
//! handed, which clamps access to the element's own footprint.

use alloc::format;
use alloc::string::String;

use super::error::HwAccessError;
use crate::blackboard::RegionCursor;

/// Hardware transfer capability for one configurable element.
///
/// The default method bodies implement the no-hardware fallback:
/// [`send_to_hw`](Self::send_to_hw) fails as not implemented, and
/// [`receive_from_hw`](Self::receive_from_hw) succeeds without touching the
/// region — back synchronization trusts the live blackboard content unless a
/// delegate overrides it.
pub trait HardwareAccess {
    /// Push the element's region content out to hardware.
    ///
    /// `region` reads the element's bytes through a cursor starting at 0.
    fn send_to_hw(&mut self, region: &mut RegionCursor<'_>) -> Result<(), HwAccessError> {
        let _ = region;
        Err(HwAccessError::new(
            "Send to HW interface not implemented at subsystem level",
        ))
    }

    /// Pull hardware state into the element's region.
    ///
    /// The default is a no-op success: blackboard content is trusted.
    fn receive_from_hw(&mut self, region: &mut RegionCursor<'_>) -> Result<(), HwAccessError> {
        let _ = region;
        Ok(())
    }

    /// Formatted mapping metadata for diagnostics (e.g. a register address).
    ///
    /// Not used by the protocol itself; defaults to empty.
    fn formatted_mapping_value(&self) -> String {
        String::new()
    }
}

/// Delegate taking every [`HardwareAccess`] default.
///
/// Forward sync through it always fails; backward sync is a trusted no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHardwareAccess;

impl HardwareAccess for NoHardwareAccess {}

/// Parse a mapping value as an integer.
///
/// Follows C `strtoul` base-0 conventions as used by mapping descriptions:
/// `0x`/`0X` prefix is hexadecimal, a leading `0` is octal, anything else is
/// decimal. Returns `None` for malformed input.
pub fn parse_mapping_integer(value: &str) -> Option<u64> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if value.len() > 1 && value.starts_with('0') {
        u64::from_str_radix(&value[1..], 8).ok()
    } else {
        value.parse().ok()
    }
}

/// Render an integer mapping value as its decimal string form.
pub fn format_mapping_integer(value: u64) -> String {
    format!("{}", value)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_send_fails_not_implemented() {
        let mut delegate = NoHardwareAccess;
        let mut bytes = [0u8; 4];
        let mut cursor = RegionCursor::new(&mut bytes);

        let err = delegate.send_to_hw(&mut cursor).unwrap_err();
        assert!(err.message().contains("not implemented"));
    }

    #[test]
    fn default_receive_is_trusted_noop() {
        let mut delegate = NoHardwareAccess;
        let mut bytes = [0x5Au8; 4];
        let mut cursor = RegionCursor::new(&mut bytes);

        delegate.receive_from_hw(&mut cursor).unwrap();
        assert_eq!(bytes, [0x5A; 4]);
    }

    #[test]
    fn default_mapping_value_is_empty() {
        assert_eq!(NoHardwareAccess.formatted_mapping_value(), "");
    }

    #[test]
    fn parse_mapping_integer_bases() {
        assert_eq!(parse_mapping_integer("42"), Some(42));
        assert_eq!(parse_mapping_integer("0x2A"), Some(42));
        assert_eq!(parse_mapping_integer("0X2a"), Some(42));
        assert_eq!(parse_mapping_integer("052"), Some(42));
        assert_eq!(parse_mapping_integer("0"), Some(0));
        assert_eq!(parse_mapping_integer(" 7 "), Some(7));
        assert_eq!(parse_mapping_integer("bogus"), None);
        assert_eq!(parse_mapping_integer("0xZZ"), None);
    }

    #[test]
    fn format_mapping_integer_decimal() {
        assert_eq!(format_mapping_integer(42), "42");
    }
}
