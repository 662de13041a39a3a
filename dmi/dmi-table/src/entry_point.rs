//! # SMBIOS entry points
//!
//! The entry point is the small anchor structure that tells us which SMBIOS
//! version the firmware implements and where the structure table lives.

use crate::{TableSourceError, VersionInfo, read_u16_le, read_u32_le, read_u64_le};

/// Anchor of the 32-bit (SMBIOS 2.1+) entry point.
pub const SMBIOS2_ANCHOR: &[u8; 4] = b"_SM_";

/// Anchor of the 64-bit (SMBIOS 3.0+) entry point.
pub const SMBIOS3_ANCHOR: &[u8; 5] = b"_SM3_";

/// Anchor of the legacy DMI 2.0 entry point.
pub const DMI_ANCHOR: &[u8; 5] = b"_DMI_";

/// SMBIOS 2.1+ entry point (`_SM_`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Bits32 {
    pub major: u8,
    pub minor: u8,
    pub max_structure_size: u16,
    pub structure_table_length: u16,
    pub structure_table_address: u32,
    pub number_of_structures: u16,
    pub bcd_revision: u8,
}

impl Bits32 {
    pub const MIN_LEN: usize = 31;

    fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::MIN_LEN {
            return None;
        }

        Some(Self {
            major: buf[6],
            minor: buf[7],
            max_structure_size: read_u16_le(buf, 0x08)?,
            structure_table_length: read_u16_le(buf, 0x16)?,
            structure_table_address: read_u32_le(buf, 0x18)?,
            number_of_structures: read_u16_le(buf, 0x1C)?,
            bcd_revision: buf[0x1E],
        })
    }
}

/// SMBIOS 3.0+ entry point (`_SM3_`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Bits64 {
    pub major: u8,
    pub minor: u8,
    pub docrev: u8,
    pub entry_point_revision: u8,
    pub structure_table_max_size: u32,
    pub structure_table_address: u64,
}

impl Bits64 {
    pub const MIN_LEN: usize = 24;

    fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::MIN_LEN {
            return None;
        }

        Some(Self {
            major: buf[7],
            minor: buf[8],
            docrev: buf[9],
            entry_point_revision: buf[10],
            structure_table_max_size: read_u32_le(buf, 0x0C)?,
            structure_table_address: read_u64_le(buf, 0x10)?,
        })
    }
}

/// Legacy DMI 2.0 entry point (`_DMI_`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Legacy {
    pub structure_table_length: u16,
    pub structure_table_address: u32,
    pub number_of_structures: u16,

    /// Packed BCD: high nibble is the major, low nibble the minor version.
    pub bcd_revision: u8,
}

impl Legacy {
    pub const MIN_LEN: usize = 15;

    fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::MIN_LEN {
            return None;
        }

        Some(Self {
            structure_table_length: read_u16_le(buf, 0x06)?,
            structure_table_address: read_u32_le(buf, 0x08)?,
            number_of_structures: read_u16_le(buf, 0x0C)?,
            bcd_revision: buf[0x0E],
        })
    }
}

/// A parsed entry point of any supported flavor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EntryPoint {
    Bits32(Bits32),
    Bits64(Bits64),
    Legacy(Legacy),
}

impl EntryPoint {
    /// Version and table location described by this entry point.
    #[must_use]
    pub const fn version_info(&self) -> VersionInfo {
        match self {
            Self::Bits32(ep) => VersionInfo::new(
                ep.major,
                ep.minor,
                0,
                ep.structure_table_address as u64,
                ep.structure_table_length as u32,
            ),
            Self::Bits64(ep) => VersionInfo::new(
                ep.major,
                ep.minor,
                ep.docrev,
                ep.structure_table_address,
                ep.structure_table_max_size,
            ),
            Self::Legacy(ep) => VersionInfo::new(
                ep.bcd_revision >> 4,
                ep.bcd_revision & 0x0F,
                0,
                ep.structure_table_address as u64,
                ep.structure_table_length as u32,
            ),
        }
    }

    /// Returns `(address, size)` of the structure table.
    #[must_use]
    pub const fn table(&self) -> (u64, u32) {
        self.version_info().location()
    }
}

/// Returns `true` if `buf` starts with any known entry point anchor.
#[must_use]
pub fn has_anchor(buf: &[u8]) -> bool {
    buf.starts_with(SMBIOS2_ANCHOR) || buf.starts_with(SMBIOS3_ANCHOR) || buf.starts_with(DMI_ANCHOR)
}

/// Parse an entry point from the start of `buf`.
///
/// Trailing bytes are ignored, so `buf` may be a larger window of memory.
///
/// # Errors
/// [`TableSourceError::InvalidEntryPoint`] if the anchor is unknown or the
/// buffer is too short for the announced flavor.
pub fn parse_entry_point(buf: &[u8]) -> Result<EntryPoint, TableSourceError> {
    let ep = if buf.starts_with(SMBIOS3_ANCHOR) {
        Bits64::parse(buf).map(EntryPoint::Bits64)
    } else if buf.starts_with(SMBIOS2_ANCHOR) {
        Bits32::parse(buf).map(EntryPoint::Bits32)
    } else if buf.starts_with(DMI_ANCHOR) {
        Legacy::parse(buf).map(EntryPoint::Legacy)
    } else {
        None
    };

    let ep = ep.ok_or(TableSourceError::InvalidEntryPoint)?;
    log::debug!("SMBIOS entry point: {ep:?}");
    Ok(ep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const EP32: [u8; 31] = [
        b'_', b'S', b'M', b'_',
        0xa4,
        0x1f,
        0x02,
        0x08,
        0xd4, 0x01,
        0x00,
        0x00, 0x00, 0x00, 0x00, 0x00,
        b'_', b'D', b'M', b'I', b'_',
        0x95,
        0x5f, 0x0f,
        0x00, 0x90, 0xf0, 0x7a,
        0x43, 0x00,
        0x28,
    ];

    const EP64: [u8; 24] = [
        b'_', b'S', b'M', b'3', b'_', 0x86, 0x18, 0x03, 0x00, 0x00, 0x01, 0x00, 0x53, 0x09, 0x00,
        0x00, 0xb0, 0xb3, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn parses_32bit() {
        let ep = parse_entry_point(&EP32).unwrap();
        let EntryPoint::Bits32(got) = ep else {
            panic!("expected 32-bit entry point, got {ep:?}");
        };

        assert_eq!(got.major, 2);
        assert_eq!(got.minor, 8);
        assert_eq!(got.max_structure_size, 468);
        assert_eq!(got.structure_table_length, 3935);
        assert_eq!(got.structure_table_address, 2_062_585_856);
        assert_eq!(got.number_of_structures, 67);
        assert_eq!(got.bcd_revision, 0x28);
        assert_eq!(ep.version_info().version(), (2, 8, 0));
        assert_eq!(ep.table(), (2_062_585_856, 3935));
    }

    #[test]
    fn parses_64bit() {
        let ep = parse_entry_point(&EP64).unwrap();
        let EntryPoint::Bits64(got) = ep else {
            panic!("expected 64-bit entry point, got {ep:?}");
        };

        assert_eq!(got.entry_point_revision, 1);
        assert_eq!(ep.version_info().version(), (3, 0, 0));
        assert_eq!(ep.table(), (963_504, 2387));
    }

    #[test]
    fn parses_legacy() {
        let buf = [
            b'_', b'D', b'M', b'I', b'_', 0x00, 0x00, 0x01, 0x00, 0x00, 0x0f, 0x00, 0x12, 0x00,
            0x20,
        ];
        let ep = parse_entry_point(&buf).unwrap();
        assert!(matches!(ep, EntryPoint::Legacy(_)));
        assert_eq!(ep.version_info().version(), (2, 0, 0));
        assert_eq!(ep.table(), (0x000f_0000, 0x100));
    }

    #[test]
    fn rejects_short_or_unknown() {
        assert!(matches!(
            parse_entry_point(&[b'_', b'S', b'M', b'_', 0xff]),
            Err(TableSourceError::InvalidEntryPoint)
        ));
        assert!(matches!(
            parse_entry_point(&[b'_', b'S', b'M', b'3', b'_', 0xff]),
            Err(TableSourceError::InvalidEntryPoint)
        ));
        assert!(matches!(
            parse_entry_point(b"RSD PTR "),
            Err(TableSourceError::InvalidEntryPoint)
        ));
    }

    #[test]
    fn anchors() {
        assert!(has_anchor(&EP32));
        assert!(has_anchor(&EP64));
        assert!(has_anchor(b"_DMI_"));
        assert!(!has_anchor(b"_SM"));
    }
}
