//! # Field registry
//!
//! Static map from [`Keyword`] to the structure type and byte offset holding
//! its value. Offsets match `dmidecode`'s string option table and count from
//! the start of the structure, header included.

use crate::Keyword;

/// SMBIOS structure types that own a queryable field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RecordType {
    Bios = 0,
    System = 1,
    Baseboard = 2,
    Chassis = 3,
    Processor = 4,
}

impl RecordType {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// How the bytes at a field's offset turn into text.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FieldKind {
    /// One-byte index into the structure's string set.
    String,
    /// Two bytes `major.minor`, ending at the offset.
    Revision,
    /// 16-byte system UUID.
    Uuid,
    /// Chassis type enumeration with lock bit.
    ChassisType,
    /// Processor family, possibly via the extended family word.
    ProcessorFamily,
    /// Little-endian MHz word.
    ProcessorFrequency,
}

/// Location and decoding rule of a single keyword.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FieldDescriptor {
    pub keyword: Keyword,
    pub record_type: RecordType,

    /// Offset from the start of the structure, including the 4-byte header.
    pub offset: u8,

    pub kind: FieldKind,
}

const fn field(keyword: Keyword, record_type: RecordType, offset: u8, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        keyword,
        record_type,
        offset,
        kind,
    }
}

/// One descriptor per keyword, in [`Keyword::ALL`] order.
static FIELDS: [FieldDescriptor; 25] = {
    use crate::Keyword as W;
    use crate::registry::{FieldKind as K, RecordType as T};

    [
        field(W::BiosVendor, T::Bios, 0x04, K::String),
        field(W::BiosVersion, T::Bios, 0x05, K::String),
        field(W::BiosReleaseDate, T::Bios, 0x08, K::String),
        field(W::BiosRevision, T::Bios, 0x15, K::Revision),
        field(W::FirmwareRevision, T::Bios, 0x17, K::Revision),
        field(W::SystemManufacturer, T::System, 0x04, K::String),
        field(W::SystemProductName, T::System, 0x05, K::String),
        field(W::SystemVersion, T::System, 0x06, K::String),
        field(W::SystemSerialNumber, T::System, 0x07, K::String),
        field(W::SystemUuid, T::System, 0x08, K::Uuid),
        field(W::SystemFamily, T::System, 0x1A, K::String),
        field(W::BaseboardManufacturer, T::Baseboard, 0x04, K::String),
        field(W::BaseboardProductName, T::Baseboard, 0x05, K::String),
        field(W::BaseboardVersion, T::Baseboard, 0x06, K::String),
        field(W::BaseboardSerialNumber, T::Baseboard, 0x07, K::String),
        field(W::BaseboardAssetTag, T::Baseboard, 0x08, K::String),
        field(W::ChassisManufacturer, T::Chassis, 0x04, K::String),
        field(W::ChassisType, T::Chassis, 0x05, K::ChassisType),
        field(W::ChassisVersion, T::Chassis, 0x06, K::String),
        field(W::ChassisSerialNumber, T::Chassis, 0x07, K::String),
        field(W::ChassisAssetTag, T::Chassis, 0x08, K::String),
        field(W::ProcessorFamily, T::Processor, 0x06, K::ProcessorFamily),
        field(W::ProcessorManufacturer, T::Processor, 0x07, K::String),
        field(W::ProcessorVersion, T::Processor, 0x10, K::String),
        field(W::ProcessorFrequency, T::Processor, 0x16, K::ProcessorFrequency),
    ]
};

/// All field descriptors, in [`Keyword::ALL`] order.
#[must_use]
pub fn fields() -> &'static [FieldDescriptor] {
    &FIELDS
}

/// Find the descriptor for a keyword name; `None` if the name is not a keyword.
#[must_use]
pub fn lookup(keyword: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|d| d.keyword.as_str() == keyword)
}

impl Keyword {
    /// The descriptor of this keyword.
    #[must_use]
    pub fn descriptor(self) -> &'static FieldDescriptor {
        // FIELDS is laid out in declaration order of the enum.
        &FIELDS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_keyword_order() {
        assert_eq!(FIELDS.len(), Keyword::ALL.len());
        for (d, k) in FIELDS.iter().zip(Keyword::ALL) {
            assert_eq!(d.keyword, k);
            assert_eq!(k.descriptor(), d);
        }
    }

    #[test]
    fn lookup_is_total_over_keywords() {
        for k in Keyword::ALL {
            let matches = FIELDS.iter().filter(|d| d.keyword == k).count();
            assert_eq!(matches, 1, "{k} must have exactly one descriptor");
            assert_eq!(lookup(k.as_str()).map(|d| d.keyword), Some(k));
        }
    }

    #[test]
    fn lookup_unknown_is_none() {
        assert!(lookup("not-a-real-keyword").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("bios").is_none());
        assert!(lookup("Bios-Vendor").is_none());
    }

    #[test]
    fn offsets_are_past_header() {
        for d in fields() {
            assert!(usize::from(d.offset) >= dmi_table::HEADER_LEN, "{}", d.keyword);
        }
    }

    #[test]
    fn spot_check_offsets() {
        let d = lookup("system-uuid").unwrap();
        assert_eq!((d.record_type, d.offset, d.kind), (RecordType::System, 0x08, FieldKind::Uuid));

        let d = lookup("firmware-revision").unwrap();
        assert_eq!((d.record_type, d.offset), (RecordType::Bios, 0x17));

        let d = lookup("processor-frequency").unwrap();
        assert_eq!(d.record_type.as_u8(), 4);
        assert_eq!(d.offset, 0x16);
    }
}
