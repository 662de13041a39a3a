use super::{OUT_OF_SPEC, byte_at};
use bitfield_struct::bitfield;
use dmi_table::Record;

/// Chassis type byte of a type 3 structure.
#[bitfield(u8)]
pub struct ChassisTypeByte {
    /// Bits 0-6: chassis type code.
    #[bits(7)]
    pub code: u8,

    /// Bit 7: a chassis lock is present.
    pub lock: bool,
}

/// Chassis type names for codes `0x01..=0x24`.
pub static CHASSIS_TYPES: [&str; 0x24] = [
    "Other", // 0x01
    "Unknown",
    "Desktop",
    "Low Profile Desktop",
    "Pizza Box",
    "Mini Tower",
    "Tower",
    "Portable",
    "Laptop",
    "Notebook",
    "Hand Held",
    "Docking Station",
    "All In One",
    "Sub Notebook",
    "Space-saving",
    "Lunch Box",
    "Main Server Chassis",
    "Expansion Chassis",
    "Sub Chassis",
    "Bus Expansion Chassis",
    "Peripheral Chassis",
    "RAID Chassis",
    "Rack Mount Chassis",
    "Sealed-case PC",
    "Multi-system",
    "CompactPCI",
    "AdvancedTCA",
    "Blade",
    "Blade Enclosing",
    "Tablet",
    "Convertible",
    "Detachable",
    "IoT Gateway",
    "Embedded PC",
    "Mini PC",
    "Stick PC", // 0x24
];

/// Name of a chassis type byte; the lock bit is ignored.
#[must_use]
pub fn chassis_type_name(raw: u8) -> &'static str {
    let code = ChassisTypeByte::from_bits(raw).code();
    usize::from(code)
        .checked_sub(1)
        .and_then(|i| CHASSIS_TYPES.get(i))
        .copied()
        .unwrap_or(OUT_OF_SPEC)
}

#[must_use]
pub fn decode_chassis_type(record: &Record, offset: u8) -> Option<String> {
    let raw = byte_at(record, offset)?;
    log::trace!("chassis type byte: {:?}", ChassisTypeByte::from_bits(raw));
    Some(chassis_type_name(raw).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::record;

    #[test]
    fn every_defined_code_has_a_name() {
        for code in 0x01u8..=0x24 {
            assert_eq!(
                chassis_type_name(code),
                CHASSIS_TYPES[usize::from(code) - 1],
                "code {code:#04x}"
            );
        }
        assert_eq!(chassis_type_name(0x01), "Other");
        assert_eq!(chassis_type_name(0x09), "Laptop");
        assert_eq!(chassis_type_name(0x11), "Main Server Chassis");
        assert_eq!(chassis_type_name(0x24), "Stick PC");
    }

    #[test]
    fn lock_bit_is_masked() {
        assert_eq!(chassis_type_name(0x80 | 0x09), "Laptop");
        assert_eq!(chassis_type_name(0x80 | 0x03), "Desktop");

        let b = ChassisTypeByte::from_bits(0x8A);
        assert!(b.lock());
        assert_eq!(b.code(), 0x0A);
    }

    #[test]
    fn out_of_spec_codes() {
        assert_eq!(chassis_type_name(0x00), OUT_OF_SPEC);
        assert_eq!(chassis_type_name(0x80), OUT_OF_SPEC);
        for code in 0x25u8..=0x7F {
            assert_eq!(chassis_type_name(code), OUT_OF_SPEC, "code {code:#04x}");
            assert_eq!(chassis_type_name(code | 0x80), OUT_OF_SPEC);
        }
    }

    #[test]
    fn decodes_from_record() {
        let r = record(3, &[0x01, 0x09], &["Acme"]);
        assert_eq!(decode_chassis_type(&r, 0x05).as_deref(), Some("Laptop"));
        assert_eq!(decode_chassis_type(&r, 0x06), None);
    }
}
