//! # SMBIOS/DMI Table Source
//!
//! This crate locates and decodes the SMBIOS (System Management BIOS) table,
//! the firmware-provided inventory of the platform's hardware. It produces
//! an immutable snapshot that higher layers (keyword resolution, reporting)
//! consume without ever touching firmware memory themselves.
//!
//! ## Architecture
//!
//! ```text
//! Platform (sysfs / /dev/mem / dump file)
//!     ↓
//! Entry Point ("_SM_", "_SM3_" or legacy "_DMI_")
//!     ↓
//! Structure Table (raw byte stream)
//!     ↓
//! Records { type, length, handle, formatted bytes, strings }
//! ```
//!
//! ## Key Components
//!
//! ### Entry Point Parsing ([`entry_point`])
//! * **32-bit (`_SM_`)**: SMBIOS 2.1+ with a 32-bit table address
//! * **64-bit (`_SM3_`)**: SMBIOS 3.0+ with a 64-bit table address
//! * **Legacy (`_DMI_`)**: DMI 2.0 with a BCD-encoded revision
//!
//! Checksums are not validated; the entry point is only read for the
//! version and the table location.
//!
//! ### Structure Decoding ([`structure`])
//! Splits the table into [`Record`]s. Every record starts with a 4-byte
//! header, followed by the formatted area and a double-NUL terminated
//! string set. Decoding stops at the end-of-table structure (type 127) or
//! when the input is exhausted.
//!
//! ### Table Sources (`sources` feature)
//! The `TableSource` trait abstracts where the table comes from:
//! * `SysfsSource`: `/sys/firmware/dmi/tables` on Linux
//! * `DevMemSource`: scans the legacy BIOS area of `/dev/mem`
//! * `DumpFileSource`: files written by `dmidecode --dump-bin`
//! * `MemorySource`: entry point and table bytes held in memory
//! * `PlatformSource`: sysfs first, `/dev/mem` as fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! # #[cfg(feature = "sources")]
//! # fn main() -> Result<(), dmi_table::TableSourceError> {
//! use dmi_table::{Decoder, PlatformSource, TableSource};
//!
//! let (stream, version) = PlatformSource::default().open()?;
//! let records = Decoder::new(stream).decode()?;
//! println!("{version}: {} structures", records.len());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sources"))]
//! # fn main() {}
//! ```

pub mod entry_point;
mod error;
#[cfg(feature = "sources")]
mod source;
pub mod structure;
mod version;

pub use entry_point::{EntryPoint, parse_entry_point};
pub use error::TableSourceError;
#[cfg(feature = "sources")]
pub use source::{
    Decoder, DevMemSource, DumpFileSource, MemorySource, PlatformSource, SysfsSource, TableSource,
};
pub use structure::{HEADER_LEN, Record, decode_structures};
pub use version::VersionInfo;

#[inline]
fn read_u16_le(buf: &[u8], off: usize) -> Option<u16> {
    let s = buf.get(off..off.checked_add(2)?)?;
    Some(u16::from_le_bytes([s[0], s[1]]))
}

#[inline]
fn read_u32_le(buf: &[u8], off: usize) -> Option<u32> {
    let s = buf.get(off..off.checked_add(4)?)?;
    Some(u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}

#[inline]
fn read_u64_le(buf: &[u8], off: usize) -> Option<u64> {
    let s = buf.get(off..off.checked_add(8)?)?;
    Some(u64::from_le_bytes([
        s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
    ]))
}
