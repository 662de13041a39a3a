//! # DMI Keyword Resolution
//!
//! Answers `dmidecode -s KEYWORD` style questions ("what is the BIOS
//! vendor?", "what is the system UUID?") from a decoded SMBIOS table.
//!
//! ## Architecture
//!
//! ```text
//! keyword ──► Field Registry ──► (record type, offset, kind)
//!                                      │
//!                     first record of that type in the table
//!                                      │
//!                        offset < length? ──no──► ""
//!                                      │
//!                              Field Decoder ──► String
//! ```
//!
//! ## Key Components
//!
//! ### Keywords and Registry ([`Keyword`], [`registry`])
//! 25 keywords, each mapped to a structure type (0 through 4), a byte offset
//! counted from the start of the structure, and a decoding rule.
//!
//! ### Field Decoders ([`decode`])
//! * **String**: one-byte index into the string set, `"Not Specified"` for 0
//! * **Revision**: `major.minor` byte pair, empty when either byte is `0xFF`
//! * **UUID**: byte order depends on the SMBIOS version (2.6 and later are
//!   little-endian in the first three fields)
//! * **Chassis type**: 7-bit enumeration plus lock bit
//! * **Processor family**: table lookup with the extended family word and
//!   the manufacturer-dependent `0xBE` code
//! * **Processor frequency**: MHz word, `"Unknown"` for 0
//!
//! ### Resolver ([`DmiTable`])
//! Owns the records and version info. Construction is the only fallible
//! step; queries never fail and return `""` when there is nothing to report.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn main() -> Result<(), dmi_decode::Error> {
//! use dmi_decode::DmiTable;
//! use dmi_table::PlatformSource;
//!
//! let table = DmiTable::new(&PlatformSource::default())?;
//! println!("{}", table.version());
//! println!("{}", table.query("system-product-name"));
//! # Ok(())
//! # }
//! ```

pub mod decode;
mod error;
mod keyword;
pub mod registry;
mod table;

pub use error::Error;
pub use keyword::{Keyword, UnknownKeyword};
pub use registry::{FieldDescriptor, FieldKind, RecordType};
pub use table::DmiTable;
