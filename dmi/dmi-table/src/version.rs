use core::fmt;

/// SMBIOS version and structure table location, as reported by the entry point.
///
/// This is an immutable snapshot; it never changes once a table source has
/// been opened.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct VersionInfo {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,

    /// Physical address of the structure table.
    pub table_address: u64,

    /// Size of the structure table in bytes (the maximum size for 64-bit entry points).
    pub table_size: u32,
}

impl VersionInfo {
    #[must_use]
    pub const fn new(major: u8, minor: u8, revision: u8, table_address: u64, table_size: u32) -> Self {
        Self {
            major,
            minor,
            revision,
            table_address,
            table_size,
        }
    }

    /// Returns `(major, minor, revision)`.
    #[must_use]
    pub const fn version(&self) -> (u8, u8, u8) {
        (self.major, self.minor, self.revision)
    }

    /// Returns `(address, size)` of the structure table.
    #[must_use]
    pub const fn location(&self) -> (u64, u32) {
        (self.table_address, self.table_size)
    }

    /// Whether this is SMBIOS `major.minor` or later.
    #[must_use]
    pub const fn is_at_least(&self, major: u8, minor: u8) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SMBIOS {}.{}.{} - table: address: {:#x}, size: {}",
            self.major, self.minor, self.revision, self.table_address, self.table_size
        )
    }
}
