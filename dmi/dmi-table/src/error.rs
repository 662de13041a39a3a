/// Failures while locating, opening or decoding the SMBIOS table.
#[derive(Debug, thiserror::Error)]
pub enum TableSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SMBIOS entry point not found")]
    EntryPointNotFound,

    #[error("invalid SMBIOS entry point")]
    InvalidEntryPoint,

    /// The table ended in the middle of a structure's header or formatted area.
    #[error("structure at offset {offset:#x} is truncated")]
    TruncatedStructure { offset: usize },

    /// A structure header declared a length shorter than the header itself.
    #[error("structure at offset {offset:#x} has invalid length {length}")]
    InvalidStructureLength { offset: usize, length: u8 },

    /// The string set of a structure is missing its double-NUL terminator.
    #[error("string set of structure at offset {offset:#x} is not terminated")]
    UnterminatedStrings { offset: usize },
}
