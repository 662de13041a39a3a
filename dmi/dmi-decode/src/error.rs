use dmi_table::TableSourceError;

/// Building a [`DmiTable`](crate::DmiTable) failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open stream: {0}")]
    Open(#[source] TableSourceError),

    #[error("failed to decode structures: {0}")]
    Decode(#[source] TableSourceError),
}
