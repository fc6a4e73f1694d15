/// Errors raised while constructing a catalog.
///
/// Query operations never fail: once a [`crate::Catalog`] exists, every
/// lookup degrades to an empty or full result instead of erroring.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate record_id in catalog: {record_id}")]
    DuplicateRecordId { record_id: i64 },
}
