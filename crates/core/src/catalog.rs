//! The in-memory record catalog.
//!
//! A [`Catalog`] is an ordered, immutable sequence of [`Record`]s constructed
//! once at process start. Every query is a pure computation over the
//! sequence, so the catalog can be shared across request handlers behind an
//! `Arc` with no locking.

use crate::error::CatalogError;
use crate::record::Record;

/// The fixed, ordered collection of all records held in memory.
///
/// Invariant: `record_id` values are unique, enforced by [`Catalog::new`].
/// Insertion order is preserved and never changes for the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog from a list of records, rejecting duplicate ids.
    ///
    /// Order is preserved as given; records are not sorted.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.record_id) {
                return Err(CatalogError::DuplicateRecordId {
                    record_id: record.record_id,
                });
            }
        }
        Ok(Self { records })
    }

    /// The built-in mock data source: three sensor readings, ascending by
    /// `record_id`. This stands in for a real upstream system (database,
    /// event stream) that an ingestion pipeline would consume from.
    pub fn seed() -> Self {
        let records = vec![
            Record::new(101, "Sensor_X", 45.2, "Celcius", "2025-10-24T18:00:00Z"),
            Record::new(102, "Sensor_Y", 88.9, "Humidity", "2025-10-24T18:05:00Z"),
            Record::new(103, "Sensor_Z", 1.5, "Pressure", "2025-10-24T18:10:00Z"),
        ];

        // The seed data has unique ids, so construction cannot fail.
        Self::new(records).expect("seed catalog must have unique record ids")
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records with `record_id >= start_id`, in catalog order, truncated to
    /// at most `limit` entries from the front of the selection.
    ///
    /// This is a prefix-take, not offset pagination. `limit <= 0` yields an
    /// empty result. `start_id` is not bounds-checked: values below the
    /// minimum id select everything, values above the maximum select nothing.
    pub fn filter(&self, start_id: i64, limit: i64) -> Vec<Record> {
        if limit <= 0 {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| record.record_id >= start_id)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.record_id).collect()
    }

    #[test]
    fn seed_has_three_records_in_order() {
        let catalog = Catalog::seed();

        assert_eq!(catalog.len(), 3);
        assert_eq!(ids(catalog.records()), vec![101, 102, 103]);
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let records = vec![
            Record::new(101, "A", 1.0, "Celcius", "2025-10-24T18:00:00Z"),
            Record::new(101, "B", 2.0, "Celcius", "2025-10-24T18:05:00Z"),
        ];

        let err = Catalog::new(records).unwrap_err();
        assert_matches!(err, CatalogError::DuplicateRecordId { record_id: 101 });
    }

    #[test]
    fn new_preserves_insertion_order() {
        let records = vec![
            Record::new(103, "C", 3.0, "Pressure", "2025-10-24T18:10:00Z"),
            Record::new(101, "A", 1.0, "Celcius", "2025-10-24T18:00:00Z"),
        ];

        let catalog = Catalog::new(records).unwrap();
        assert_eq!(ids(catalog.records()), vec![103, 101]);
    }

    #[test]
    fn filter_selects_ids_at_or_above_start() {
        let catalog = Catalog::seed();
        let result = catalog.filter(102, 10);

        assert_eq!(ids(&result), vec![102, 103]);
        assert!(result.iter().all(|r| r.record_id >= 102));
    }

    #[test]
    fn filter_truncates_to_limit() {
        let catalog = Catalog::seed();
        let result = catalog.filter(101, 2);

        assert_eq!(ids(&result), vec![101, 102]);
    }

    #[test]
    fn filter_result_length_is_min_of_limit_and_matches() {
        let catalog = Catalog::seed();

        // Limit larger than the match count: everything matching comes back.
        assert_eq!(catalog.filter(102, 50).len(), 2);
        // Limit smaller than the match count: exactly limit records.
        assert_eq!(catalog.filter(101, 1).len(), 1);
    }

    #[test]
    fn filter_with_min_id_and_full_limit_equals_catalog() {
        let catalog = Catalog::seed();
        let result = catalog.filter(101, catalog.len() as i64);

        assert_eq!(result, catalog.records());
    }

    #[test]
    fn filter_past_max_id_is_empty() {
        let catalog = Catalog::seed();

        assert!(catalog.filter(200, 5).is_empty());
    }

    #[test]
    fn filter_below_min_id_selects_everything() {
        let catalog = Catalog::seed();
        let result = catalog.filter(i64::MIN, 100);

        assert_eq!(ids(&result), vec![101, 102, 103]);
    }

    #[test]
    fn filter_zero_limit_is_empty() {
        let catalog = Catalog::seed();

        assert!(catalog.filter(101, 0).is_empty());
    }

    #[test]
    fn filter_negative_limit_is_empty() {
        let catalog = Catalog::seed();

        assert!(catalog.filter(101, -1).is_empty());
        assert!(catalog.filter(101, i64::MIN).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = Catalog::seed();

        assert_eq!(catalog.filter(102, 1), catalog.filter(102, 1));
        assert_eq!(catalog.records(), catalog.records());
    }
}
