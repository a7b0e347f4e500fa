//! Immutable price dataset handle.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use otr_ingest::{PriceLoad, read_price_records};
use otr_model::{ComparisonRequest, ComparisonResult, PriceRecord};

use crate::compare::{NotFound, compare};
use crate::index::{LocationSet, VariantIndex, build_indexes};

/// Price records plus the indexes derived from them.
///
/// Built once per process and shared by reference; nothing mutates it
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct PriceDataset {
    records: Vec<PriceRecord>,
    variants: VariantIndex,
    locations: LocationSet,
    duplicate_keys: usize,
    absent_prices: usize,
}

impl PriceDataset {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        let (variants, locations) = build_indexes(&records);
        let duplicate_keys = count_duplicate_keys(&records);
        let absent_prices = records
            .iter()
            .filter(|record| record.price_otr.is_none())
            .count();
        if duplicate_keys > 0 {
            warn!(
                duplicate_keys,
                "dataset has repeated (model series, variant, location) rows; first priced row wins"
            );
        }
        Self {
            records,
            variants,
            locations,
            duplicate_keys,
            absent_prices,
        }
    }

    /// Loads and indexes the CSV dataset at `path`.
    pub fn load(path: &Path) -> otr_ingest::Result<Self> {
        let PriceLoad { records, .. } = read_price_records(path)?;
        let dataset = Self::new(records);
        info!(
            model_series = dataset.variants.len(),
            locations = dataset.locations.len(),
            "price indexes built"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn variants(&self) -> &VariantIndex {
        &self.variants
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    /// Number of rows repeating an earlier (model series, variant, location).
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    pub fn absent_prices(&self) -> usize {
        self.absent_prices
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonResult, NotFound> {
        compare(&self.records, request)
    }
}

fn count_duplicate_keys(records: &[PriceRecord]) -> usize {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|&record| !seen.insert(record.key()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicate_keys() {
        let dataset = PriceDataset::new(vec![
            PriceRecord::new("X", "A", "North", Some(1.0)),
            PriceRecord::new("X", "A", "North", Some(2.0)),
            PriceRecord::new("X", "A", "South", None),
        ]);
        assert_eq!(dataset.duplicate_keys(), 1);
        assert_eq!(dataset.absent_prices(), 1);
        assert_eq!(dataset.locations().len(), 2);
    }

    #[test]
    fn empty_dataset_has_empty_indexes() {
        let dataset = PriceDataset::new(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.variants().is_empty());
        assert!(dataset.locations().is_empty());
    }
}
