//! Lookup indexes derived from the price records.

use std::collections::{HashMap, HashSet};

use otr_model::PriceRecord;

/// Variants observed for one model series, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVariants {
    pub model_series: String,
    pub variants: Vec<String>,
}

/// Model series -> distinct variants.
///
/// Both the series and each variant list keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    entries: Vec<ModelVariants>,
    positions: HashMap<String, usize>,
}

impl VariantIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelVariants> {
        self.entries.iter()
    }

    pub fn model_series(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.model_series.as_str())
    }

    pub fn first_model(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.model_series.as_str())
    }

    /// Variants of `model_series`, or `None` for an unknown series.
    pub fn variants(&self, model_series: &str) -> Option<&[String]> {
        self.positions
            .get(model_series)
            .map(|&idx| self.entries[idx].variants.as_slice())
    }
}

/// Distinct locations across the dataset, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct LocationSet {
    locations: Vec<String>,
    positions: HashMap<String, usize>,
}

impl LocationSet {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.locations.get(idx).map(String::as_str)
    }

    pub fn position(&self, location: &str) -> Option<usize> {
        self.positions.get(location).copied()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.positions.contains_key(location)
    }

    fn insert(&mut self, location: &str) {
        if self.positions.contains_key(location) {
            return;
        }
        self.positions
            .insert(location.to_string(), self.locations.len());
        self.locations.push(location.to_string());
    }
}

/// Builds the variant index and location set in one pass over `records`.
///
/// Records with an empty model series or variant do not contribute to the
/// variant index; records with an empty location do not contribute to the
/// location set.
pub fn build_indexes(records: &[PriceRecord]) -> (VariantIndex, LocationSet) {
    let mut index = VariantIndex::default();
    let mut locations = LocationSet::default();
    let mut seen_variants: HashSet<(usize, &str)> = HashSet::new();

    for record in records {
        if !record.location.is_empty() {
            locations.insert(&record.location);
        }
        if record.model_series.is_empty() || record.variant.is_empty() {
            continue;
        }
        let position = match index.positions.get(&record.model_series) {
            Some(&position) => position,
            None => {
                let position = index.entries.len();
                index.entries.push(ModelVariants {
                    model_series: record.model_series.clone(),
                    variants: Vec::new(),
                });
                index
                    .positions
                    .insert(record.model_series.clone(), position);
                position
            }
        };
        if seen_variants.insert((position, record.variant.as_str())) {
            index.entries[position]
                .variants
                .push(record.variant.clone());
        }
    }

    (index, locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, variant: &str, location: &str) -> PriceRecord {
        PriceRecord::new(model, variant, location, Some(1.0))
    }

    #[test]
    fn variants_are_distinct_in_first_seen_order() {
        let records = vec![
            record("X", "B", "North"),
            record("X", "A", "North"),
            record("X", "B", "South"),
        ];
        let (index, _) = build_indexes(&records);

        assert_eq!(index.variants("X"), Some(&["B".to_string(), "A".to_string()][..]));
    }

    #[test]
    fn empty_keys_are_not_indexed() {
        let records = vec![record("", "A", "North"), record("X", "", "")];
        let (index, locations) = build_indexes(&records);

        assert!(index.is_empty());
        assert_eq!(locations.iter().collect::<Vec<_>>(), vec!["North"]);
    }

    #[test]
    fn location_positions_follow_first_seen_order() {
        let records = vec![
            record("X", "A", "South"),
            record("Y", "B", "North"),
            record("X", "A", "South"),
        ];
        let (_, locations) = build_indexes(&records);

        assert_eq!(locations.len(), 2);
        assert_eq!(locations.position("South"), Some(0));
        assert_eq!(locations.get(1), Some("North"));
        assert_eq!(locations.position("East"), None);
    }
}
