//! Price lookup and comparison over an in-memory price dataset.
//!
//! The dataset is loaded once into a [`PriceDataset`], which also holds the
//! derived [`VariantIndex`] and [`LocationSet`]. Comparisons are pure
//! functions of the records and a [`ComparisonRequest`](otr_model::ComparisonRequest).

pub mod compare;
pub mod dataset;
pub mod index;
pub mod selection;

pub use compare::{NotFound, compare, find_price};
pub use dataset::PriceDataset;
pub use index::{LocationSet, ModelVariants, VariantIndex, build_indexes};
pub use selection::{DEFAULT_LOCATION_A, DEFAULT_LOCATION_B, Selection, SelectionError};
