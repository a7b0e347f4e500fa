//! Fixed column names of the price dataset.

/// Model series column.
pub const MODEL_SERIES: &str = "Model Series";

/// Variant column.
pub const VARIANT: &str = "Varian";

/// Location column.
pub const LOCATION: &str = "Lokasi";

/// OTR price column.
pub const PRICE_OTR: &str = "Harga OTR";

/// All columns a dataset must provide, in contract order.
pub const REQUIRED: [&str; 4] = [MODEL_SERIES, VARIANT, LOCATION, PRICE_OTR];
