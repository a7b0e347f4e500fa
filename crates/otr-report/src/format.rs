//! Human-readable rendering of prices and percentages.

use otr_model::PercentageDifference;

/// Formats a price as whole rupiah with comma grouping, e.g. `Rp 1,250,000`.
pub fn format_rupiah(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let negative = value < 0.0 && digits != "0";
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

/// Formats a percentage with two decimals, or explains why it is undefined.
pub fn format_percentage(value: PercentageDifference) -> String {
    match value {
        PercentageDifference::Value(_) => value.to_string(),
        PercentageDifference::Undefined => "not defined (price at location 1 = 0)".to_string(),
    }
}
