use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const NAMED_UNITS: [(u64, &str); 3] = [
    (10_000_000, "Crore"),
    (100_000, "Lakh"),
    (1_000, "Thousand"),
];

/// Renders a non-negative amount in the Indian numbering system, e.g.
/// 12345678 becomes "1 Crore 23 Lakh 45 Thousand 678". A remainder below
/// one thousand stays bare, and zero renders as the empty string.
pub fn format_indian_units(amount: Decimal) -> String {
    // fractional paise are dropped, only whole units get decomposed
    let mut remaining = amount.trunc().to_u64().unwrap_or(0);

    let mut parts = vec![];
    for (unit_value, unit_name) in NAMED_UNITS {
        let count = remaining / unit_value;
        if count > 0 {
            parts.push(format!("{} {}", count, unit_name));
            remaining %= unit_value;
        }
    }
    if remaining > 0 {
        parts.push(remaining.to_string());
    }

    parts.join(" ")
}
