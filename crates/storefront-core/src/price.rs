//! Whole-unit currency formatting (`$1,299`)

/// Format a price with en-US digit grouping and no fraction digits
///
/// USD, EUR and GBP use their symbols; any other code is used as a prefix
/// (`JPY 1,200`).
pub fn format_price(price: i64, currency: &str) -> String {
    let sign = if price < 0 { "-" } else { "" };
    let digits = group_thousands(price.unsigned_abs());

    match currency.to_ascii_uppercase().as_str() {
        "USD" => format!("{sign}${digits}"),
        "EUR" => format!("{sign}€{digits}"),
        "GBP" => format!("{sign}£{digits}"),
        code => format!("{sign}{code}\u{a0}{digits}"),
    }
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
