//! Price and rating helpers.

/// Formats `value` with a fixed number of decimals and no thousands separator.
///
/// Non-finite values are formatted as zero.
pub fn price(value: f64, decimals: usize, dec_point: &str) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{value:.decimals$}");
    if dec_point == "." {
        formatted
    } else {
        formatted.replacen('.', dec_point, 1)
    }
}

/// Formats `value` as a Slovenian euro amount.
///
/// `national` selects the currency symbol (`1.234,56 €`) over the ISO code
/// (`1.234,56 EUR`).
pub fn price_euro(value: f64, national: bool) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    let currency = if national { "€" } else { "EUR" };
    format!("{sign}{grouped},{frac_part} {currency}")
}

/// Parses `text` as a float, accepting a comma as the decimal point, and
/// rounds it to `decimals` places. Unparsable input yields `0.0`.
pub fn to_float(text: &str, decimals: i32) -> f64 {
    let value: f64 = text.trim().replace(',', ".").parse().unwrap_or(0.0);
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Converts a percentage to a rating on a `1..=scale` scale (rounded up).
pub fn percent_to_rating(percent: f64, scale: u32) -> i64 {
    (percent / 100.0 * f64::from(scale)).ceil() as i64
}

/// Converts a rating back to the percent range it covers, e.g. `"21-40"` for
/// rating 2 on a 5 point scale.
pub fn rating_to_percent(rating: i64, scale: u32) -> String {
    let step = 100.0 / f64::from(scale);
    let min = step * (rating - 1) as f64 + 1.0;
    let max = step * rating as f64;
    format!("{}-{}", min as i64, max as i64)
}

/// Returns the bootstrap color class for a 1-5 rating.
pub fn rating_color(rating: i64) -> Option<&'static str> {
    match rating {
        1 | 2 => Some("danger"),
        3 | 4 => Some("warning"),
        5 => Some("system"),
        _ => None,
    }
}
