//! Display helpers for currency and rates

/// Currency marker appended by `format_currency`
pub const CURRENCY_MARKER: &str = "SEK";

/// Format an amount in kronor, e.g. `6,000,000 SEK`
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, CURRENCY_MARKER)
}

/// Format an amount with thousands separators and no decimals, followed by `marker`.
///
/// Halves round to even. Non-finite amounts are printed as-is.
pub fn format_currency_with(amount: f64, marker: &str) -> String {
    if !amount.is_finite() {
        return format!("{} {}", amount, marker);
    }

    let rounded = amount.round_ties_even();
    // Amounts that round to zero print unsigned: -0.4 gives "0", not "-0"
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}{} {}", sign, group_thousands(&digits), marker)
}

/// Format a fraction as a percentage with one decimal, e.g. `0.02` -> `2.0%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
