//! Number formatting shared by the generator, the sample tables and the cells.

/// Group an integer's digits in threes: `12345678` → `"12,345,678"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed dollar amount, always carrying a sign: `122.5` → `"+$122.50"`.
pub fn format_signed_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}

/// Signed percentage, always carrying a sign: `2.08` → `"+2.08%"`.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value < 0.0 { '-' } else { '+' };
    format!("{sign}{:.2}%", value.abs())
}
