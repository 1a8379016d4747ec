/// Group an integer's digits with thousands separators
fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a currency value with cents and thousands separators
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let mut dollars = abs.trunc() as i64;
    let mut cents = ((abs - dollars as f64) * 100.0).round() as i64;
    // Rounding can carry into the next dollar (e.g. 1.999)
    if cents >= 100 {
        dollars += 1;
        cents = 0;
    }
    format!("{sign}${}.{cents:02}", group_thousands(dollars))
}

/// Format a currency value without cents (for tight sidebar columns)
pub fn format_currency_short(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(value.abs().round() as i64))
}

/// Format a fraction as a whole percentage ("0.4" -> "40%")
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(1_000.0), "$1,000.00");
        assert_eq!(format_currency(3_374_545.45), "$3,374,545.45");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-1_234.5), "-$1,234.50");
        assert_eq!(format_currency_short(-1_234.5), "-$1,235");
    }

    #[test]
    fn test_currency_rounding_carry() {
        assert_eq!(format_currency(1.999), "$2.00");
        assert_eq!(format_currency(999.995), "$1,000.00");
    }

    #[test]
    fn test_short_currency_rounds_cents_away() {
        assert_eq!(format_currency_short(12_000_000.4), "$12,000,000");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(0.4), "40%");
        assert_eq!(format_percentage(0.35), "35%");
    }
}
