// src/io/format.rs

/// Formats an amount as whole US dollars, e.g. `$9,201`.
///
/// Rounds half away from zero. Non-finite amounts render as `-`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{sign}${}", group_thousands(&digits))
}

/// Formats a week count with one decimal, dropping a trailing `.0`.
pub fn format_weeks(weeks: f64) -> String {
    let text = format!("{weeks:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    if text == "1" {
        "1 week".to_string()
    } else {
        format!("{text} weeks")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_dollars_with_separators() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(85.0), "$85");
        assert_eq!(format_currency(2125.0), "$2,125");
        assert_eq!(format_currency(9201.25), "$9,201");
        assert_eq!(format_currency(110500.0), "$110,500");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(-2.5), "-$3");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn non_finite_is_a_dash() {
        assert_eq!(format_currency(f64::INFINITY), "-");
        assert_eq!(format_currency(f64::NAN), "-");
    }

    #[test]
    fn weeks_drop_trailing_zero() {
        assert_eq!(format_weeks(8.0), "8 weeks");
        assert_eq!(format_weeks(1.0), "1 week");
        assert_eq!(format_weeks(12.857), "12.9 weeks");
    }
}
