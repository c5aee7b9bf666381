//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Format a price with thousands separators and two decimals,
/// e.g. `100000000.0` → `100,000,000.00`.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Cut `s` to at most `max` characters, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(100_000_000.0), "100,000,000.00");
        assert_eq!(format_price(1000.0), "1,000.00");
        assert_eq!(format_price(999.999), "1,000.00");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(format_price(-1234.5), "-1,234.50");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Starry Night", 20), "Starry Night");
        assert_eq!(truncate("Starry Night", 7), "Starry…");
    }
}
