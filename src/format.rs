//! Display formatting for rupee amounts and percentages
//!
//! Amounts use Indian digit grouping (last three digits, then pairs) with no
//! fractional part: 1234567 -> "₹12,34,567".

/// Rupee sign
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as whole rupees with en-IN grouping
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}0", CURRENCY_SYMBOL);
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_indian(&digits))
}

/// Format a percentage with two decimals, e.g. "61.06%"
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(8053.0), "₹8,053");
    }

    #[test]
    fn test_lakh_and_crore_grouping() {
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
        assert_eq!(format_inr(10_000_000.0), "₹1,00,00,000");
    }

    #[test]
    fn test_rounds_to_whole_rupees() {
        assert_eq!(format_inr(63_351.41), "₹63,351");
        assert_eq!(format_inr(1_499.5), "₹1,500");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(-5_000.0), "-₹5,000");
        assert_eq!(format_inr(-0.4), "₹0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(61.06), "61.06%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
