//! Indian Rupee formatting
//!
//! Renders amounts the way an en-IN locale does: the last three integer
//! digits form one group, every group to the left of it has two digits
//! (`1,00,00,000` for one crore). Amounts are rounded half away from zero
//! to whole rupees before grouping.
//!
//! Calculations never call into this module; it exists so displayed values
//! can be checked end to end.

/// Rupee sign prefixed to every formatted amount
pub const RUPEE_SYMBOL: &str = "₹";

/// One lakh (1,00,000)
pub const LAKH: f64 = 100_000.0;

/// One crore (1,00,00,000)
pub const CRORE: f64 = 10_000_000.0;

/// Insert en-IN group separators into a string of ASCII digits
///
/// Input that is not purely ASCII digits is returned unchanged.
///
/// # Example
/// ```
/// use property_cost_core_rs::core::currency::group_en_in;
///
/// assert_eq!(group_en_in("350000"), "3,50,000");
/// assert_eq!(group_en_in("999"), "999");
/// ```
pub fn group_en_in(digits: &str) -> String {
    if digits.len() <= 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
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

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

/// Format an amount as whole rupees with en-IN grouping
///
/// Non-finite inputs render as `₹NaN` / `₹∞`, matching what a browser's
/// `Intl.NumberFormat` shows for the same values.
///
/// # Example
/// ```
/// use property_cost_core_rs::format_inr;
///
/// assert_eq!(format_inr(350_000.0), "₹3,50,000");
/// assert_eq!(format_inr(1_234.5), "₹1,235");
/// assert_eq!(format_inr(-25_000.0), "-₹25,000");
/// ```
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", RUPEE_SYMBOL);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}{}∞", sign, RUPEE_SYMBOL);
    }

    let rounded = amount.abs().round();
    // -0.4 rounds to zero and must not keep its sign
    let sign = if rounded == 0.0 { "" } else { sign };
    let digits = format!("{:.0}", rounded);

    format!("{}{}{}", sign, RUPEE_SYMBOL, group_en_in(&digits))
}

/// Format an amount using crore / lakh abbreviations
///
/// - `>= 1 crore` → `₹1.50 Cr`
/// - `>= 1 lakh` → `₹3.50 L`
/// - otherwise falls back to [`format_inr`]
pub fn format_inr_compact(amount: f64) -> String {
    if amount >= CRORE {
        format!("{}{:.2} Cr", RUPEE_SYMBOL, amount / CRORE)
    } else if amount >= LAKH {
        format!("{}{:.2} L", RUPEE_SYMBOL, amount / LAKH)
    } else {
        format_inr(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_short_values_untouched() {
        assert_eq!(group_en_in("0"), "0");
        assert_eq!(group_en_in("12"), "12");
        assert_eq!(group_en_in("123"), "123");
    }

    #[test]
    fn test_group_lakh_and_crore() {
        assert_eq!(group_en_in("1000"), "1,000");
        assert_eq!(group_en_in("25000"), "25,000");
        assert_eq!(group_en_in("100000"), "1,00,000");
        assert_eq!(group_en_in("10000000"), "1,00,00,000");
        assert_eq!(group_en_in("123456789"), "12,34,56,789");
    }

    #[test]
    fn test_group_leaves_non_digits_untouched() {
        assert_eq!(group_en_in("é1234"), "é1234");
        assert_eq!(group_en_in("12,345"), "12,345");
        assert_eq!(group_en_in("1234.5"), "1234.5");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_inr(-0.4), "₹0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_inr(f64::NAN), "₹NaN");
        assert_eq!(format_inr(f64::INFINITY), "₹∞");
        assert_eq!(format_inr(f64::NEG_INFINITY), "-₹∞");
    }
}
