/// Render a number with comma thousands separators and at most three
/// decimals, the way the browser's default locale formats prices.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 5);
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_whole_numbers() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(950.0), "950");
        assert_eq!(group_thousands(2275.0), "2,275");
        assert_eq!(group_thousands(122_850.0), "122,850");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn keeps_up_to_three_decimals() {
        assert_eq!(group_thousands(18.5), "18.5");
        assert_eq!(group_thousands(61_200.123_9), "61,200.124");
        assert_eq!(group_thousands(-4_500.25), "-4,500.25");
        assert_eq!(group_thousands(-0.0001), "0");
    }
}
