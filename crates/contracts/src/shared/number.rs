/// Parses a numeric form field; accepts a decimal comma. Invalid input is NaN.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12,5 "), 12.5);
        assert_eq!(parse_amount("3"), 3.0);
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("douze").is_nan());
    }
}
