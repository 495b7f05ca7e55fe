/// Cuts `text` to at most `max_len` characters, preferring the last word boundary,
/// and appends `...` when something was cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_len).collect();
    match cut.rfind(' ') {
        Some(idx) => format!("{}...", &cut[..idx]),
        None => format!("{}...", cut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("court", 10), "court");
        assert_eq!(truncate("achat de tomates fraîches", 10), "achat de...");
        assert_eq!(truncate("abcdefghijklmnop", 10), "abcdefghij...");
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("éééééééééééé", 3), "ééé...");
    }
}
