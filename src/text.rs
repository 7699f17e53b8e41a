/// Shortens `text` to at most `limit` characters. Over-long text keeps
/// `limit - 1` characters followed by a single ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// "NYHETER" and "nyheter" both become "Nyheter".
pub fn capitalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pull-quote text as printed: wrapped in straight double quotes.
pub fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcde", 5), "abcde");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn truncate_appends_single_ellipsis() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("åäöåäö", 4), "åäö…");
        assert_eq!(truncate("abc", 0), "…");
    }

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("nyheter"), "Nyheter");
        assert_eq!(capitalize("SÖLVESBORG"), "Sölvesborg");
        assert_eq!(capitalize(""), "");
    }
}
