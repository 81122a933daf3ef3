use ratatui::style::Color;

/// What: Strip trailing `//` or `#` comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text following the `=` sign.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A comment marker must follow whitespace, so hex colors like `#aabbcc` and URLs
///   like `https://host/path` survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let s = s.trim();
    if s.starts_with("//") {
        return "";
    }
    let end = [" #", "\t#", " //", "\t//"]
        .iter()
        .filter_map(|marker| s.find(marker))
        .min()
        .unwrap_or(s.len());
    s[..end].trim()
}

/// What: Normalize a configuration key for matching.
///
/// Inputs:
/// - `raw`: Key text left of the `=` sign.
///
/// Output:
/// - Lowercase key with `.`, `-`, and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification, possibly followed by an inline comment.
///
/// Output:
/// - `Some(Color)` for `#RRGGBB`, `RRGGBB`, or `R,G,B` (0-255 per channel); `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Parse hex and decimal color literals and reject malformed ones.
    ///
    /// Inputs:
    /// - `#1e1e2e`, `1E1E2E`, `30, 30, 46 // note`, `#12345`, `256,0,0`, `1,2`.
    ///
    /// Output:
    /// - Valid literals produce `Color::Rgb`; the rest return `None`.
    fn color_literals() {
        assert_eq!(parse_color_value("#1e1e2e"), Some(Color::Rgb(30, 30, 46)));
        assert_eq!(parse_color_value("1E1E2E"), Some(Color::Rgb(30, 30, 46)));
        assert_eq!(
            parse_color_value("30, 30, 46 // note"),
            Some(Color::Rgb(30, 30, 46))
        );
        assert_eq!(parse_color_value("#aabbcc # trailing"), Some(Color::Rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_color_value("#12345"), None);
        assert_eq!(parse_color_value("256,0,0"), None);
        assert_eq!(parse_color_value("1,2"), None);
        assert_eq!(parse_color_value(""), None);
    }

    #[test]
    fn inline_comments_are_stripped() {
        assert_eq!(strip_inline_comment("climate # topic"), "climate");
        assert_eq!(strip_inline_comment("20 // per page"), "20");
        assert_eq!(strip_inline_comment("  plain  "), "plain");
        assert_eq!(
            strip_inline_comment("https://example.com/search # endpoint"),
            "https://example.com/search"
        );
    }

    #[test]
    fn keys_normalize() {
        assert_eq!(normalize_key(" Page-Size "), "page_size");
        assert_eq!(normalize_key("color.life and style"), "color_life_and_style");
    }
}
