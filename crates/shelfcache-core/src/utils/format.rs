use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercased text with accents stripped, so "Éclair" files under "e".
fn fold_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two strings the way a shopper reads them: accents and case are
/// ignored first, then case-insensitive text decides, with the raw strings
/// as a final tie-breaker so the order stays total.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    fold_key(a)
        .cmp(&fold_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring match. `needle` is expected to already be lowercase.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Human-readable age for a number of elapsed minutes.
pub fn format_age(minutes: i64) -> String {
    if minutes < 1 {
        // Also covers clock skew
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        if minutes % 60 >= 30 {
            format!("{}h ago", hours + 1)
        } else {
            format!("{}h ago", hours)
        }
    } else {
        let days = minutes / 1440;
        if (minutes % 1440) / 60 >= 12 {
            format!("{}d ago", days + 1)
        } else {
            format!("{}d ago", days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Zebra", "apple"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("same", "same"), Ordering::Equal);
        // Tie-break on raw bytes keeps the order total
        assert_ne!(cmp_ignore_case("Dice", "dice"), Ordering::Equal);
    }

    #[test]
    fn test_cmp_ignore_case_folds_accents() {
        assert_eq!(cmp_ignore_case("Éclair Dice", "Zebra Mat"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Über Box", "Vault"), Ordering::Less);
        assert_eq!(cmp_ignore_case("café", "cafe tin"), Ordering::Less);
        assert_ne!(cmp_ignore_case("Élan", "Elan"), Ordering::Equal);

        let mut names = vec!["Zebra Mat", "Éclair Dice", "Apple Box"];
        names.sort_by(|a, b| cmp_ignore_case(a, b));
        assert_eq!(names, vec!["Apple Box", "Éclair Dice", "Zebra Mat"]);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Dragon Shield", "shield"));
        assert!(contains_ignore_case("$12.99", "12.9"));
        assert!(!contains_ignore_case("Dragon Shield", "sleeve"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Hi", 2), "Hi");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Dungeons & Dragons"), "Dungeons &amp; Dragons");
        assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
        assert_eq!(escape_html("Ollie's"), "Ollie&#39;s");
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(-5), "just now");
        assert_eq!(format_age(0), "just now");
        assert_eq!(format_age(5), "5m ago");
        assert_eq!(format_age(89), "1h ago");
        assert_eq!(format_age(90), "2h ago");
        assert_eq!(format_age(1440 + 60), "1d ago");
        assert_eq!(format_age(1440 + 13 * 60), "2d ago");
    }
}
