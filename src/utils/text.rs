//! Trimming helpers for the rating reason strings shown on the offer card.
//!
//! The backend phrases reasons for an analyst ("€14.20 est vs €11.00 median
//! x1.3 surge (p75 anchor)"); the offer card wants the short human half.

/// Shortens a rating reason for display: drops the "vs …" comparison tail,
/// any "x1.3 surge" token, and a trailing bracketed fragment.
pub fn short_reason(text: &str) -> String {
    let mut t = text.trim().to_string();

    // Comparison tails read like debug output on a phone-sized card.
    if let Some(pos) = find_ignore_case(&t, " vs ") {
        t.truncate(pos);
    }

    // Remove "x<multiplier> surge" wherever it appears.
    t = strip_surge_token(&t);

    // Trailing "(…)"/"[…]" annotations.
    let trimmed = t.trim_end();
    if let Some(open) = matching_open(trimmed) {
        t.truncate(open);
    }

    t.trim().to_string()
}

/// First `€12.34`-style amount in the text, if any. The offer summary row
/// surfaces the estimate embedded in the profitability reason.
pub fn extract_euro(text: &str) -> Option<String> {
    let start = text.find('€')?;
    let amount: String = text[start..]
        .chars()
        .skip(1)
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if amount.is_empty() {
        return None;
    }
    Some(format!("€{amount}"))
}

/// First `x1.3`-style surge multiplier token in the text, if any.
pub fn extract_surge(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|tok| is_surge_multiplier(tok))
        .map(ToString::to_string)
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_lowercase()
        .find(&needle.to_lowercase())
        .filter(|pos| haystack.is_char_boundary(*pos))
}

fn is_surge_multiplier(token: &str) -> bool {
    token
        .strip_prefix('x')
        .is_some_and(|rest| !rest.is_empty() && rest.parse::<f64>().is_ok())
}

fn strip_surge_token(text: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    let mut iter = text.split_whitespace().peekable();
    while let Some(word) = iter.next() {
        if is_surge_multiplier(word)
            && iter.peek().is_some_and(|next| next.eq_ignore_ascii_case("surge"))
        {
            iter.next();
            continue;
        }
        words.push(word);
    }
    words.join(" ")
}

/// If the text ends with a bracketed fragment, returns the byte offset of
/// the opening bracket.
fn matching_open(text: &str) -> Option<usize> {
    let close = text.chars().last()?;
    let open = match close {
        ')' => '(',
        ']' => '[',
        _ => return None,
    };
    text.rfind(open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_reason_drops_comparison() {
        assert_eq!(short_reason("€14.20 est vs €11.00 median"), "€14.20 est");
        assert_eq!(short_reason("Good pickup VS city average"), "Good pickup");
    }

    #[test]
    fn test_short_reason_drops_surge_token() {
        assert_eq!(short_reason("€18.00 est x1.3 surge"), "€18.00 est");
        assert_eq!(short_reason("x2 surge on this route"), "on this route");
    }

    #[test]
    fn test_short_reason_drops_trailing_brackets() {
        assert_eq!(short_reason("Short pickup (0.6 km)"), "Short pickup");
        assert_eq!(short_reason("Light traffic [p25 anchor]"), "Light traffic");
    }

    #[test]
    fn test_short_reason_passthrough() {
        assert_eq!(short_reason("  Rider rated 4.92  "), "Rider rated 4.92");
        assert_eq!(short_reason(""), "");
    }

    #[test]
    fn test_extract_euro() {
        assert_eq!(
            extract_euro("€14.20 est vs €11.00 median").as_deref(),
            Some("€14.20")
        );
        assert_eq!(extract_euro("no money here"), None);
        assert_eq!(extract_euro("dangling € sign"), None);
    }

    #[test]
    fn test_extract_surge() {
        assert_eq!(
            extract_surge("€18.00 est x1.3 surge").as_deref(),
            Some("x1.3")
        );
        assert_eq!(extract_surge("x-ray xylophone"), None);
    }
}
