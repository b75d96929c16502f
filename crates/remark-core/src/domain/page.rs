use super::content::is_js_whitespace;

/// Page size used when the caller gives none (or an unusable one).
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

/// Offset pagination window for comment listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Build a page from raw query parameters.
    ///
    /// Never fails. Each value is read by its leading integer, so `"10abc"`
    /// is 10 and `"2.7"` is 2. A missing, unreadable, zero or negative
    /// `limit` becomes [`DEFAULT_PAGE_LIMIT`]; an unusable `offset` becomes 0.
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(leading_int)
            .and_then(|limit| u64::try_from(limit).ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        let offset = offset
            .and_then(leading_int)
            .and_then(|offset| u64::try_from(offset).ok())
            .unwrap_or(0);

        Self { limit, offset }
    }
}

/// Read the leading integer of `raw` the way JavaScript `parseInt(raw)` does:
/// leading whitespace is skipped, one sign is accepted, a `0x` prefix
/// switches to hexadecimal, and parsing stops at the first non-digit.
/// `None` when no digit follows. Values saturate instead of overflowing.
fn leading_int(raw: &str) -> Option<i64> {
    let rest = raw.trim_start_matches(is_js_whitespace);
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: Option<i64> = None;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        let current = value.unwrap_or(0);
        value = Some(
            current
                .saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit)),
        );
    }

    value.map(|v| if negative { -v } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(Page::from_params(None, None), Page::new(50, 0));
    }

    #[test]
    fn test_parses_numbers() {
        assert_eq!(Page::from_params(Some("2"), Some(" 10 ")), Page::new(2, 10));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        assert_eq!(Page::from_params(Some("abc"), Some("-3")), Page::new(50, 0));
        assert_eq!(Page::from_params(Some("0"), Some("")), Page::new(50, 0));
        assert_eq!(Page::from_params(Some("-1"), Some("x")), Page::new(50, 0));
        assert_eq!(Page::from_params(Some(""), Some("-")), Page::new(50, 0));
    }

    #[test]
    fn test_leading_integer_is_used() {
        assert_eq!(Page::from_params(Some("10abc"), Some("3.9")), Page::new(10, 3));
        assert_eq!(Page::from_params(Some("2.7"), Some("1.5")), Page::new(2, 1));
        assert_eq!(Page::from_params(Some(" +4"), Some("0x10")), Page::new(4, 16));
        assert_eq!(Page::from_params(Some("0.9"), None), Page::new(50, 0));
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("42px"), Some(42));
        assert_eq!(leading_int("-7"), Some(-7));
        assert_eq!(leading_int("\u{FEFF}\t8"), Some(8));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int("0x"), None);
        assert_eq!(leading_int("99999999999999999999999"), Some(i64::MAX));
    }
}
