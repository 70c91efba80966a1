//! Bangladeshi phone number helpers

use std::sync::LazyLock;

use regex::Regex;

/// Matches a BD mobile number: optional `+88`/`88` country code, then `01`,
/// an operator digit 3-9, and eight more digits.
static BD_MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(
        clippy::expect_used,
        reason = "pattern is a literal; a failure to compile is a build defect"
    )]
    let pattern = Regex::new(r"^(?:\+?88)?01[3-9]\d{8}$").expect("BD mobile pattern must compile");

    pattern
});

/// Whether `phone` looks like a valid BD mobile number.
#[must_use]
pub fn is_valid_bd_phone(phone: &str) -> bool {
    BD_MOBILE.is_match(phone)
}

/// Normalise a BD mobile number to `+8801xxxxxxxxx`.
///
/// Strips separators the user may have typed, then reattaches the country
/// code from whichever prefix is present. Unrecognised input is returned
/// unchanged rather than rejected.
#[must_use]
pub fn format_bd_phone(phone: &str) -> String {
    let cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();

    if cleaned.starts_with("8801") {
        return format!("+{cleaned}");
    }

    if cleaned.starts_with("01") {
        return format!("+88{cleaned}");
    }

    // Edge case: a missed leading zero.
    if cleaned.starts_with('1') {
        return format!("+880{cleaned}");
    }

    phone.to_string()
}
