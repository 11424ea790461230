// src/services/phone.rs
// DOCUMENTATION: Phone number normalisation
// PURPOSE: Make equivalent spellings of a number compare equal in storage

/// Drop the trunk prefix from a purely numeric national number
/// ("01012345678" -> "1012345678"). Anything that is not all ASCII digits
/// is returned untouched.
pub fn minify_phone_number(phone_number: &str) -> String {
    let all_digits = !phone_number.is_empty() && phone_number.bytes().all(|b| b.is_ascii_digit());

    match phone_number.strip_prefix('0') {
        Some(rest) if all_digits => rest.to_string(),
        _ => phone_number.to_string(),
    }
}

/// Trim whitespace and a leading '+' from a calling code
pub fn normalize_country_number(country_number: &str) -> String {
    country_number.trim().trim_start_matches('+').to_string()
}

/// SMS destination in international form: +<calling code><number>
pub fn international_format(country_number: &str, phone_number: &str) -> String {
    format!("+{}{}", normalize_country_number(country_number), phone_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_strips_trunk_zero() {
        assert_eq!(minify_phone_number("01012345678"), "1012345678");
    }

    #[test]
    fn test_minify_only_strips_one_zero() {
        assert_eq!(minify_phone_number("0012"), "012");
    }

    #[test]
    fn test_minify_keeps_non_numeric_input() {
        assert_eq!(minify_phone_number("010-1234-5678"), "010-1234-5678");
        assert_eq!(minify_phone_number("0a"), "0a");
    }

    #[test]
    fn test_minify_edge_cases() {
        assert_eq!(minify_phone_number(""), "");
        assert_eq!(minify_phone_number("0"), "");
        assert_eq!(minify_phone_number("1012345678"), "1012345678");
    }

    #[test]
    fn test_international_format() {
        assert_eq!(international_format("82", "1012345678"), "+821012345678");
        assert_eq!(international_format("+1", "5551234"), "+15551234");
    }
}
