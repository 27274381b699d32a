/// Normalize a phone number to an E.164-like form for the SMS provider.
///
/// Numbers without a country code are assumed to be North American:
/// formatting characters are stripped and a `+1` prefix is added. A number
/// that already starts with `+` is passed through untouched, and a bare
/// 11-digit number with a leading 1 only gains the `+`.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('+') {
        return trimmed.to_string();
    }

    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.starts_with('1') {
        format!("+{}", digits)
    } else {
        format!("+1{}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_ten_digit_number_gains_country_code() {
        assert_eq!(normalize_phone("5873946940"), "+15873946940");
    }

    #[test]
    fn eleven_digit_number_with_leading_one_gains_plus_only() {
        assert_eq!(normalize_phone("15873946940"), "+15873946940");
    }

    #[test]
    fn already_normalized_number_is_unchanged() {
        assert_eq!(normalize_phone("+15873946940"), "+15873946940");
    }

    #[test]
    fn formatting_characters_are_stripped() {
        assert_eq!(normalize_phone("(587) 394-6940"), "+15873946940");
        assert_eq!(normalize_phone("587.394.6940"), "+15873946940");
        assert_eq!(normalize_phone(" 1 587 394 6940 "), "+15873946940");
    }
}
