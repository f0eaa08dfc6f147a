//! Display formatting helpers for contact details.

/// Format a raw phone number for display as an Indian mobile number.
///
/// Strips every non-digit character first. A number with exactly ten
/// digits is rendered as `+91 XXXXX XXXXX`; anything else is returned
/// unchanged so partial or international input is never mangled.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        format!("+91 {} {}", &digits[..5], &digits[5..])
    } else {
        phone.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ten_digits() {
        assert_eq!(format_phone("9876543210"), "+91 98765 43210");
    }

    #[test]
    fn test_format_strips_separators() {
        assert_eq!(format_phone("98765-43210"), "+91 98765 43210");
        assert_eq!(format_phone("(98765) 43 210"), "+91 98765 43210");
    }

    #[test]
    fn test_short_input_unchanged() {
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_long_input_unchanged() {
        // Eleven digits - already carries a country code, leave it alone
        assert_eq!(format_phone("+91 98765 43210"), "+91 98765 43210");
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(format_phone(""), "");
    }
}
