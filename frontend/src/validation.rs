//! Lead form validation rules.
//!
//! Every field gets the generic required check; a few also carry a
//! type-specific [`Rule`] looked up by field id. The first failing check wins.

pub const REQUIRED_MESSAGE: &str = "This field is required";

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// Length as the browser counts it, in UTF-16 code units.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Trims what a browser's `String.prototype.trim` trims: Unicode whitespace
/// and the byte-order mark, but not NEL (U+0085).
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

fn min_chars(value: &str, min: usize) -> bool {
    text_len(value) >= min
}

fn valid_name(value: &str) -> bool {
    min_chars(value, 2)
}

fn valid_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

fn valid_area(value: &str) -> bool {
    min_chars(value, 3)
}

fn selected(value: &str) -> bool {
    !value.is_empty()
}

const RULES: &[(&str, Rule)] = &[
    ("name", Rule { check: valid_name, message: "Name must be at least 2 characters" }),
    ("phone", Rule { check: valid_phone, message: "Please enter a valid 10-digit phone number" }),
    ("businessType", Rule { check: selected, message: "Please select a business type" }),
    ("area", Rule { check: valid_area, message: "Please enter a valid area/location" }),
];

pub fn rule_for(field_id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|(id, _)| *id == field_id).map(|(_, rule)| rule)
}

/// Validates one field value. The value is trimmed before any check.
pub fn validate_field(field_id: &str, value: &str, required: bool) -> Result<(), &'static str> {
    let value = trim_input(value);
    if required && value.is_empty() {
        return Err(REQUIRED_MESSAGE);
    }
    match rule_for(field_id) {
        Some(rule) if !(rule.check)(value) => Err(rule.message),
        _ => Ok(()),
    }
}

/// Id of the element that displays a field's error message.
pub fn error_element_id(field_id: &str) -> String {
    format!("{}Error", field_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_needs_exactly_ten_digits() {
        assert!(validate_field("phone", "1234567890", true).is_ok());
        assert!(validate_field("phone", "  1234567890 ", true).is_ok());
        for bad in ["123-456-7890", "123456789", "12345678901", "+911234567890", "12345abcde"] {
            assert_eq!(
                validate_field("phone", bad, true),
                Err("Please enter a valid 10-digit phone number"),
                "{bad}"
            );
        }
    }

    #[test]
    fn name_needs_two_characters() {
        assert!(validate_field("name", "Al", true).is_ok());
        assert_eq!(validate_field("name", " A ", true), Err("Name must be at least 2 characters"));
    }

    #[test]
    fn area_needs_three_characters() {
        assert!(validate_field("area", "Goa", true).is_ok());
        assert_eq!(validate_field("area", "Go", true), Err("Please enter a valid area/location"));
    }

    #[test]
    fn required_check_runs_first() {
        assert_eq!(validate_field("name", "   ", true), Err(REQUIRED_MESSAGE));
        assert_eq!(validate_field("businessType", "", true), Err(REQUIRED_MESSAGE));
    }

    #[test]
    fn optional_fields_still_get_their_rule() {
        assert_eq!(validate_field("businessType", "", false), Err("Please select a business type"));
        assert_eq!(validate_field("phone", "", false), Err("Please enter a valid 10-digit phone number"));
    }

    #[test]
    fn unknown_fields_only_check_required() {
        assert!(validate_field("email", "", false).is_ok());
        assert!(validate_field("email", "not an email", true).is_ok());
        assert_eq!(validate_field("email", "", true), Err(REQUIRED_MESSAGE));
    }

    #[test]
    fn lengths_count_utf16_units() {
        assert_eq!(text_len("😀"), 2);
        assert!(validate_field("name", "😀", true).is_ok());
        assert_eq!(validate_field("area", "😀", true), Err("Please enter a valid area/location"));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(trim_input("\u{FEFF} Asha \u{FEFF}"), "Asha");
        assert_eq!(validate_field("name", "\u{FEFF}", true), Err(REQUIRED_MESSAGE));
        assert_eq!(trim_input("\u{85}x"), "\u{85}x");
    }

    #[test]
    fn error_ids_are_suffixed() {
        assert_eq!(error_element_id("businessType"), "businessTypeError");
    }
}
