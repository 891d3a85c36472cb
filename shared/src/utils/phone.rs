//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// "09" followed by exactly nine ASCII digits
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^09[0-9]{9}$").expect("phone number pattern is valid")
});

/// Check if a value is a valid account phone number (`09XXXXXXXXX`)
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., 0912****789)
pub fn mask_phone_number(phone: &str) -> String {
    if phone.is_ascii() && phone.len() >= 8 {
        format!("{}****{}", &phone[..4], &phone[phone.len() - 3..])
    } else {
        "****".to_string()
    }
}
