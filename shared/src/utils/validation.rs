//! Length checks shared by request validation

/// Number of characters (Unicode scalar values) in `value`
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Check if a string's character count is within `[min, max]`
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = char_len(value);
    len >= min && len <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_between_counts_characters() {
        assert!(length_between("Ali", 3, 50));
        assert!(!length_between("Al", 3, 50));
        // three characters, six bytes
        assert!(length_between("علی", 3, 50));
    }
}
