pub fn is_str_valid_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn is_str_valid_pattern(value: &str, blacklist: &str) -> bool {
    value.chars().all(|c| !blacklist.contains(c))
}

/// GitHub logins: 1 to 39 ASCII letters, digits or hyphens, with no hyphen
/// at either end.
pub fn is_github_handle(value: &str) -> bool {
    is_str_valid_length(value, 1, 39)
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && is_str_valid_pattern(&value[..1], "-")
        && is_str_valid_pattern(&value[value.len() - 1..], "-")
}
