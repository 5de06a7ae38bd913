pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Input mask for the phone field: `(555) 123-4567`. Digits past ten are dropped.
pub fn format_input(value: &str) -> String {
    let digits = digits(value);
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        len => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..len.min(10)]
        ),
    }
}

/// Number as the CRM stores it, with the US country code for ten-digit input.
pub fn crm_phone(value: &str) -> String {
    let digits = digits(value);
    if digits.len() == 10 {
        format!("1{}", digits)
    } else {
        digits
    }
}

/// Exactly ten digits for the booking widget when the input allows it.
pub fn query_phone(value: &str) -> String {
    let digits = digits(value);
    if digits.len() == 11 && digits.starts_with('1') {
        digits[1..].to_string()
    } else {
        digits
    }
}
