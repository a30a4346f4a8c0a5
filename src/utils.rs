use serde_json::Value;

/// Two-digit label of a lottery number: 7 -> "07", 42 -> "42".
pub fn format_number(number: u32, display_zero: bool) -> String {
    if display_zero && number == 0 {
        return "00".to_string();
    }
    format!("{:02}", number)
}

pub fn format_numbers(numbers: &[u32], display_zero: bool) -> Vec<String> {
    numbers
        .iter()
        .map(|&n| format_number(n, display_zero))
        .collect()
}

/// Reads a number out of a feed value that may be a JSON number or a numeric string.
pub fn parse_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}
