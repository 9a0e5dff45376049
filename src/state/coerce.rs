use tracing::debug;

/// Lenient conversion of raw form text into a nutrition amount.
///
/// Reads the leading run of ASCII digits after optional whitespace and an
/// optional `+`, ignoring whatever follows (`"12g"` is 12, `"3.9"` is 3).
/// Text without a leading digit run coerces to 0, as do negative values.
/// Values past `u32::MAX` saturate.
pub fn coerce_amount(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        if !trimmed.is_empty() {
            debug!(raw, "non-numeric amount coerced to 0");
        }
        return 0;
    }

    digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as u32)
    })
}
