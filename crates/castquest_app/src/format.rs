//! Display formatting shared by the header and pages.

use alloy_primitives::Address;

/// Shortens an address to its first 6 and last 4 characters.
///
/// `"0xABCD000000000000000000000000000000001234"` → `"0xABCD...1234"`.
/// Strings of 10 characters or fewer are returned unchanged.
#[must_use]
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Checksummed, truncated form of `address` for the header button.
#[must_use]
pub fn short_address(address: &Address) -> String {
    truncate_address(&address.to_checksum(None))
}

/// Groups digits with commas: `125000` → `"125,000"`.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `value / max` as a whole percentage, clamped to 0..=100.
///
/// A zero `max` reads as an empty bar.
#[must_use]
pub fn percent(value: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let pct = (u64::from(value) * 100 / u64::from(max)).min(100);
    // clamped above
    u8::try_from(pct).unwrap_or(100)
}
