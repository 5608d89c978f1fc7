//! Size-string parsing

use anyhow::{Context, Result, bail};

/// Recognized units, each 1024x the previous (binary multiples).
pub const SIZE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Parse a human-readable size like `10MB` or `1gb` into bytes. The string
/// must start with decimal digits immediately followed by one of
/// [`SIZE_UNITS`] (case-insensitive); anything else is a config error.
pub fn parse_size(input: &str) -> Result<u64> {
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let digits = &input[..digits_end];
    if digits.is_empty() {
        bail!("{input:?}: first character should be a number");
    }
    let number: u64 = digits
        .parse()
        .with_context(|| format!("{input:?}: invalid number"))?;

    let unit = input[digits_end..].to_ascii_uppercase();
    let exponent = SIZE_UNITS
        .iter()
        .position(|u| *u == unit)
        .ok_or_else(|| anyhow::anyhow!("{unit:?} is not a valid unit, expected one of {SIZE_UNITS:?}"))?;

    number
        .checked_mul(1u64 << (10 * exponent as u32))
        .ok_or_else(|| anyhow::anyhow!("{input:?}: size overflows 64 bits"))
}
