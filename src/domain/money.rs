use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision
/// issues. A balance of 1250.00 is stored as 125000 cents.
pub type Cents = i64;

/// Format cents as a decimal string.
/// Example: 125000 -> "1250.00", 5 -> "0.05"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal amount into cents. Accepts "1000", "12.5", "12.50".
/// Negative amounts and more than two decimal digits are rejected; the
/// ledger's operations never take signed input.
pub fn parse_cents(input: &str) -> Result<Cents, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let (units_str, decimals_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    let units: Cents = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseAmountError::InvalidFormat)?
    };
    if units < 0 || units_str.starts_with('-') || units_str.starts_with('+') {
        return Err(ParseAmountError::InvalidFormat);
    }

    let decimal_cents: Cents = match decimals_str.len() {
        0 => 0,
        // "12.5" means 12.50
        1 => {
            decimals_str
                .parse::<Cents>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
                * 10
        }
        2 => decimals_str
            .parse()
            .map_err(|_| ParseAmountError::InvalidFormat)?,
        _ => return Err(ParseAmountError::TooManyDecimals),
    };

    units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseAmountError::Overflow)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("empty amount")]
    Empty,

    #[error("invalid amount format")]
    InvalidFormat,

    #[error("amounts have at most two decimal digits")]
    TooManyDecimals,

    #[error("amount out of range")]
    Overflow,
}
