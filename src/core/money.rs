use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept for every amount the calculators produce
pub const AMOUNT_SCALE: u32 = 4;

/// Fractional digits shown for percentages (margins, rates)
pub const PERCENT_SCALE: u32 = 2;

/// Currency symbol used by the presenters (Brazilian real)
pub const CURRENCY_SYMBOL: &str = "R$";

/// Rounds an amount to [`AMOUNT_SCALE`] digits, midpoint away from zero
///
/// 0.07425 rounds to 0.0743, not to the banker's 0.0742.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a percentage (19 means 19%) into a fraction (0.19)
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Formats an amount for display: `R$ 1,234.5678`
///
/// Thousands are grouped with commas and the value is always shown with
/// [`AMOUNT_SCALE`] fractional digits.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_amount(amount);
    let digits = format!("{:.width$}", rounded.abs(), width = AMOUNT_SCALE as usize);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{} {}{}.{}",
        CURRENCY_SYMBOL,
        sign,
        group_thousands(integer),
        fraction
    )
}

/// Formats a percentage for display: `10.00%`
pub fn format_percent(percent: Decimal) -> String {
    let rounded =
        percent.round_dp_with_strategy(PERCENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.width$}%", rounded, width = PERCENT_SCALE as usize)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
