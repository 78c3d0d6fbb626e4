//! Input collection helpers
//!
//! Everything that turns raw user text (console answers, JSON form fields)
//! into validated values for the calculators lives here. The calculators
//! themselves accept any decimal; range checks are this layer's job.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::core::{AppError, Result};

/// Upper bound for ICMS, PIS and COFINS rates (percent)
pub const MAX_RATE_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Upper bound for the desired profit margin (percent)
pub const MAX_MARGIN_PERCENT: Decimal = Decimal::ONE_THOUSAND;

/// Largest purchase value or net cost magnitude accepted (10^24)
///
/// Three full-rate credits of this amount, or this amount times the largest
/// margin factor (11), stay far below `Decimal::MAX` (~7.9 × 10^28), so the
/// calculators never overflow on validated input.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA100_0000, 0x1BCE_CCED, 0xD3C2, false, 0);

/// Parse a decimal typed with either a comma or a point as separator
///
/// `"4,50"`, `"4.50"` and `" 4.5 "` all yield 4.50.
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(AppError::validation("A numeric value is required"));
    }

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| AppError::validation(format!("Invalid number: '{}'", text.trim())))
}

/// Interpret a yes/no answer, `None` when the answer is not recognized
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "s" | "sim" | "y" | "yes" => Some(true),
        "n" | "nao" | "não" | "no" => Some(false),
        _ => None,
    }
}

/// Purchase value must be in [0, MAX_AMOUNT]
pub fn validate_purchase_value(value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "Purchase value must be non-negative, got: {}",
            value
        )));
    }

    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "Purchase value must not exceed {}, got: {}",
            MAX_AMOUNT, value
        )));
    }

    Ok(value)
}

/// Net cost may be negative but its magnitude must not exceed MAX_AMOUNT
pub fn validate_net_cost(value: Decimal) -> Result<Decimal> {
    if value.abs() > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "Net cost magnitude must not exceed {}, got: {}",
            MAX_AMOUNT, value
        )));
    }

    Ok(value)
}

/// Rates are percentages in [0, 100]
pub fn validate_rate(label: &str, rate: Decimal) -> Result<Decimal> {
    if rate < Decimal::ZERO || rate > MAX_RATE_PERCENT {
        return Err(AppError::validation(format!(
            "{} rate must be between 0 and {}, got: {}",
            label, MAX_RATE_PERCENT, rate
        )));
    }

    Ok(rate)
}

/// Margins are percentages in [0, 1000]
pub fn validate_margin(margin: Decimal) -> Result<Decimal> {
    if margin < Decimal::ZERO || margin > MAX_MARGIN_PERCENT {
        return Err(AppError::validation(format!(
            "Margin must be between 0 and {}, got: {}",
            MAX_MARGIN_PERCENT, margin
        )));
    }

    Ok(margin)
}

fn decimal_from_json(value: serde_json::Value) -> std::result::Result<Decimal, String> {
    match value {
        serde_json::Value::Number(number) => {
            parse_decimal(&number.to_string()).map_err(|e| e.to_string())
        }
        serde_json::Value::String(text) => parse_decimal(&text).map_err(|e| e.to_string()),
        other => Err(format!("expected a number or a numeric string, got: {}", other)),
    }
}

/// Serde helper accepting `4.5`, `"4.50"` or `"4,50"`
pub fn deserialize_decimal<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    decimal_from_json(value).map_err(serde::de::Error::custom)
}

/// Like [`deserialize_decimal`], with `null` mapped to `None`
pub fn deserialize_optional_decimal<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => decimal_from_json(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
