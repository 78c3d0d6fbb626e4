//! A purchase scenario: the amount paid and which recoverable credits apply.
//!
//! Rates are percentages (19 means 19%). A rate only matters when its gate is
//! set; PIS and COFINS share a single gate because both credits come from the
//! same qualifying condition.
//!
//! The calculators assume `purchase_value` is at most
//! [`MAX_AMOUNT`](crate::core::input::MAX_AMOUNT) and rates are at most 100;
//! beyond that the decimal arithmetic can overflow. The input collectors
//! enforce both bounds before a scenario is built.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxScenario {
    /// Purchase value of the item (unit or lot)
    pub purchase_value: Decimal,

    /// ICMS rate (%) used for the credit
    pub icms_rate: Decimal,

    /// PIS rate (%) used for the credit
    pub pis_rate: Decimal,

    /// COFINS rate (%) used for the credit
    pub cofins_rate: Decimal,

    /// Whether this purchase generates an ICMS credit
    pub has_icms_credit: bool,

    /// Whether this purchase generates PIS and COFINS credits
    pub has_pis_cofins_credit: bool,
}

impl TaxScenario {
    /// Scenario with no recoverable credits
    pub fn new(purchase_value: Decimal) -> Self {
        Self {
            purchase_value,
            icms_rate: Decimal::ZERO,
            pis_rate: Decimal::ZERO,
            cofins_rate: Decimal::ZERO,
            has_icms_credit: false,
            has_pis_cofins_credit: false,
        }
    }

    /// Enable the ICMS credit at the given rate
    pub fn with_icms_credit(mut self, icms_rate: Decimal) -> Self {
        self.icms_rate = icms_rate;
        self.has_icms_credit = true;
        self
    }

    /// Enable the PIS and COFINS credits at the given rates
    pub fn with_pis_cofins_credit(mut self, pis_rate: Decimal, cofins_rate: Decimal) -> Self {
        self.pis_rate = pis_rate;
        self.cofins_rate = cofins_rate;
        self.has_pis_cofins_credit = true;
        self
    }

    /// Build a scenario from floating point inputs
    ///
    /// NaN and infinities have no decimal representation; they are rejected
    /// here as a precondition violation before any calculation runs. The
    /// amount bound is not checked here; see the module docs.
    pub fn from_f64(
        purchase_value: f64,
        icms_rate: f64,
        pis_rate: f64,
        cofins_rate: f64,
        has_icms_credit: bool,
        has_pis_cofins_credit: bool,
    ) -> Result<Self> {
        Ok(Self {
            purchase_value: finite_decimal("purchase value", purchase_value)?,
            icms_rate: finite_decimal("ICMS rate", icms_rate)?,
            pis_rate: finite_decimal("PIS rate", pis_rate)?,
            cofins_rate: finite_decimal("COFINS rate", cofins_rate)?,
            has_icms_credit,
            has_pis_cofins_credit,
        })
    }
}

fn finite_decimal(label: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{} must be a finite number, got: {}",
            label, value
        )));
    }

    Decimal::from_f64(value).ok_or_else(|| {
        AppError::validation(format!("{} is out of the decimal range: {}", label, value))
    })
}
