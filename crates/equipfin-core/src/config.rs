//! Financing plan presets and defaults.
//!
//! The defaults mirror the storefront's finance calculator: leasing offered
//! over 12–60 months at 18% with 30% down, and a 0% installment plan over
//! 3–12 months. Every field may be overridden from a config file; missing
//! fields keep their default.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinanceError;
use crate::types::{Currency, Percent, Rate};
use crate::FinanceResult;

/// Active financing plan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingConfig {
    /// Currency used for display labels
    pub currency: Currency,
    /// Leasing terms offered, in months
    pub leasing_terms: Vec<u32>,
    /// Installment terms offered, in months
    pub installment_terms: Vec<u32>,
    pub default_leasing_term: u32,
    pub default_installment_term: u32,
    /// Nominal annual rate applied when none is given (18 = 18%)
    pub default_annual_rate_percent: Percent,
    /// Lowest rate accepted without a warning
    pub min_rate_percent: Percent,
    /// Highest rate accepted without a warning
    pub max_rate_percent: Percent,
    /// Share of the price proposed as down payment (0.30 = 30%)
    pub default_down_payment_share: Rate,
    /// Largest down payment share accepted without a warning
    pub max_down_payment_share: Rate,
    /// Days between consecutive installment due dates
    pub installment_interval_days: u32,
}

impl Default for FinancingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::RUB,
            leasing_terms: vec![12, 18, 24, 36, 48, 60],
            installment_terms: vec![3, 6, 9, 12],
            default_leasing_term: 24,
            default_installment_term: 6,
            default_annual_rate_percent: dec!(18),
            min_rate_percent: dec!(1),
            max_rate_percent: dec!(50),
            default_down_payment_share: dec!(0.30),
            max_down_payment_share: dec!(0.90),
            installment_interval_days: 30,
        }
    }
}

impl FinancingConfig {
    /// Parse a JSON document, then validate it.
    pub fn from_json_str(json: &str) -> FinanceResult<Self> {
        let config: FinancingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the quote layer cannot work with.
    pub fn validate(&self) -> FinanceResult<()> {
        if self.leasing_terms.is_empty() || self.installment_terms.is_empty() {
            return Err(FinanceError::InvalidConfig(
                "term presets cannot be empty".into(),
            ));
        }
        let mut all_terms = self
            .leasing_terms
            .iter()
            .chain(&self.installment_terms)
            .chain([&self.default_leasing_term, &self.default_installment_term]);
        if all_terms.any(|&t| t == 0) {
            return Err(FinanceError::InvalidConfig(
                "terms must be at least 1 month".into(),
            ));
        }
        if self.default_annual_rate_percent < Decimal::ZERO
            || self.min_rate_percent < Decimal::ZERO
        {
            return Err(FinanceError::InvalidConfig(
                "rates cannot be negative".into(),
            ));
        }
        if self.min_rate_percent > self.max_rate_percent {
            return Err(FinanceError::InvalidConfig(format!(
                "min_rate_percent {} is above max_rate_percent {}",
                self.min_rate_percent, self.max_rate_percent
            )));
        }
        for (name, share) in [
            ("default_down_payment_share", self.default_down_payment_share),
            ("max_down_payment_share", self.max_down_payment_share),
        ] {
            if share < Decimal::ZERO || share > Decimal::ONE {
                return Err(FinanceError::InvalidConfig(format!(
                    "{name} must be between 0 and 1, got {share}"
                )));
            }
        }
        if self.installment_interval_days == 0 {
            return Err(FinanceError::InvalidConfig(
                "installment_interval_days must be positive".into(),
            ));
        }
        Ok(())
    }
}
