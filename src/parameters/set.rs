//! Resolved parameter set passed into every calculation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::key::ParameterKey;
use crate::error::{EngineError, Result};
use crate::intake::MAX_AGE_YEARS;

/// Progressive income tax table: five bracket rates around four thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBrackets {
    /// Percent rates stufe_1..stufe_5
    pub rates_pct: [f64; 5],
    /// Ascending EUR thresholds threshold_1..threshold_4
    pub thresholds_eur: [f64; 4],
}

impl TaxBrackets {
    pub fn german_2024() -> Self {
        Self {
            rates_pct: [0.0, 14.0, 24.0, 42.0, 45.0],
            thresholds_eur: [12_097.0, 17_444.0, 68_481.0, 277_826.0],
        }
    }
}

/// Economic, social insurance and tax parameters for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    // Economic assumptions
    pub inflation_rate_pct: f64,
    pub pension_increase_rate_pct: f64,
    pub investment_return_rate_pct: f64,

    // Social insurance
    pub health_insurance_rate_pct: f64,
    pub additional_health_insurance_rate_pct: f64,
    pub care_insurance_rate_pct: f64,
    pub health_insurance_exemption_bav_eur: f64,

    // Taxes
    pub tax_brackets: TaxBrackets,
    pub solidarity_surcharge_rate_pct: f64,
    pub solidarity_surcharge_threshold_eur: f64,
    pub church_tax_bavaria_bw_pct: f64,
    pub church_tax_other_states_pct: f64,

    // Demographics
    pub retirement_age_years: i32,
    pub life_expectancy_years: i32,
}

impl ParameterSet {
    /// German 2024 standard values
    pub fn german_2024() -> Self {
        Self {
            inflation_rate_pct: 2.00,
            pension_increase_rate_pct: 1.00,
            investment_return_rate_pct: 3.00,
            health_insurance_rate_pct: 7.30,
            additional_health_insurance_rate_pct: 1.25,
            care_insurance_rate_pct: 3.60,
            health_insurance_exemption_bav_eur: 187.25,
            tax_brackets: TaxBrackets::german_2024(),
            solidarity_surcharge_rate_pct: 5.50,
            solidarity_surcharge_threshold_eur: 19_450.00,
            church_tax_bavaria_bw_pct: 8.00,
            church_tax_other_states_pct: 9.00,
            retirement_age_years: 67,
            life_expectancy_years: 85,
        }
    }

    /// Build a set by resolving every key through `lookup`
    ///
    /// The first key without a value aborts with `MissingParameter`; the finished set is
    /// checked against the table invariants before it is returned.
    pub fn from_lookup<F>(as_of: NaiveDate, mut lookup: F) -> Result<Self>
    where
        F: FnMut(ParameterKey) -> Option<f64>,
    {
        let mut get = |key: ParameterKey| {
            lookup(key).ok_or(EngineError::MissingParameter {
                key: key.as_str(),
                as_of,
            })
        };

        let mut rates_pct = [0.0; 5];
        for (slot, key) in rates_pct.iter_mut().zip(ParameterKey::TAX_RATES) {
            *slot = get(key)?;
        }
        let mut thresholds_eur = [0.0; 4];
        for (slot, key) in thresholds_eur.iter_mut().zip(ParameterKey::TAX_THRESHOLDS) {
            *slot = get(key)?;
        }

        let set = Self {
            inflation_rate_pct: get(ParameterKey::InflationRate)?,
            pension_increase_rate_pct: get(ParameterKey::PensionIncreaseRate)?,
            investment_return_rate_pct: get(ParameterKey::InvestmentReturnRate)?,
            health_insurance_rate_pct: get(ParameterKey::HealthInsuranceRate)?,
            additional_health_insurance_rate_pct: get(ParameterKey::AdditionalHealthInsuranceRate)?,
            care_insurance_rate_pct: get(ParameterKey::CareInsuranceRate)?,
            health_insurance_exemption_bav_eur: get(ParameterKey::HealthInsuranceExemptionBav)?,
            tax_brackets: TaxBrackets { rates_pct, thresholds_eur },
            solidarity_surcharge_rate_pct: get(ParameterKey::SolidaritySurchargeRate)?,
            solidarity_surcharge_threshold_eur: get(ParameterKey::SolidaritySurchargeThreshold)?,
            church_tax_bavaria_bw_pct: get(ParameterKey::ChurchTaxBavariaBw)?,
            church_tax_other_states_pct: get(ParameterKey::ChurchTaxOtherStates)?,
            retirement_age_years: get(ParameterKey::RetirementAge)?.round() as i32,
            life_expectancy_years: get(ParameterKey::LifeExpectancy)?.round() as i32,
        };

        set.validate()?;
        Ok(set)
    }

    /// Value stored under `key`, in the settings store's units
    pub fn value(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::InflationRate => self.inflation_rate_pct,
            ParameterKey::PensionIncreaseRate => self.pension_increase_rate_pct,
            ParameterKey::InvestmentReturnRate => self.investment_return_rate_pct,
            ParameterKey::HealthInsuranceRate => self.health_insurance_rate_pct,
            ParameterKey::AdditionalHealthInsuranceRate => self.additional_health_insurance_rate_pct,
            ParameterKey::CareInsuranceRate => self.care_insurance_rate_pct,
            ParameterKey::HealthInsuranceExemptionBav => self.health_insurance_exemption_bav_eur,
            ParameterKey::TaxRateStufe1 => self.tax_brackets.rates_pct[0],
            ParameterKey::TaxRateStufe2 => self.tax_brackets.rates_pct[1],
            ParameterKey::TaxRateStufe3 => self.tax_brackets.rates_pct[2],
            ParameterKey::TaxRateStufe4 => self.tax_brackets.rates_pct[3],
            ParameterKey::TaxRateStufe5 => self.tax_brackets.rates_pct[4],
            ParameterKey::TaxThreshold1 => self.tax_brackets.thresholds_eur[0],
            ParameterKey::TaxThreshold2 => self.tax_brackets.thresholds_eur[1],
            ParameterKey::TaxThreshold3 => self.tax_brackets.thresholds_eur[2],
            ParameterKey::TaxThreshold4 => self.tax_brackets.thresholds_eur[3],
            ParameterKey::SolidaritySurchargeRate => self.solidarity_surcharge_rate_pct,
            ParameterKey::SolidaritySurchargeThreshold => self.solidarity_surcharge_threshold_eur,
            ParameterKey::ChurchTaxBavariaBw => self.church_tax_bavaria_bw_pct,
            ParameterKey::ChurchTaxOtherStates => self.church_tax_other_states_pct,
            ParameterKey::RetirementAge => f64::from(self.retirement_age_years),
            ParameterKey::LifeExpectancy => f64::from(self.life_expectancy_years),
        }
    }

    /// Combined health and care insurance rate as a fraction (12.15% -> 0.1215)
    pub fn total_insurance_rate(&self) -> f64 {
        (self.health_insurance_rate_pct
            + self.additional_health_insurance_rate_pct
            + self.care_insurance_rate_pct)
            / 100.0
    }

    /// Check the table invariants: non-negative rates, non-decreasing bracket rates,
    /// strictly increasing thresholds
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("inflation_rate", self.inflation_rate_pct),
            ("pension_increase_rate", self.pension_increase_rate_pct),
            ("investment_return_rate", self.investment_return_rate_pct),
            ("health_insurance_rate", self.health_insurance_rate_pct),
            ("additional_health_insurance_rate", self.additional_health_insurance_rate_pct),
            ("care_insurance_rate", self.care_insurance_rate_pct),
            ("solidarity_surcharge_rate", self.solidarity_surcharge_rate_pct),
            ("church_tax_bavaria_bw", self.church_tax_bavaria_bw_pct),
            ("church_tax_other_states", self.church_tax_other_states_pct),
        ];
        for (name, value) in percentages {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidParameters(format!(
                    "{name} must be a non-negative percentage, got {value}"
                )));
            }
        }

        let amounts = [
            ("health_insurance_exemption_bav", self.health_insurance_exemption_bav_eur),
            ("solidarity_surcharge_threshold", self.solidarity_surcharge_threshold_eur),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidParameters(format!(
                    "{name} must be a non-negative amount, got {value}"
                )));
            }
        }

        let rates = &self.tax_brackets.rates_pct;
        if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(EngineError::InvalidParameters(format!(
                "tax bracket rates must be non-negative, got {rates:?}"
            )));
        }
        if rates.windows(2).any(|w| w[1] < w[0]) {
            return Err(EngineError::InvalidParameters(format!(
                "tax bracket rates must be non-decreasing, got {rates:?}"
            )));
        }

        let thresholds = &self.tax_brackets.thresholds_eur;
        if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(EngineError::InvalidParameters(format!(
                "tax thresholds must be non-negative, got {thresholds:?}"
            )));
        }
        if thresholds.windows(2).any(|w| w[1] <= w[0]) {
            return Err(EngineError::InvalidParameters(format!(
                "tax thresholds must be strictly increasing, got {thresholds:?}"
            )));
        }

        let ages = [self.retirement_age_years, self.life_expectancy_years];
        if ages.iter().any(|age| !(0..=MAX_AGE_YEARS).contains(age)) {
            return Err(EngineError::InvalidParameters(format!(
                "demographic defaults must lie within 0..={} (retirement {}, life expectancy {})",
                MAX_AGE_YEARS, self.retirement_age_years, self.life_expectancy_years
            )));
        }

        Ok(())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::german_2024()
    }
}
