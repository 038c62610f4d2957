//! Setting keys and categories as stored by the admin settings store

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Grouping used by the admin settings screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    EconomicAssumptions,
    SocialInsurance,
    TaxBrackets,
    TaxThresholds,
    AdditionalTaxes,
    Demographics,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EconomicAssumptions => "economic_assumptions",
            Category::SocialInsurance => "social_insurance",
            Category::TaxBrackets => "tax_brackets",
            Category::TaxThresholds => "tax_thresholds",
            Category::AdditionalTaxes => "additional_taxes",
            Category::Demographics => "demographics",
        }
    }
}

impl FromStr for Category {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economic_assumptions" => Ok(Category::EconomicAssumptions),
            "social_insurance" => Ok(Category::SocialInsurance),
            "tax_brackets" => Ok(Category::TaxBrackets),
            "tax_thresholds" => Ok(Category::TaxThresholds),
            "additional_taxes" => Ok(Category::AdditionalTaxes),
            "demographics" => Ok(Category::Demographics),
            other => Err(LoadError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every value the engine needs from the settings store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    InflationRate,
    PensionIncreaseRate,
    InvestmentReturnRate,
    HealthInsuranceRate,
    AdditionalHealthInsuranceRate,
    CareInsuranceRate,
    HealthInsuranceExemptionBav,
    #[serde(rename = "tax_rate_stufe_1")]
    TaxRateStufe1,
    #[serde(rename = "tax_rate_stufe_2")]
    TaxRateStufe2,
    #[serde(rename = "tax_rate_stufe_3")]
    TaxRateStufe3,
    #[serde(rename = "tax_rate_stufe_4")]
    TaxRateStufe4,
    #[serde(rename = "tax_rate_stufe_5")]
    TaxRateStufe5,
    #[serde(rename = "tax_threshold_1")]
    TaxThreshold1,
    #[serde(rename = "tax_threshold_2")]
    TaxThreshold2,
    #[serde(rename = "tax_threshold_3")]
    TaxThreshold3,
    #[serde(rename = "tax_threshold_4")]
    TaxThreshold4,
    SolidaritySurchargeRate,
    SolidaritySurchargeThreshold,
    ChurchTaxBavariaBw,
    ChurchTaxOtherStates,
    RetirementAge,
    LifeExpectancy,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 22] = [
        ParameterKey::InflationRate,
        ParameterKey::PensionIncreaseRate,
        ParameterKey::InvestmentReturnRate,
        ParameterKey::HealthInsuranceRate,
        ParameterKey::AdditionalHealthInsuranceRate,
        ParameterKey::CareInsuranceRate,
        ParameterKey::HealthInsuranceExemptionBav,
        ParameterKey::TaxRateStufe1,
        ParameterKey::TaxRateStufe2,
        ParameterKey::TaxRateStufe3,
        ParameterKey::TaxRateStufe4,
        ParameterKey::TaxRateStufe5,
        ParameterKey::TaxThreshold1,
        ParameterKey::TaxThreshold2,
        ParameterKey::TaxThreshold3,
        ParameterKey::TaxThreshold4,
        ParameterKey::SolidaritySurchargeRate,
        ParameterKey::SolidaritySurchargeThreshold,
        ParameterKey::ChurchTaxBavariaBw,
        ParameterKey::ChurchTaxOtherStates,
        ParameterKey::RetirementAge,
        ParameterKey::LifeExpectancy,
    ];

    pub const TAX_RATES: [ParameterKey; 5] = [
        ParameterKey::TaxRateStufe1,
        ParameterKey::TaxRateStufe2,
        ParameterKey::TaxRateStufe3,
        ParameterKey::TaxRateStufe4,
        ParameterKey::TaxRateStufe5,
    ];

    pub const TAX_THRESHOLDS: [ParameterKey; 4] = [
        ParameterKey::TaxThreshold1,
        ParameterKey::TaxThreshold2,
        ParameterKey::TaxThreshold3,
        ParameterKey::TaxThreshold4,
    ];

    /// Key string used by the settings store
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKey::InflationRate => "inflation_rate",
            ParameterKey::PensionIncreaseRate => "pension_increase_rate",
            ParameterKey::InvestmentReturnRate => "investment_return_rate",
            ParameterKey::HealthInsuranceRate => "health_insurance_rate",
            ParameterKey::AdditionalHealthInsuranceRate => "additional_health_insurance_rate",
            ParameterKey::CareInsuranceRate => "care_insurance_rate",
            ParameterKey::HealthInsuranceExemptionBav => "health_insurance_exemption_bav",
            ParameterKey::TaxRateStufe1 => "tax_rate_stufe_1",
            ParameterKey::TaxRateStufe2 => "tax_rate_stufe_2",
            ParameterKey::TaxRateStufe3 => "tax_rate_stufe_3",
            ParameterKey::TaxRateStufe4 => "tax_rate_stufe_4",
            ParameterKey::TaxRateStufe5 => "tax_rate_stufe_5",
            ParameterKey::TaxThreshold1 => "tax_threshold_1",
            ParameterKey::TaxThreshold2 => "tax_threshold_2",
            ParameterKey::TaxThreshold3 => "tax_threshold_3",
            ParameterKey::TaxThreshold4 => "tax_threshold_4",
            ParameterKey::SolidaritySurchargeRate => "solidarity_surcharge_rate",
            ParameterKey::SolidaritySurchargeThreshold => "solidarity_surcharge_threshold",
            ParameterKey::ChurchTaxBavariaBw => "church_tax_bavaria_bw",
            ParameterKey::ChurchTaxOtherStates => "church_tax_other_states",
            ParameterKey::RetirementAge => "retirement_age",
            ParameterKey::LifeExpectancy => "life_expectancy",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ParameterKey::InflationRate
            | ParameterKey::PensionIncreaseRate
            | ParameterKey::InvestmentReturnRate => Category::EconomicAssumptions,
            ParameterKey::HealthInsuranceRate
            | ParameterKey::AdditionalHealthInsuranceRate
            | ParameterKey::CareInsuranceRate
            | ParameterKey::HealthInsuranceExemptionBav => Category::SocialInsurance,
            ParameterKey::TaxRateStufe1
            | ParameterKey::TaxRateStufe2
            | ParameterKey::TaxRateStufe3
            | ParameterKey::TaxRateStufe4
            | ParameterKey::TaxRateStufe5 => Category::TaxBrackets,
            ParameterKey::TaxThreshold1
            | ParameterKey::TaxThreshold2
            | ParameterKey::TaxThreshold3
            | ParameterKey::TaxThreshold4 => Category::TaxThresholds,
            ParameterKey::SolidaritySurchargeRate
            | ParameterKey::SolidaritySurchargeThreshold
            | ParameterKey::ChurchTaxBavariaBw
            | ParameterKey::ChurchTaxOtherStates => Category::AdditionalTaxes,
            ParameterKey::RetirementAge | ParameterKey::LifeExpectancy => Category::Demographics,
        }
    }

    /// German 2024 standard value, used only when a caller opts into fallbacks
    pub fn german_2024_default(&self) -> f64 {
        match self {
            ParameterKey::InflationRate => 2.00,
            ParameterKey::PensionIncreaseRate => 1.00,
            ParameterKey::InvestmentReturnRate => 3.00,
            ParameterKey::HealthInsuranceRate => 7.30,
            ParameterKey::AdditionalHealthInsuranceRate => 1.25,
            ParameterKey::CareInsuranceRate => 3.60,
            ParameterKey::HealthInsuranceExemptionBav => 187.25,
            ParameterKey::TaxRateStufe1 => 0.00,
            ParameterKey::TaxRateStufe2 => 14.00,
            ParameterKey::TaxRateStufe3 => 24.00,
            ParameterKey::TaxRateStufe4 => 42.00,
            ParameterKey::TaxRateStufe5 => 45.00,
            ParameterKey::TaxThreshold1 => 12_097.00,
            ParameterKey::TaxThreshold2 => 17_444.00,
            ParameterKey::TaxThreshold3 => 68_481.00,
            ParameterKey::TaxThreshold4 => 277_826.00,
            ParameterKey::SolidaritySurchargeRate => 5.50,
            ParameterKey::SolidaritySurchargeThreshold => 19_450.00,
            ParameterKey::ChurchTaxBavariaBw => 8.00,
            ParameterKey::ChurchTaxOtherStates => 9.00,
            ParameterKey::RetirementAge => 67.0,
            ParameterKey::LifeExpectancy => 85.0,
        }
    }
}

impl FromStr for ParameterKey {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| LoadError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
