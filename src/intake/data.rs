//! Intake data structures matching the wizard's step payloads

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::IntakeError;

/// Oldest age accepted anywhere in a projection
pub const MAX_AGE_YEARS: i32 = 120;

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Contract grouping used by the contract screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractCategory {
    Payout,
    #[default]
    Pension,
    AdditionalIncome,
}

/// Payment frequency of additional income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Einmalig,
    Monatlich,
    #[serde(rename = "Jährlich")]
    Jaehrlich,
}

impl Frequency {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Einmalig" => Some(Frequency::Einmalig),
            "Monatlich" => Some(Frequency::Monatlich),
            "Jährlich" => Some(Frequency::Jaehrlich),
            _ => None,
        }
    }
}

/// An existing contract the client declared
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: ContractCategory,

    /// Free-text contract type, e.g. "Riester-Rente" or "Betriebliche Altersvorsorge"
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub contract_type: String,

    /// Monthly amount for pension contracts, payment amount for additional income
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,

    #[serde(default)]
    pub description: Option<String>,

    /// Only meaningful for additional income
    #[serde(default)]
    pub frequency: Option<String>,
}

impl Contract {
    pub fn new(category: ContractCategory, contract_type: &str, amount: f64) -> Self {
        Self {
            category,
            contract_type: contract_type.to_string(),
            amount,
            description: None,
            frequency: None,
        }
    }

    /// Yearly income from an additional-income contract
    ///
    /// Other categories and unknown frequencies yield 0.
    pub fn annual_amount(&self) -> f64 {
        if self.category != ContractCategory::AdditionalIncome {
            return 0.0;
        }

        match self.frequency.as_deref().and_then(Frequency::parse) {
            Some(Frequency::Einmalig) | Some(Frequency::Jaehrlich) => self.amount,
            Some(Frequency::Monatlich) => self.amount * 12.0,
            None => 0.0,
        }
    }
}

/// One client's pension-gap assessment input
///
/// Field names follow the wizard payload; missing or `null` numbers read as 0 and
/// missing flags as `false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    /// Label carried through to batch output
    #[serde(default)]
    pub client: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub current_age: i32,

    /// Client's chosen retirement age; the parameter default applies when absent
    #[serde(default)]
    pub retirement_age: Option<i32>,

    #[serde(default, alias = "assumedInflation")]
    pub assumed_inflation_pct: Option<f64>,

    /// Desired monthly pension in today's money
    #[serde(default, alias = "pensionWishCurrentValue", deserialize_with = "null_as_default")]
    pub pension_wish_today: f64,

    #[serde(default, alias = "provisionDuration", deserialize_with = "null_as_default")]
    pub provision_duration_years: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub statutory_pension_claims: bool,

    /// Gross monthly statutory pension expected at retirement
    #[serde(default, deserialize_with = "null_as_default")]
    pub statutory_pension_amount: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub professional_provision_works: bool,

    #[serde(default, alias = "pensionContracts", deserialize_with = "null_as_default")]
    pub contracts: Vec<Contract>,
}

impl IntakeRecord {
    /// Retirement age used for the projection
    pub fn effective_retirement_age(&self, default_retirement_age: i32) -> i32 {
        self.retirement_age.unwrap_or(default_retirement_age)
    }

    /// Reject records that cannot be projected
    pub fn validate(&self, default_retirement_age: i32) -> Result<(), IntakeError> {
        if self.current_age < 0 {
            return Err(IntakeError::NegativeAge(self.current_age));
        }

        let retirement_age = self.effective_retirement_age(default_retirement_age);
        if retirement_age < 0 {
            return Err(IntakeError::NegativeAge(retirement_age));
        }
        for age in [self.current_age, retirement_age] {
            if age > MAX_AGE_YEARS {
                return Err(IntakeError::AgeOutOfRange { age, max: MAX_AGE_YEARS });
            }
        }
        if retirement_age <= self.current_age {
            return Err(IntakeError::RetirementNotAfterCurrentAge {
                current_age: self.current_age,
                retirement_age,
            });
        }

        check_amount("pensionWishToday", self.pension_wish_today)?;
        check_amount("statutoryPensionAmount", self.statutory_pension_amount)?;
        for (i, contract) in self.contracts.iter().enumerate() {
            check_amount(&format!("contracts[{i}].amount"), contract.amount)?;
        }

        Ok(())
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), IntakeError> {
    if value < 0.0 || value.is_nan() {
        return Err(IntakeError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
