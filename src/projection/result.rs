//! Projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::PensionGap;
use crate::parameters::ParameterSet;

/// A monthly amount at the three time points of the projection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    pub today: f64,
    pub retirement: f64,
    pub life_expectancy: f64,
}

/// Statutory pension variants, all monthly
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatutoryPension {
    /// Gross amount from the pension statement
    pub gross: f64,
    /// Gross less health and care insurance
    pub after_insurance: f64,
    /// Net amount in today's money
    pub purchasing_power: f64,
}

/// Complete projection for one intake and parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub client: Option<String>,
    pub as_of: NaiveDate,

    // General settings
    pub current_age: i32,
    pub retirement_age: i32,
    pub life_expectancy: i32,
    pub inflation_rate: f64,
    pub years_to_retirement: i32,
    pub years_to_life_expectancy: i32,

    // Series
    pub desired_pension: TimeSeries,
    pub legal_pension: TimeSeries,
    pub private_pension: TimeSeries,
    pub occupational_pension: TimeSeries,

    pub statutory_pension: StatutoryPension,
    /// Occupational pension today after insurance above the BAV exemption
    pub occupational_pension_after_insurance: f64,
    /// Yearly amount from additional-income contracts
    pub additional_income_annual: f64,

    pub pension_gap: PensionGap,

    /// Parameters the projection was computed with
    pub parameters: ParameterSet,
}

impl ProjectionResult {
    pub fn required_capital_at_retirement(&self) -> f64 {
        self.pension_gap.required_capital_at_retirement
    }

    /// Flat view in the field layout of the pension chart component
    pub fn chart_data(&self) -> ChartData {
        ChartData {
            current_age: self.current_age,
            inflation_rate: self.inflation_rate,
            retirement_age: self.retirement_age,
            life_expectancy: self.life_expectancy,
            desired_pension_today: self.desired_pension.today,
            desired_pension_retirement: self.desired_pension.retirement,
            desired_pension_life_expectancy: self.desired_pension.life_expectancy,
            legal_pension_today: self.legal_pension.today,
            legal_pension_retirement: self.legal_pension.retirement,
            legal_pension_life_expectancy: self.legal_pension.life_expectancy,
            private_pension_today: self.private_pension.today,
            private_pension_retirement: self.private_pension.retirement,
            private_pension_life_expectancy: self.private_pension.life_expectancy,
            bav_riester_today: self.occupational_pension.today,
            bav_riester_retirement: self.occupational_pension.retirement,
            bav_riester_life_expectancy: self.occupational_pension.life_expectancy,
            pension_gap_today: self.pension_gap.today,
            pension_gap_retirement: self.pension_gap.at_retirement,
            pension_gap_life_expectancy: self.pension_gap.at_life_expectancy,
            required_capital: self.pension_gap.required_capital_at_retirement,
        }
    }
}

/// Flat chart payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub current_age: i32,
    pub inflation_rate: f64,
    pub retirement_age: i32,
    pub life_expectancy: i32,

    pub desired_pension_today: f64,
    pub desired_pension_retirement: f64,
    pub desired_pension_life_expectancy: f64,

    pub legal_pension_today: f64,
    pub legal_pension_retirement: f64,
    pub legal_pension_life_expectancy: f64,

    pub private_pension_today: f64,
    pub private_pension_retirement: f64,
    pub private_pension_life_expectancy: f64,

    pub bav_riester_today: f64,
    pub bav_riester_retirement: f64,
    pub bav_riester_life_expectancy: f64,

    pub pension_gap_today: f64,
    pub pension_gap_retirement: f64,
    pub pension_gap_life_expectancy: f64,
    pub required_capital: f64,
}
