//! In-memory view of the admin settings table with date-bounded resolution

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::key::{Category, ParameterKey};
use super::provider::ParameterProvider;

/// One row of the settings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRow {
    pub key: ParameterKey,
    pub category: Category,
    pub value: f64,
    pub unit: String,
    pub is_active: bool,
    pub valid_from: NaiveDate,
    /// Open-ended when `None`
    pub valid_until: Option<NaiveDate>,
}

impl SettingRow {
    /// Active row valid from `valid_from` onwards with no end date
    pub fn open_ended(key: ParameterKey, value: f64, valid_from: NaiveDate) -> Self {
        Self {
            key,
            category: key.category(),
            value,
            unit: default_unit(key).to_string(),
            is_active: true,
            valid_from,
            valid_until: None,
        }
    }

    /// Whether the row applies on `as_of` (both bounds inclusive)
    pub fn is_effective_on(&self, as_of: NaiveDate) -> bool {
        self.is_active
            && self.valid_from <= as_of
            && self.valid_until.map_or(true, |until| until >= as_of)
    }
}

fn default_unit(key: ParameterKey) -> &'static str {
    match key {
        ParameterKey::HealthInsuranceExemptionBav
        | ParameterKey::TaxThreshold1
        | ParameterKey::TaxThreshold2
        | ParameterKey::TaxThreshold3
        | ParameterKey::TaxThreshold4
        | ParameterKey::SolidaritySurchargeThreshold => "€",
        ParameterKey::RetirementAge | ParameterKey::LifeExpectancy => "years",
        _ => "%",
    }
}

/// Settings rows held in memory, resolved per calculation date
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    rows: Vec<SettingRow>,
}

impl SettingsStore {
    pub fn new(rows: Vec<SettingRow>) -> Self {
        Self { rows }
    }

    /// Store seeded with the German 2024 values, valid from `valid_from`
    pub fn german_2024(valid_from: NaiveDate) -> Self {
        let rows = ParameterKey::ALL
            .iter()
            .map(|&key| SettingRow::open_ended(key, key.german_2024_default(), valid_from))
            .collect();
        Self { rows }
    }

    pub fn push(&mut self, row: SettingRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[SettingRow] {
        &self.rows
    }

    /// Row in effect for `key` on `as_of`
    ///
    /// Among overlapping rows the latest `valid_from` wins; rows with the same start date
    /// resolve to the one added last.
    pub fn effective_row(&self, key: ParameterKey, as_of: NaiveDate) -> Option<&SettingRow> {
        self.rows
            .iter()
            .filter(|row| row.key == key && row.is_effective_on(as_of))
            .fold(None, |best: Option<&SettingRow>, row| match best {
                Some(current) if current.valid_from > row.valid_from => Some(current),
                _ => Some(row),
            })
    }

    pub fn value(&self, key: ParameterKey, as_of: NaiveDate) -> Option<f64> {
        self.effective_row(key, as_of).map(|row| row.value)
    }

    /// Effective rows of one category, in key order
    pub fn active_by_category(&self, category: Category, as_of: NaiveDate) -> Vec<&SettingRow> {
        ParameterKey::ALL
            .iter()
            .filter(|key| key.category() == category)
            .filter_map(|&key| self.effective_row(key, as_of))
            .collect()
    }
}

impl ParameterProvider for SettingsStore {
    fn lookup(&self, key: ParameterKey, as_of: NaiveDate) -> Option<f64> {
        self.value(key, as_of)
    }
}
