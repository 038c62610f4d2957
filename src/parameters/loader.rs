//! CSV-based settings loader
//!
//! Reads the exported admin settings table from data/settings/

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;
use log::info;

use super::key::{Category, ParameterKey};
use super::store::{SettingRow, SettingsStore};
use crate::error::LoadError;

/// Default path to the settings export
pub const DEFAULT_SETTINGS_PATH: &str = "data/settings/pension_settings.csv";

/// Raw CSV row matching the settings table columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    key: String,
    category: String,
    value: f64,
    #[serde(default)]
    unit: String,
    is_active: String,
    valid_from: String,
    #[serde(default)]
    valid_until: String,
}

impl CsvRow {
    fn into_setting(self) -> Result<SettingRow, LoadError> {
        let key: ParameterKey = self.key.trim().parse()?;
        let category: Category = self.category.trim().parse()?;
        if category != key.category() {
            return Err(LoadError::CategoryMismatch {
                key,
                expected: key.category(),
                found: category,
            });
        }

        let is_active = matches!(
            self.is_active.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );

        let valid_until = match self.valid_until.trim() {
            "" => None,
            value => Some(parse_date(value)?),
        };

        Ok(SettingRow {
            key,
            category,
            value: self.value,
            unit: self.unit,
            is_active,
            valid_from: parse_date(self.valid_from.trim())?,
            valid_until,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, LoadError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| LoadError::Date {
        value: value.to_string(),
        source,
    })
}

/// Load the settings table from a CSV file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<SettingsStore, LoadError> {
    let reader = Reader::from_path(path.as_ref())?;
    let store = collect_rows(reader)?;
    info!("loaded {} settings rows from {}", store.rows().len(), path.as_ref().display());
    Ok(store)
}

/// Load the settings table from any reader (e.g., string buffer, network stream)
pub fn load_settings_from_reader<R: Read>(reader: R) -> Result<SettingsStore, LoadError> {
    collect_rows(Reader::from_reader(reader))
}

/// Load the settings table from the default location
pub fn load_default_settings() -> Result<SettingsStore, LoadError> {
    load_settings(DEFAULT_SETTINGS_PATH)
}

fn collect_rows<R: Read>(mut reader: Reader<R>) -> Result<SettingsStore, LoadError> {
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row.into_setting()?);
    }

    Ok(SettingsStore::new(rows))
}
