//! Read interface through which the engine obtains its parameters

use std::sync::Arc;

use chrono::NaiveDate;
use log::warn;

use super::key::ParameterKey;
use super::set::ParameterSet;
use crate::error::Result;

/// Time-scoped, read-only source of calculation parameters
///
/// Implementors only need `lookup`; `parameters` assembles and validates the full set and
/// reports the first key without an active value as `EngineError::MissingParameter`.
pub trait ParameterProvider: Send + Sync {
    /// Value in effect for `key` on `as_of`, if any
    fn lookup(&self, key: ParameterKey, as_of: NaiveDate) -> Option<f64>;

    /// Complete parameter set in effect on `as_of`
    fn parameters(&self, as_of: NaiveDate) -> Result<ParameterSet> {
        ParameterSet::from_lookup(as_of, |key| self.lookup(key, as_of))
    }
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for Box<P> {
    fn lookup(&self, key: ParameterKey, as_of: NaiveDate) -> Option<f64> {
        (**self).lookup(key, as_of)
    }

    fn parameters(&self, as_of: NaiveDate) -> Result<ParameterSet> {
        (**self).parameters(as_of)
    }
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for Arc<P> {
    fn lookup(&self, key: ParameterKey, as_of: NaiveDate) -> Option<f64> {
        (**self).lookup(key, as_of)
    }

    fn parameters(&self, as_of: NaiveDate) -> Result<ParameterSet> {
        (**self).parameters(as_of)
    }
}

/// Serves one fixed parameter set for every date
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    set: ParameterSet,
}

impl StaticProvider {
    pub fn new(set: ParameterSet) -> Self {
        Self { set }
    }
}

impl ParameterProvider for StaticProvider {
    fn lookup(&self, key: ParameterKey, _as_of: NaiveDate) -> Option<f64> {
        Some(self.set.value(key))
    }

    fn parameters(&self, _as_of: NaiveDate) -> Result<ParameterSet> {
        Ok(self.set.clone())
    }
}

/// Fills keys the wrapped provider cannot resolve with the German 2024 defaults
#[derive(Debug, Clone)]
pub struct FallbackProvider<P> {
    inner: P,
}

impl<P: ParameterProvider> FallbackProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: ParameterProvider> ParameterProvider for FallbackProvider<P> {
    fn lookup(&self, key: ParameterKey, as_of: NaiveDate) -> Option<f64> {
        self.inner.lookup(key, as_of).or_else(|| {
            let fallback = key.german_2024_default();
            warn!("no active setting for `{}` on {}, using default {}", key, as_of, fallback);
            Some(fallback)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::parameters::{SettingRow, SettingsStore};
    use approx::assert_abs_diff_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_static_provider_ignores_date() {
        let mut set = ParameterSet::german_2024();
        set.inflation_rate_pct = 2.5;
        let provider = StaticProvider::new(set.clone());

        assert_eq!(provider.parameters(d(1990, 1, 1)).unwrap(), set);
        assert_abs_diff_eq!(provider.lookup(ParameterKey::InflationRate, d(2050, 1, 1)).unwrap(), 2.5);
    }

    #[test]
    fn test_empty_store_fails_without_fallback() {
        let store = SettingsStore::default();
        assert!(matches!(
            store.parameters(d(2024, 1, 1)),
            Err(EngineError::MissingParameter { key: "inflation_rate", .. })
        ));
    }

    #[test]
    fn test_fallback_fills_only_missing_keys() {
        let store = SettingsStore::new(vec![SettingRow::open_ended(
            ParameterKey::InflationRate,
            3.0,
            d(2024, 1, 1),
        )]);
        let provider = FallbackProvider::new(store);
        let set = provider.parameters(d(2024, 6, 1)).unwrap();

        assert_abs_diff_eq!(set.inflation_rate_pct, 3.0);
        assert_abs_diff_eq!(set.care_insurance_rate_pct, 3.60);
        assert_eq!(set.life_expectancy_years, 85);
    }

    #[test]
    fn test_boxed_provider_delegates() {
        let provider: Box<dyn ParameterProvider> = Box::new(StaticProvider::default());
        assert_eq!(provider.parameters(d(2024, 1, 1)).unwrap(), ParameterSet::german_2024());
    }
}
