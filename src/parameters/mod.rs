//! Economic, social insurance and tax parameters
//!
//! The engine never reads configuration directly: a `ParameterProvider` resolves the
//! settings in effect on a date into an immutable `ParameterSet`, which is then passed
//! into every calculation.

mod key;
mod set;
mod store;
mod provider;
pub mod loader;

pub use key::{Category, ParameterKey};
pub use set::{ParameterSet, TaxBrackets};
pub use store::{SettingRow, SettingsStore};
pub use provider::{FallbackProvider, ParameterProvider, StaticProvider};
pub use loader::{load_default_settings, load_settings, load_settings_from_reader};
