//! Closed-form pension calculations: inflation, tax, statutory pension and gap

mod inflation;
mod statutory;
mod gap;
pub mod tax;

pub use inflation::InflationProjector;
pub use statutory::StatutoryPensionCalculator;
pub use gap::{GapAnalyzer, GapInputs, PensionGap};
pub use tax::{ChurchTaxRegion, TaxBreakdown, TaxCalculator};
