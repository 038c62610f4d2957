//! Progressive income tax, solidarity surcharge and church tax
//!
//! The income tax walks the four thresholds of the bracket table and taxes each slice of
//! income at its own rate:
//! - income up to threshold_1 is tax free
//! - threshold_1..threshold_2 at stufe_2, threshold_2..threshold_3 at stufe_3, ...
//! - everything above threshold_4 at stufe_5

use serde::{Deserialize, Serialize};

use crate::parameters::{ParameterSet, TaxBrackets};

/// Church tax rate region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChurchTaxRegion {
    /// Bavaria and Baden-Württemberg
    BavariaBadenWuerttemberg,
    /// All other federal states
    OtherStates,
}

/// Annual tax burden split by component
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub income_tax: f64,
    pub solidarity_surcharge: f64,
    pub church_tax: f64,
    pub total: f64,
}

/// Tax calculator bound to one parameter set
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    brackets: TaxBrackets,
    solidarity_rate_pct: f64,
    solidarity_threshold_eur: f64,
    church_bavaria_bw_pct: f64,
    church_other_states_pct: f64,
}

impl TaxCalculator {
    pub fn from_parameters(params: &ParameterSet) -> Self {
        Self {
            brackets: params.tax_brackets.clone(),
            solidarity_rate_pct: params.solidarity_surcharge_rate_pct,
            solidarity_threshold_eur: params.solidarity_surcharge_threshold_eur,
            church_bavaria_bw_pct: params.church_tax_bavaria_bw_pct,
            church_other_states_pct: params.church_tax_other_states_pct,
        }
    }

    pub fn income_tax(&self, annual_income: f64) -> f64 {
        income_tax(annual_income, &self.brackets)
    }

    pub fn solidarity_surcharge(&self, income_tax: f64) -> f64 {
        solidarity_surcharge(income_tax, self.solidarity_threshold_eur, self.solidarity_rate_pct)
    }

    pub fn church_tax(&self, income_tax: f64, region: ChurchTaxRegion) -> f64 {
        let rate_pct = match region {
            ChurchTaxRegion::BavariaBadenWuerttemberg => self.church_bavaria_bw_pct,
            ChurchTaxRegion::OtherStates => self.church_other_states_pct,
        };
        income_tax * rate_pct / 100.0
    }

    /// Full annual burden; church tax only applies when a region is given
    pub fn assess(&self, annual_income: f64, church: Option<ChurchTaxRegion>) -> TaxBreakdown {
        let income_tax = self.income_tax(annual_income);
        let solidarity_surcharge = self.solidarity_surcharge(income_tax);
        let church_tax = church.map_or(0.0, |region| self.church_tax(income_tax, region));

        TaxBreakdown {
            income_tax,
            solidarity_surcharge,
            church_tax,
            total: income_tax + solidarity_surcharge + church_tax,
        }
    }
}

/// Tax owed on each of the four slices above threshold_1
pub fn bracket_slices(annual_income: f64, brackets: &TaxBrackets) -> [f64; 4] {
    let thresholds = &brackets.thresholds_eur;
    let mut slices = [0.0; 4];

    for (i, slice) in slices.iter_mut().enumerate() {
        let lower = thresholds[i];
        let upper = thresholds.get(i + 1).copied().unwrap_or(f64::INFINITY);
        if annual_income <= lower {
            break;
        }

        let taxable = annual_income.min(upper) - lower;
        *slice = taxable * brackets.rates_pct[i + 1] / 100.0;
    }

    slices
}

/// Progressive income tax as the sum of the bracket slices
pub fn income_tax(annual_income: f64, brackets: &TaxBrackets) -> f64 {
    bracket_slices(annual_income, brackets).iter().sum()
}

/// Surcharge on the income tax once the tax itself reaches `threshold_eur`
pub fn solidarity_surcharge(income_tax: f64, threshold_eur: f64, rate_pct: f64) -> f64 {
    if income_tax >= threshold_eur {
        income_tax * rate_pct / 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn brackets() -> TaxBrackets {
        TaxBrackets {
            rates_pct: [0.0, 14.0, 24.0, 42.0, 45.0],
            thresholds_eur: [12_097.0, 17_444.0, 68_481.0, 277_826.0],
        }
    }

    #[test]
    fn test_tax_free_up_to_first_threshold() {
        assert_eq!(income_tax(0.0, &brackets()), 0.0);
        assert_eq!(income_tax(12_097.0, &brackets()), 0.0);
    }

    #[test]
    fn test_second_threshold() {
        let tax = income_tax(17_444.0, &brackets());
        assert_abs_diff_eq!(tax, (17_444.0 - 12_097.0) * 0.14, epsilon = 1e-9);
        assert_abs_diff_eq!(tax, 748.58, epsilon = 1e-6);
    }

    #[test]
    fn test_income_in_top_bracket() {
        let income = 300_000.0;
        let expected = (17_444.0 - 12_097.0) * 0.14
            + (68_481.0 - 17_444.0) * 0.24
            + (277_826.0 - 68_481.0) * 0.42
            + (300_000.0 - 277_826.0) * 0.45;
        assert_abs_diff_eq!(income_tax(income, &brackets()), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_not_flat_top_rate() {
        // 50k sits in the third bracket; a flat 24% would overstate the tax
        let tax = income_tax(50_000.0, &brackets());
        assert!(tax < 50_000.0 * 0.24);
        assert_abs_diff_eq!(
            tax,
            (17_444.0 - 12_097.0) * 0.14 + (50_000.0 - 17_444.0) * 0.24,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_solidarity_threshold_compares_tax_amount() {
        assert_eq!(solidarity_surcharge(19_449.99, 19_450.0, 5.5), 0.0);
        assert_abs_diff_eq!(solidarity_surcharge(19_450.0, 19_450.0, 5.5), 1_069.75, epsilon = 1e-9);
    }

    #[test]
    fn test_assess_with_church_tax() {
        let calc = TaxCalculator::from_parameters(&ParameterSet::german_2024());
        let income = 120_000.0;
        let breakdown = calc.assess(income, Some(ChurchTaxRegion::BavariaBadenWuerttemberg));

        let tax = income_tax(income, &brackets());
        assert_abs_diff_eq!(breakdown.income_tax, tax, epsilon = 1e-9);
        assert_abs_diff_eq!(breakdown.solidarity_surcharge, tax * 0.055, epsilon = 1e-9);
        assert_abs_diff_eq!(breakdown.church_tax, tax * 0.08, epsilon = 1e-9);
        assert_abs_diff_eq!(
            breakdown.total,
            breakdown.income_tax + breakdown.solidarity_surcharge + breakdown.church_tax,
            epsilon = 1e-9
        );

        let other = calc.church_tax(tax, ChurchTaxRegion::OtherStates);
        assert_abs_diff_eq!(other, tax * 0.09, epsilon = 1e-9);
    }

    #[test]
    fn test_assess_without_church() {
        let calc = TaxCalculator::from_parameters(&ParameterSet::german_2024());
        let breakdown = calc.assess(30_000.0, None);
        assert_eq!(breakdown.church_tax, 0.0);
        // Income tax on 30k is far below the surcharge threshold
        assert_eq!(breakdown.solidarity_surcharge, 0.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_tax_is_sum_of_slices_and_monotone(
            income_eur in 0u32..600_000,
            raise_eur in 0u32..50_000,
        ) {
            let income = income_eur as f64;
            let slices = bracket_slices(income, &brackets());
            let tax = income_tax(income, &brackets());

            prop_assert!(slices.iter().all(|s| *s >= 0.0));
            prop_assert!((tax - slices.iter().sum::<f64>()).abs() < 1e-9);
            prop_assert!(tax <= income * 0.45);
            prop_assert!(income_tax(income + raise_eur as f64, &brackets()) >= tax);
        }
    }
}
