//! Pension gap and the capital needed to close it

use serde::{Deserialize, Serialize};

use super::inflation::InflationProjector;

/// Monthly gap at the three time points plus the capital needed at retirement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionGap {
    pub today: f64,
    pub at_retirement: f64,
    pub at_life_expectancy: f64,
    pub required_capital_at_retirement: f64,
}

/// Inputs to a full gap analysis
#[derive(Debug, Clone, Copy)]
pub struct GapInputs {
    /// Desired monthly pension in today's money
    pub desired_today: f64,
    /// Monthly income already secured, in today's money
    pub provided_today: f64,
    pub inflation_rate_pct: f64,
    pub investment_return_rate_pct: f64,
    pub years_to_retirement: i32,
    pub years_to_life_expectancy: i32,
}

impl GapInputs {
    pub fn years_in_retirement(&self) -> i32 {
        (self.years_to_life_expectancy - self.years_to_retirement).max(0)
    }
}

/// Gap analysis helpers
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Shortfall in today's money, never negative
    pub fn current_gap(desired_today: f64, provided_today: f64) -> f64 {
        (desired_today - provided_today).max(0.0)
    }

    pub fn inflated_gap(current_gap: f64, inflation_rate_pct: f64, years_from_today: i32) -> f64 {
        InflationProjector::project_forward(current_gap, inflation_rate_pct, years_from_today)
    }

    /// Lump sum needed at retirement to cover a flat annual gap
    ///
    /// `(annual_gap * years) / (1 + return/100)^years`: the total shortfall discounted once
    /// over the whole retirement span, not an annuity present value.
    pub fn required_capital(
        annual_gap_at_retirement: f64,
        years_in_retirement: i32,
        investment_return_rate_pct: f64,
    ) -> f64 {
        let years = years_in_retirement.max(0);
        (annual_gap_at_retirement * f64::from(years))
            / InflationProjector::growth_factor(investment_return_rate_pct, years)
    }

    pub fn analyze(inputs: &GapInputs) -> PensionGap {
        let today = Self::current_gap(inputs.desired_today, inputs.provided_today);
        let at_retirement =
            Self::inflated_gap(today, inputs.inflation_rate_pct, inputs.years_to_retirement);
        let at_life_expectancy =
            Self::inflated_gap(today, inputs.inflation_rate_pct, inputs.years_to_life_expectancy);

        let required_capital_at_retirement = Self::required_capital(
            at_retirement * 12.0,
            inputs.years_in_retirement(),
            inputs.investment_return_rate_pct,
        );

        PensionGap {
            today,
            at_retirement,
            at_life_expectancy,
            required_capital_at_retirement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_required_capital_simplified_formula() {
        let capital = GapAnalyzer::required_capital(12_000.0, 18, 3.0);
        assert_relative_eq!(capital, (12_000.0 * 18.0) / 1.03_f64.powi(18), max_relative = 1e-12);
    }

    #[test]
    fn test_required_capital_without_retirement_years() {
        assert_eq!(GapAnalyzer::required_capital(12_000.0, 0, 3.0), 0.0);
        assert_eq!(GapAnalyzer::required_capital(12_000.0, -4, 3.0), 0.0);
    }

    #[test]
    fn test_gap_is_zero_when_covered() {
        assert_eq!(GapAnalyzer::current_gap(1500.0, 1800.0), 0.0);
        assert_eq!(GapAnalyzer::current_gap(-100.0, 0.0), 0.0);
    }

    #[test]
    fn test_analyze() {
        let inputs = GapInputs {
            desired_today: 2500.0,
            provided_today: 1500.0,
            inflation_rate_pct: 2.0,
            investment_return_rate_pct: 3.0,
            years_to_retirement: 27,
            years_to_life_expectancy: 45,
        };
        let gap = GapAnalyzer::analyze(&inputs);

        assert_abs_diff_eq!(gap.today, 1000.0);
        assert_relative_eq!(gap.at_retirement, 1000.0 * 1.02_f64.powi(27), max_relative = 1e-12);
        assert_relative_eq!(gap.at_life_expectancy, 1000.0 * 1.02_f64.powi(45), max_relative = 1e-12);
        assert_relative_eq!(
            gap.required_capital_at_retirement,
            gap.at_retirement * 12.0 * 18.0 / 1.03_f64.powi(18),
            max_relative = 1e-12
        );
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_gap_never_negative(desired in -1.0e6f64..1.0e6, provided in -1.0e6f64..1.0e6) {
            prop_assert!(GapAnalyzer::current_gap(desired, provided) >= 0.0);
        }
    }
}
