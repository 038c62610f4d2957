//! Statutory and occupational pension net of health and care insurance

use super::inflation::InflationProjector;
use crate::parameters::ParameterSet;

/// Net pension and purchasing power calculations
pub struct StatutoryPensionCalculator;

impl StatutoryPensionCalculator {
    /// Gross pension less health, additional health and care insurance contributions
    pub fn after_insurance(gross_pension: f64, rates: &ParameterSet) -> f64 {
        gross_pension * (1.0 - rates.total_insurance_rate())
    }

    /// Today's value of a net pension first paid in `years_to_retirement`
    pub fn purchasing_power_at_retirement(
        net_pension: f64,
        inflation_rate_pct: f64,
        years_to_retirement: i32,
    ) -> f64 {
        InflationProjector::discount(net_pension, inflation_rate_pct, years_to_retirement)
    }

    /// Occupational (BAV) pension after insurance
    ///
    /// Contributions are only levied on the part above the monthly exemption amount.
    pub fn occupational_after_insurance(gross_bav: f64, rates: &ParameterSet) -> f64 {
        let liable = (gross_bav - rates.health_insurance_exemption_bav_eur).max(0.0);
        gross_bav - liable * rates.total_insurance_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_after_insurance_2024_rates() {
        let rates = ParameterSet::german_2024();
        let net = StatutoryPensionCalculator::after_insurance(1000.0, &rates);
        assert_abs_diff_eq!(net, 878.50, epsilon = 1e-9);
    }

    #[test]
    fn test_purchasing_power_discounts() {
        let pp = StatutoryPensionCalculator::purchasing_power_at_retirement(1218.99, 2.0, 10);
        assert_abs_diff_eq!(pp, 1218.99 / 1.02_f64.powi(10), epsilon = 1e-9);
        assert!(pp < 1218.99);

        let same = StatutoryPensionCalculator::purchasing_power_at_retirement(900.0, 2.0, 0);
        assert_eq!(same, 900.0);
    }

    #[test]
    fn test_occupational_below_exemption_is_untouched() {
        let rates = ParameterSet::german_2024();
        assert_eq!(StatutoryPensionCalculator::occupational_after_insurance(150.0, &rates), 150.0);
        assert_eq!(StatutoryPensionCalculator::occupational_after_insurance(187.25, &rates), 187.25);
    }

    #[test]
    fn test_occupational_above_exemption() {
        let rates = ParameterSet::german_2024();
        let net = StatutoryPensionCalculator::occupational_after_insurance(487.25, &rates);
        assert_abs_diff_eq!(net, 487.25 - 300.0 * 0.1215, epsilon = 1e-9);
    }
}
