//! Compounding of money values across whole years

/// Inflation compounding helpers
pub struct InflationProjector;

impl InflationProjector {
    /// Compound growth factor `(1 + rate/100)^years`
    pub fn growth_factor(annual_rate_pct: f64, years: i32) -> f64 {
        (1.0 + annual_rate_pct / 100.0).powi(years)
    }

    /// Value of `value` after `years` of growth at `annual_rate_pct`
    ///
    /// Zero or negative spans leave the value unchanged.
    pub fn project_forward(value: f64, annual_rate_pct: f64, years: i32) -> f64 {
        if years <= 0 {
            return value;
        }

        value * Self::growth_factor(annual_rate_pct, years)
    }

    /// Inverse of `project_forward`: today's value of an amount due in `years`
    pub fn discount(value: f64, annual_rate_pct: f64, years: i32) -> f64 {
        if years <= 0 {
            return value;
        }

        value / Self::growth_factor(annual_rate_pct, years)
    }
}
