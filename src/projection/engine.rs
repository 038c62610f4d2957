//! Projection engine turning an intake record into chart-ready pension figures

use chrono::NaiveDate;
use log::debug;

use crate::calculation::{GapAnalyzer, GapInputs, InflationProjector, StatutoryPensionCalculator};
use crate::error::Result;
use crate::intake::{ContractClassifier, IntakeRecord, KeywordClassifier};
use crate::parameters::{ParameterProvider, ParameterSet};
use super::result::{ProjectionResult, StatutoryPension, TimeSeries};

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Project with the intake's own inflation assumption instead of the parameter set's
    /// rate. Off by default: the parameter set's rate is authoritative.
    pub use_intake_inflation: bool,
}

/// Sums of the classified contract amounts, monthly in today's money
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PillarTotals {
    legal: f64,
    private: f64,
    occupational: f64,
}

/// Main projection engine
pub struct ProjectionEngine<P, C = KeywordClassifier> {
    provider: P,
    classifier: C,
    config: ProjectionConfig,
}

impl<P: ParameterProvider> ProjectionEngine<P> {
    /// Engine with the keyword contract classifier
    pub fn new(provider: P, config: ProjectionConfig) -> Self {
        Self::with_classifier(provider, KeywordClassifier, config)
    }
}

impl<P: ParameterProvider, C: ContractClassifier> ProjectionEngine<P, C> {
    pub fn with_classifier(provider: P, classifier: C, config: ProjectionConfig) -> Self {
        Self { provider, classifier, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Resolve the parameters in effect on `as_of` and project the intake
    pub fn compute_projection(&self, intake: &IntakeRecord, as_of: NaiveDate) -> Result<ProjectionResult> {
        let params = self.provider.parameters(as_of)?;
        self.project_with(intake, &params, as_of)
    }

    /// Project the intake with an already resolved parameter set
    ///
    /// The intake is validated first; an invalid intake produces no partial result.
    pub fn project_with(
        &self,
        intake: &IntakeRecord,
        params: &ParameterSet,
        as_of: NaiveDate,
    ) -> Result<ProjectionResult> {
        intake.validate(params.retirement_age_years)?;

        let current_age = intake.current_age;
        let retirement_age = intake.effective_retirement_age(params.retirement_age_years);
        let life_expectancy = params.life_expectancy_years;
        let years_to_retirement = retirement_age - current_age;
        let years_to_life_expectancy = life_expectancy - current_age;
        let inflation = self.inflation_rate(intake, params);

        debug!(
            "projecting age {} -> {} (life expectancy {}), inflation {}%, return {}%",
            current_age, retirement_age, life_expectancy, inflation, params.investment_return_rate_pct
        );

        let series = |today: f64| TimeSeries {
            today,
            retirement: InflationProjector::project_forward(today, inflation, years_to_retirement),
            life_expectancy: InflationProjector::project_forward(today, inflation, years_to_life_expectancy),
        };

        let totals = self.pillar_totals(intake);

        let gross = intake.statutory_pension_amount;
        let after_insurance = StatutoryPensionCalculator::after_insurance(gross, params);
        let purchasing_power = StatutoryPensionCalculator::purchasing_power_at_retirement(
            after_insurance,
            inflation,
            years_to_retirement,
        );

        let pension_gap = GapAnalyzer::analyze(&GapInputs {
            desired_today: intake.pension_wish_today,
            provided_today: purchasing_power + totals.private + totals.occupational,
            inflation_rate_pct: inflation,
            investment_return_rate_pct: params.investment_return_rate_pct,
            years_to_retirement,
            years_to_life_expectancy,
        });

        Ok(ProjectionResult {
            client: intake.client.clone(),
            as_of,
            current_age,
            retirement_age,
            life_expectancy,
            inflation_rate: inflation,
            years_to_retirement,
            years_to_life_expectancy,
            desired_pension: series(intake.pension_wish_today),
            legal_pension: series(totals.legal),
            private_pension: series(totals.private),
            occupational_pension: series(totals.occupational),
            statutory_pension: StatutoryPension {
                gross,
                after_insurance,
                purchasing_power,
            },
            occupational_pension_after_insurance:
                StatutoryPensionCalculator::occupational_after_insurance(totals.occupational, params),
            additional_income_annual: intake.contracts.iter().map(|c| c.annual_amount()).sum(),
            pension_gap,
            parameters: params.clone(),
        })
    }

    fn inflation_rate(&self, intake: &IntakeRecord, params: &ParameterSet) -> f64 {
        match intake.assumed_inflation_pct {
            Some(own) if self.config.use_intake_inflation => own,
            Some(own) => {
                if own != params.inflation_rate_pct {
                    debug!(
                        "ignoring intake inflation {}% in favour of configured {}%",
                        own, params.inflation_rate_pct
                    );
                }
                params.inflation_rate_pct
            }
            None => params.inflation_rate_pct,
        }
    }

    /// Legal and occupational sums are gated by the intake's claim flags
    fn pillar_totals(&self, intake: &IntakeRecord) -> PillarTotals {
        let mut totals = PillarTotals::default();

        for contract in &intake.contracts {
            let classes = self.classifier.classify(contract);
            if classes.legal && intake.statutory_pension_claims {
                totals.legal += contract.amount;
            }
            if classes.private {
                totals.private += contract.amount;
            }
            if classes.occupational && intake.professional_provision_works {
                totals.occupational += contract.amount;
            }
        }

        totals
    }
}
