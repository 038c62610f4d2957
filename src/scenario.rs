//! Scenario runner for batch projections
//!
//! Resolves parameters once per run, then projects many clients in parallel or one client
//! under several what-if parameter sets.

use chrono::NaiveDate;
use log::info;
use rayon::prelude::*;

use crate::error::Result;
use crate::intake::{ContractClassifier, IntakeRecord, KeywordClassifier};
use crate::parameters::{ParameterProvider, ParameterSet};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Batch runner around a projection engine
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(load_default_settings()?, ProjectionConfig::default());
/// let results = runner.run_batch(&intakes, as_of)?;
/// ```
pub struct ScenarioRunner<P, C = KeywordClassifier> {
    engine: ProjectionEngine<P, C>,
}

impl<P: ParameterProvider> ScenarioRunner<P> {
    pub fn new(provider: P, config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(provider, config),
        }
    }
}

impl<P: ParameterProvider, C: ContractClassifier> ScenarioRunner<P, C> {
    pub fn with_engine(engine: ProjectionEngine<P, C>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ProjectionEngine<P, C> {
        &self.engine
    }

    /// Run a single projection
    pub fn run(&self, intake: &IntakeRecord, as_of: NaiveDate) -> Result<ProjectionResult> {
        self.engine.compute_projection(intake, as_of)
    }

    /// Project every intake against the parameters in effect on `as_of`
    ///
    /// Fails as a whole only when the parameters cannot be resolved; invalid intakes are
    /// reported individually, in input order.
    pub fn run_batch(
        &self,
        intakes: &[IntakeRecord],
        as_of: NaiveDate,
    ) -> Result<Vec<Result<ProjectionResult>>> {
        let params = self.engine.provider().parameters(as_of)?;
        info!("projecting {} intakes as of {}", intakes.len(), as_of);

        Ok(intakes
            .par_iter()
            .map(|intake| self.engine.project_with(intake, &params, as_of))
            .collect())
    }

    /// Project one intake under each of the given parameter sets
    pub fn run_scenarios(
        &self,
        intake: &IntakeRecord,
        scenarios: &[ParameterSet],
        as_of: NaiveDate,
    ) -> Vec<Result<ProjectionResult>> {
        scenarios
            .iter()
            .map(|params| self.engine.project_with(intake, params, as_of))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::intake::{Contract, ContractCategory};
    use crate::parameters::{SettingsStore, StaticProvider};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn test_intake(current_age: i32) -> IntakeRecord {
        IntakeRecord {
            current_age,
            retirement_age: Some(67),
            pension_wish_today: 2000.0,
            statutory_pension_claims: true,
            statutory_pension_amount: 1400.0,
            contracts: vec![Contract::new(ContractCategory::Pension, "Rürup-Rente", 100.0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let runner = ScenarioRunner::new(StaticProvider::default(), ProjectionConfig::default());
        let intakes = vec![test_intake(30), test_intake(70), test_intake(50)];

        let results = runner.run_batch(&intakes, as_of()).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().current_age, 30);
        assert!(matches!(results[1], Err(EngineError::InvalidIntake(_))));
        assert_eq!(results[2].as_ref().unwrap().current_age, 50);
    }

    #[test]
    fn test_batch_fails_without_parameters() {
        let runner = ScenarioRunner::new(SettingsStore::default(), ProjectionConfig::default());
        assert!(runner.run_batch(&[test_intake(30)], as_of()).is_err());
    }

    #[test]
    fn test_scenarios_by_inflation() {
        let runner = ScenarioRunner::new(StaticProvider::default(), ProjectionConfig::default());

        let scenarios: Vec<_> = [1.0, 2.0, 3.0]
            .iter()
            .map(|&rate| ParameterSet {
                inflation_rate_pct: rate,
                ..ParameterSet::german_2024()
            })
            .collect();

        let results = runner.run_scenarios(&test_intake(40), &scenarios, as_of());
        assert_eq!(results.len(), 3);

        // Higher inflation means a larger nominal gap at retirement
        let low = results[0].as_ref().unwrap();
        let high = results[2].as_ref().unwrap();
        assert!(high.pension_gap.at_retirement > low.pension_gap.at_retirement);
    }
}
