//! Scenario runner for batch and what-if calculations
//!
//! Holds a base input snapshot and re-runs the engine over variations of it.
//! Each calculation is independent, so batches fan out across threads.

use log::info;
use rayon::prelude::*;
use serde::Serialize;
use crate::inputs::{CalculatorState, NamedState};
use crate::projection::{calculate_roi, CalculatedMetrics};

/// A single change applied to the base inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioAdjustment {
    /// Annual interest rate (%)
    InterestRate(f64),
    /// Contract rent per month
    MonthlyRent(f64),
    /// Vacancy rate (%)
    VacancyRate(f64),
    /// Annual appreciation (%)
    PropertyAppreciation(f64),
    /// Projection horizon
    AnalysisYears(u32),
    /// Down payment; the loan amount is re-derived from the purchase price
    DownPayment(f64),
}

impl ScenarioAdjustment {
    pub fn apply(&self, state: &mut CalculatorState) {
        match *self {
            ScenarioAdjustment::InterestRate(rate) => state.loan_details.interest_rate = rate,
            ScenarioAdjustment::MonthlyRent(rent) => state.income.monthly_rent = rent,
            ScenarioAdjustment::VacancyRate(rate) => state.expenses.vacancy_rate = rate,
            ScenarioAdjustment::PropertyAppreciation(rate) => {
                state.settings.property_appreciation = rate
            }
            ScenarioAdjustment::AnalysisYears(years) => state.settings.analysis_years = years,
            ScenarioAdjustment::DownPayment(amount) => {
                let loan = &mut state.loan_details;
                loan.down_payment = amount;
                loan.loan_amount = (loan.purchase_price - amount).max(0.0);
            }
        }
    }
}

/// Metrics for one named scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub metrics: CalculatedMetrics,
}

/// Runs the engine over a base snapshot and its variations
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: CalculatorState,
}

impl ScenarioRunner {
    pub fn new(base: CalculatorState) -> Self {
        Self { base }
    }

    /// Run the base inputs unchanged
    pub fn run(&self) -> CalculatedMetrics {
        calculate_roi(&self.base)
    }

    /// Base inputs with a set of adjustments applied in order
    pub fn adjusted(&self, adjustments: &[ScenarioAdjustment]) -> CalculatorState {
        let mut state = self.base.clone();
        for adjustment in adjustments {
            adjustment.apply(&mut state);
        }
        state
    }

    /// Run each adjustment set as its own scenario; results keep input order
    pub fn run_scenarios(&self, scenarios: &[Vec<ScenarioAdjustment>]) -> Vec<CalculatedMetrics> {
        scenarios
            .par_iter()
            .map(|adjustments| calculate_roi(&self.adjusted(adjustments)))
            .collect()
    }

    /// Re-run the base inputs at each alternative interest rate
    pub fn interest_rate_sensitivity(&self, rates: &[f64]) -> Vec<(f64, CalculatedMetrics)> {
        let scenarios: Vec<_> = rates
            .iter()
            .map(|&rate| vec![ScenarioAdjustment::InterestRate(rate)])
            .collect();

        rates.iter().copied().zip(self.run_scenarios(&scenarios)).collect()
    }

    pub fn base(&self) -> &CalculatorState {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut CalculatorState {
        &mut self.base
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(CalculatorState::default())
    }
}

/// Run independent named scenarios in parallel, preserving input order
pub fn run_batch(scenarios: &[NamedState]) -> Vec<ScenarioResult> {
    info!("Running {} scenarios", scenarios.len());

    scenarios
        .par_iter()
        .map(|named| ScenarioResult {
            name: named.name.clone(),
            metrics: calculate_roi(&named.state),
        })
        .collect()
}
