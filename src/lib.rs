//! Rental ROI - financial calculation engine for rental property analysis
//!
//! This library provides:
//! - Loan math (level payment, remaining balance, amortization schedule)
//! - Return ratios (cash-on-cash, cap rate, NOI, DSCR) and Newton-Raphson IRR
//! - First-year metrics and multi-year projections with compounding growth
//! - Input validation and JSON/CSV loading at the caller boundary
//! - Batch and what-if scenario runs

pub mod formulas;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{CalculatorState, LoanDetails, Expenses, Income, ProjectionSettings, InputError};
pub use projection::{
    calculate_roi, generate_monthly_breakdown, CalculatedMetrics, YearlyProjection, MonthlyBreakdown,
};
pub use scenario::{ScenarioRunner, ScenarioAdjustment};
