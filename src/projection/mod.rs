//! Projection orchestrator: first-year metrics, multi-year projection, IRR

mod state;
mod engine;
mod results;
mod breakdown;

pub use state::ProjectionState;
pub use engine::{calculate_roi, total_cash_invested, MonthlyFigures};
pub use results::{CalculatedMetrics, YearlyProjection, MonthlyBreakdown};
pub use breakdown::generate_monthly_breakdown;
