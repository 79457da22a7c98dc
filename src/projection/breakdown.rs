//! Month-by-month view of the first projection year

use chrono::Month;
use crate::formulas::round2;
use crate::inputs::CalculatorState;
use super::engine::MonthlyFigures;
use super::results::MonthlyBreakdown;

/// First-year figures for January through December
///
/// Every month carries the same flat figures; no seasonality is modelled.
pub fn generate_monthly_breakdown(state: &CalculatorState) -> Vec<MonthlyBreakdown> {
    let monthly = MonthlyFigures::from_state(state);

    std::iter::successors(Some(Month::January), |m| Some(m.succ()))
        .take(12)
        .map(|month| MonthlyBreakdown {
            month: month.name().to_string(),
            income: round2(monthly.gross_income),
            expenses: round2(monthly.total_expenses),
            mortgage: round2(monthly.mortgage),
            net_cash_flow: round2(monthly.net_cash_flow),
        })
        .collect()
}
