//! ROI calculation: first-year metrics, yearly projection and IRR

use log::debug;
use crate::formulas::{
    calculate_mortgage_payment, calculate_cash_on_cash, calculate_cap_rate, calculate_noi,
    calculate_dscr, calculate_remaining_balance, solve_irr, round2, IRR_DEFAULT_GUESS,
};
use crate::inputs::CalculatorState;
use super::state::ProjectionState;
use super::results::{CalculatedMetrics, YearlyProjection};

/// Unrounded first-year monthly figures
///
/// Management fee and maintenance reserve are charged on contract rent, not
/// on vacancy-adjusted rent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFigures {
    pub mortgage: f64,
    pub effective_rent: f64,
    pub gross_income: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub hoa: f64,
    pub management_fee: f64,
    pub maintenance: f64,
    pub capex: f64,
    /// Operating expenses, mortgage excluded
    pub total_expenses: f64,
    pub net_cash_flow: f64,
}

impl MonthlyFigures {
    pub fn from_state(state: &CalculatorState) -> Self {
        let loan = &state.loan_details;
        let expenses = &state.expenses;
        let income = &state.income;

        let mortgage = calculate_mortgage_payment(loan.loan_amount, loan.interest_rate, loan.loan_term);

        let effective_rent = income.monthly_rent * (1.0 - expenses.vacancy_rate / 100.0);
        let gross_income = effective_rent + income.other_income;

        let property_tax = expenses.property_taxes / 12.0;
        let insurance = (expenses.home_insurance + expenses.landlord_insurance) / 12.0;
        let hoa = expenses.hoa_fees;
        let management_fee = income.monthly_rent * (expenses.property_management_fee / 100.0);
        let maintenance = income.monthly_rent * (expenses.maintenance_reserve / 100.0);
        let capex = expenses.capex_reserve;

        let total_expenses = property_tax + insurance + hoa + management_fee + maintenance + capex;
        let net_cash_flow = gross_income - total_expenses - mortgage;

        Self {
            mortgage,
            effective_rent,
            gross_income,
            property_tax,
            insurance,
            hoa,
            management_fee,
            maintenance,
            capex,
            total_expenses,
            net_cash_flow,
        }
    }
}

/// Cash invested up front: down payment, closing costs and points
pub fn total_cash_invested(state: &CalculatorState) -> f64 {
    let loan = &state.loan_details;
    loan.down_payment + loan.closing_costs + loan.loan_amount * loan.loan_points / 100.0
}

/// Run the full ROI calculation for one input snapshot
///
/// Never fails: degenerate inputs produce zero or neutral values. Callers
/// validate inputs beforehand (see [`CalculatorState::validate`]).
pub fn calculate_roi(state: &CalculatorState) -> CalculatedMetrics {
    let monthly = MonthlyFigures::from_state(state);

    let annual_cash_flow = monthly.net_cash_flow * 12.0;
    let annual_gross_income = monthly.gross_income * 12.0;
    let annual_operating_expenses = monthly.total_expenses * 12.0;
    let annual_noi = calculate_noi(annual_gross_income, annual_operating_expenses);
    let annual_debt_service = monthly.mortgage * 12.0;

    let invested = total_cash_invested(state);

    let cash_on_cash_return = calculate_cash_on_cash(annual_cash_flow, invested);
    // Year-1 cap rate is on purchase price, not appreciated value
    let cap_rate = calculate_cap_rate(annual_noi, state.loan_details.purchase_price);
    let dscr = calculate_dscr(annual_noi, annual_debt_service);

    let yearly_projections = generate_yearly_projections(state, monthly.mortgage, invested);

    let cash_flows = irr_cash_flows(invested, &yearly_projections);
    let irr = solve_irr(&cash_flows, IRR_DEFAULT_GUESS);

    debug!(
        "ROI calculated: {} projection years, irr {:.4}% (converged: {})",
        yearly_projections.len(),
        irr.rate_percent,
        irr.converged
    );

    CalculatedMetrics {
        monthly_mortgage: round2(monthly.mortgage),
        total_monthly_expenses: round2(monthly.total_expenses),
        gross_monthly_income: round2(monthly.gross_income),
        net_monthly_cash_flow: round2(monthly.net_cash_flow),
        annual_cash_flow: round2(annual_cash_flow),
        annual_noi: round2(annual_noi),
        annual_debt_service: round2(annual_debt_service),
        cash_on_cash_return: round2(cash_on_cash_return),
        cap_rate: round2(cap_rate),
        dscr: round2(dscr),
        irr: round2(irr.rate_percent),
        irr_converged: irr.converged,
        total_cash_invested: round2(invested),
        yearly_projections,
    }
}

/// Year-by-year projection with compounding rent, taxes and appreciation
///
/// Insurance, HOA and capex stay flat; debt service is the fixed mortgage
/// payment for every year.
fn generate_yearly_projections(
    state: &CalculatorState,
    monthly_mortgage: f64,
    invested: f64,
) -> Vec<YearlyProjection> {
    let loan = &state.loan_details;
    let expenses = &state.expenses;
    let income = &state.income;

    let years = state.settings.analysis_years;
    let mut projections = Vec::with_capacity(years as usize);
    let mut current = ProjectionState::from_state(state);

    let annual_insurance = expenses.home_insurance + expenses.landlord_insurance;
    let annual_hoa = expenses.hoa_fees * 12.0;
    let annual_capex = expenses.capex_reserve * 12.0;
    let debt_service = monthly_mortgage * 12.0;

    for _ in 0..years {
        current.advance_year();

        let annual_rent = current.monthly_rent * 12.0;
        let effective_annual_rent = annual_rent * (1.0 - expenses.vacancy_rate / 100.0);
        let gross_income = effective_annual_rent + income.other_income * 12.0;

        let management_fee = annual_rent * (expenses.property_management_fee / 100.0);
        let maintenance = annual_rent * (expenses.maintenance_reserve / 100.0);
        let operating_expenses = current.property_taxes
            + annual_insurance
            + annual_hoa
            + management_fee
            + maintenance
            + annual_capex;

        let noi = gross_income - operating_expenses;
        let cash_flow = noi - debt_service;
        current.record_cash_flow(cash_flow);

        let loan_balance = calculate_remaining_balance(
            loan.loan_amount,
            loan.interest_rate,
            loan.loan_term,
            current.year * 12,
        );

        let equity = current.property_value - loan_balance;
        let total_return = current.cumulative_cash_flow + equity - invested;
        let roi = if invested > 0.0 { total_return / invested * 100.0 } else { 0.0 };

        projections.push(YearlyProjection {
            year: current.year,
            gross_income: round2(gross_income),
            operating_expenses: round2(operating_expenses),
            noi: round2(noi),
            debt_service: round2(debt_service),
            cash_flow: round2(cash_flow),
            cumulative_cash_flow: round2(current.cumulative_cash_flow),
            loan_balance: round2(loan_balance),
            property_value: round2(current.property_value),
            equity: round2(equity),
            total_return: round2(total_return),
            roi: round2(roi),
        });
    }

    projections
}

/// Cash-flow stream for IRR: the outlay, each year's cash flow, and the
/// final year's equity treated as sale proceeds
fn irr_cash_flows(invested: f64, projections: &[YearlyProjection]) -> Vec<f64> {
    let mut cash_flows = Vec::with_capacity(projections.len() + 1);
    cash_flows.push(-invested);
    cash_flows.extend(projections.iter().map(|p| p.cash_flow));

    if let Some(last) = projections.last() {
        if let Some(terminal) = cash_flows.last_mut() {
            *terminal += last.equity;
        }
    }

    cash_flows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::inputs::{Expenses, Income, LoanDetails, ProjectionSettings};

    fn duplex_state() -> CalculatorState {
        CalculatorState {
            loan_details: LoanDetails {
                purchase_price: 300_000.0,
                down_payment: 60_000.0,
                loan_amount: 240_000.0,
                interest_rate: 6.5,
                loan_term: 30.0,
                closing_costs: 5_000.0,
                loan_points: 0.0,
            },
            expenses: Expenses {
                vacancy_rate: 5.0,
                property_taxes: 3_600.0,
                property_tax_increase_rate: 2.0,
                home_insurance: 1_200.0,
                landlord_insurance: 0.0,
                hoa_fees: 0.0,
                property_management_fee: 10.0,
                maintenance_reserve: 5.0,
                capex_reserve: 100.0,
            },
            income: Income {
                monthly_rent: 2_500.0,
                other_income: 0.0,
                annual_rent_increase: 3.0,
            },
            settings: ProjectionSettings {
                analysis_years: 5,
                property_appreciation: 3.0,
            },
        }
    }

    #[test]
    fn test_monthly_figures() {
        let monthly = MonthlyFigures::from_state(&duplex_state());

        assert_abs_diff_eq!(monthly.effective_rent, 2375.0, epsilon = 1e-9);
        assert_abs_diff_eq!(monthly.gross_income, 2375.0, epsilon = 1e-9);
        // Fees on contract rent, not effective rent
        assert_abs_diff_eq!(monthly.management_fee, 250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(monthly.maintenance, 125.0, epsilon = 1e-9);
        // 300 tax + 100 insurance + 250 + 125 + 100 capex
        assert_abs_diff_eq!(monthly.total_expenses, 875.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            monthly.net_cash_flow,
            2375.0 - 875.0 - monthly.mortgage,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_total_cash_invested_includes_points() {
        let mut state = duplex_state();
        state.loan_details.loan_points = 1.5;
        assert_abs_diff_eq!(total_cash_invested(&state), 60_000.0 + 5_000.0 + 3_600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_analysis_years() {
        let mut state = duplex_state();
        state.settings.analysis_years = 0;
        let metrics = calculate_roi(&state);

        assert!(metrics.yearly_projections.is_empty());
        assert_eq!(metrics.irr, 0.0);
        assert!(!metrics.irr_converged);
        assert!(metrics.final_year().is_none());
    }

    #[test]
    fn test_irr_cash_flows_add_terminal_equity() {
        let metrics = calculate_roi(&duplex_state());
        let flows = irr_cash_flows(65_000.0, &metrics.yearly_projections);

        assert_eq!(flows.len(), 6);
        assert_eq!(flows[0], -65_000.0);
        assert_eq!(flows[1], metrics.yearly_projections[0].cash_flow);
        let last = &metrics.yearly_projections[4];
        assert_eq!(flows[5], last.cash_flow + last.equity);

        assert!(irr_cash_flows(65_000.0, &[]).len() == 1);
    }

    #[test]
    fn test_all_cash_purchase() {
        let mut state = duplex_state();
        state.loan_details.down_payment = 300_000.0;
        state.loan_details.loan_amount = 0.0;
        let metrics = calculate_roi(&state);

        assert_eq!(metrics.monthly_mortgage, 0.0);
        assert_eq!(metrics.annual_debt_service, 0.0);
        assert_eq!(metrics.dscr, 0.0);
        for year in &metrics.yearly_projections {
            assert_eq!(year.loan_balance, 0.0);
            assert_eq!(year.equity, year.property_value);
        }
    }

    #[test]
    fn test_zero_investment_roi() {
        let mut state = duplex_state();
        state.loan_details.down_payment = 0.0;
        state.loan_details.closing_costs = 0.0;
        let metrics = calculate_roi(&state);

        assert_eq!(metrics.total_cash_invested, 0.0);
        assert_eq!(metrics.cash_on_cash_return, 0.0);
        assert!(metrics.yearly_projections.iter().all(|y| y.roi == 0.0));
        assert!(metrics.irr.is_finite());
    }
}
