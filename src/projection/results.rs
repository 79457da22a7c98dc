//! Output records for ROI calculations

use serde::{Deserialize, Serialize};

/// One year of the multi-year projection, rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    /// 1-indexed projection year
    pub year: u32,
    pub gross_income: f64,
    pub operating_expenses: f64,
    pub noi: f64,
    pub debt_service: f64,
    pub cash_flow: f64,
    /// Running sum of cash flow since year 1
    pub cumulative_cash_flow: f64,
    /// Outstanding principal at year end
    pub loan_balance: f64,
    pub property_value: f64,
    /// Property value less loan balance
    pub equity: f64,
    /// Cumulative cash flow plus equity less cash invested
    pub total_return: f64,
    /// Total return as a percentage of cash invested
    pub roi: f64,
}

/// Headline metrics plus the yearly projection for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetrics {
    // Monthly
    pub monthly_mortgage: f64,
    pub total_monthly_expenses: f64,
    pub gross_monthly_income: f64,
    pub net_monthly_cash_flow: f64,

    // Annual
    pub annual_cash_flow: f64,
    #[serde(rename = "annualNOI")]
    pub annual_noi: f64,
    pub annual_debt_service: f64,

    // Ratios (percentages except DSCR)
    pub cash_on_cash_return: f64,
    pub cap_rate: f64,
    pub dscr: f64,
    pub irr: f64,
    /// False when the IRR solver stopped without meeting its tolerance
    pub irr_converged: bool,

    /// Down payment + closing costs + points
    pub total_cash_invested: f64,

    pub yearly_projections: Vec<YearlyProjection>,
}

impl CalculatedMetrics {
    /// Last year of the projection, if any years were projected
    pub fn final_year(&self) -> Option<&YearlyProjection> {
        self.yearly_projections.last()
    }

    /// Projection for a given 1-indexed year
    pub fn year(&self, year: u32) -> Option<&YearlyProjection> {
        if year == 0 {
            return None;
        }
        self.yearly_projections.get(year as usize - 1)
    }
}

/// First-year monthly figures for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub mortgage: f64,
    pub net_cash_flow: f64,
}
