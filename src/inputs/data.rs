//! Calculator input records matching the ROI calculator form

use serde::{Deserialize, Serialize};
use super::error::InputError;

/// Longest projection horizon accepted at the input boundary
pub const MAX_ANALYSIS_YEARS: u32 = 50;

/// Purchase and financing terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanDetails {
    pub purchase_price: f64,

    /// Cash down payment ($)
    pub down_payment: f64,

    /// Principal financed
    pub loan_amount: f64,

    /// Annual interest rate as a percentage (6.5 = 6.5%)
    pub interest_rate: f64,

    /// Loan term in years (typically 15 or 30)
    pub loan_term: f64,

    pub closing_costs: f64,

    /// Points charged, as a percentage of the loan amount
    pub loan_points: f64,
}

impl LoanDetails {
    /// Build loan terms where the loan finances whatever the down payment
    /// does not cover
    pub fn financed(
        purchase_price: f64,
        down_payment: f64,
        interest_rate: f64,
        loan_term: f64,
        closing_costs: f64,
        loan_points: f64,
    ) -> Self {
        Self {
            purchase_price,
            down_payment,
            loan_amount: (purchase_price - down_payment).max(0.0),
            interest_rate,
            loan_term,
            closing_costs,
            loan_points,
        }
    }

    /// Down payment as a percentage of the purchase price
    pub fn down_payment_percent(&self) -> f64 {
        if self.purchase_price == 0.0 {
            return 0.0;
        }
        self.down_payment / self.purchase_price * 100.0
    }
}

impl Default for LoanDetails {
    fn default() -> Self {
        Self {
            purchase_price: 400_000.0,
            down_payment: 80_000.0,
            loan_amount: 320_000.0,
            interest_rate: 6.5,
            loan_term: 30.0,
            closing_costs: 10_000.0,
            loan_points: 0.0,
        }
    }
}

/// Operating expense assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Expenses {
    /// Share of rent lost to vacancy (%)
    pub vacancy_rate: f64,

    /// Annual property taxes ($)
    pub property_taxes: f64,

    /// Annual growth of property taxes from year 2 (%)
    pub property_tax_increase_rate: f64,

    /// Annual premium ($)
    pub home_insurance: f64,

    /// Annual premium ($)
    pub landlord_insurance: f64,

    /// Monthly HOA dues ($)
    pub hoa_fees: f64,

    /// Management fee as a percentage of contract rent
    pub property_management_fee: f64,

    /// Maintenance reserve as a percentage of contract rent
    pub maintenance_reserve: f64,

    /// Flat monthly capital expenditure reserve ($)
    pub capex_reserve: f64,
}

impl Default for Expenses {
    fn default() -> Self {
        Self {
            vacancy_rate: 5.0,
            property_taxes: 5_000.0,
            property_tax_increase_rate: 2.0,
            home_insurance: 1_200.0,
            landlord_insurance: 800.0,
            hoa_fees: 0.0,
            property_management_fee: 10.0,
            maintenance_reserve: 5.0,
            capex_reserve: 200.0,
        }
    }
}

/// Rental income assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Income {
    pub monthly_rent: f64,

    /// Monthly income outside rent (laundry, parking, ...)
    pub other_income: f64,

    /// Annual rent growth from year 2 (%)
    pub annual_rent_increase: f64,
}

impl Default for Income {
    fn default() -> Self {
        Self {
            monthly_rent: 3_000.0,
            other_income: 0.0,
            annual_rent_increase: 3.0,
        }
    }
}

/// Projection horizon and appreciation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionSettings {
    /// Years to project (the calculator offers 5, 10, 20 or 30)
    pub analysis_years: u32,

    /// Annual property value growth from year 2 (%)
    pub property_appreciation: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            analysis_years: 30,
            property_appreciation: 3.0,
        }
    }
}

/// Complete input snapshot for one ROI calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorState {
    pub loan_details: LoanDetails,
    pub expenses: Expenses,
    pub income: Income,
    pub settings: ProjectionSettings,
}

impl CalculatorState {
    /// Check that the snapshot is economically sensible
    ///
    /// The engine itself accepts anything; callers run this at the boundary
    /// before handing user input to it.
    pub fn validate(&self) -> Result<(), InputError> {
        let loan = &self.loan_details;
        let exp = &self.expenses;
        let inc = &self.income;
        let set = &self.settings;

        let amounts = [
            ("purchasePrice", loan.purchase_price),
            ("downPayment", loan.down_payment),
            ("loanAmount", loan.loan_amount),
            ("interestRate", loan.interest_rate),
            ("loanTerm", loan.loan_term),
            ("closingCosts", loan.closing_costs),
            ("loanPoints", loan.loan_points),
            ("propertyTaxes", exp.property_taxes),
            ("homeInsurance", exp.home_insurance),
            ("landlordInsurance", exp.landlord_insurance),
            ("hoaFees", exp.hoa_fees),
            ("capexReserve", exp.capex_reserve),
            ("monthlyRent", inc.monthly_rent),
            ("otherIncome", inc.other_income),
        ];
        for (field, value) in amounts {
            check_finite(field, value)?;
            if value < 0.0 {
                return Err(InputError::invalid(field, "must not be negative"));
            }
        }

        let percentages = [
            ("vacancyRate", exp.vacancy_rate),
            ("propertyManagementFee", exp.property_management_fee),
            ("maintenanceReserve", exp.maintenance_reserve),
        ];
        for (field, value) in percentages {
            check_finite(field, value)?;
            if !(0.0..=100.0).contains(&value) {
                return Err(InputError::invalid(field, "must be between 0 and 100"));
            }
        }

        let growth_rates = [
            ("propertyTaxIncreaseRate", exp.property_tax_increase_rate),
            ("annualRentIncrease", inc.annual_rent_increase),
            ("propertyAppreciation", set.property_appreciation),
        ];
        for (field, value) in growth_rates {
            check_finite(field, value)?;
            if value <= -100.0 {
                return Err(InputError::invalid(field, "must be greater than -100"));
            }
        }

        if loan.loan_amount > 0.0 && loan.loan_term <= 0.0 {
            return Err(InputError::invalid("loanTerm", "must be positive when a loan is financed"));
        }

        if set.analysis_years < 1 || set.analysis_years > MAX_ANALYSIS_YEARS {
            return Err(InputError::invalid(
                "analysisYears",
                format!("must be between 1 and {}", MAX_ANALYSIS_YEARS),
            ));
        }

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::invalid(field, "must be a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let state = CalculatorState::default();
        assert!(state.validate().is_ok());
        assert_eq!(state.loan_details.loan_amount, 320_000.0);
        assert_eq!(state.settings.analysis_years, 30);
    }

    #[test]
    fn test_financed_loan_amount() {
        let loan = LoanDetails::financed(300_000.0, 60_000.0, 6.5, 30.0, 5_000.0, 0.0);
        assert_eq!(loan.loan_amount, 240_000.0);
        assert!((loan.down_payment_percent() - 20.0).abs() < 1e-12);

        let cash = LoanDetails::financed(300_000.0, 350_000.0, 6.5, 30.0, 0.0, 0.0);
        assert_eq!(cash.loan_amount, 0.0);
    }

    #[test]
    fn test_down_payment_percent_zero_price() {
        let loan = LoanDetails { purchase_price: 0.0, ..LoanDetails::default() };
        assert_eq!(loan.down_payment_percent(), 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut state = CalculatorState::default();
        state.income.monthly_rent = -1.0;
        assert!(matches!(
            state.validate(),
            Err(InputError::InvalidField { field: "monthlyRent", .. })
        ));

        let mut state = CalculatorState::default();
        state.expenses.vacancy_rate = 120.0;
        assert!(state.validate().is_err());

        let mut state = CalculatorState::default();
        state.loan_details.interest_rate = f64::NAN;
        assert!(state.validate().is_err());

        let mut state = CalculatorState::default();
        state.loan_details.loan_term = 0.0;
        assert!(matches!(
            state.validate(),
            Err(InputError::InvalidField { field: "loanTerm", .. })
        ));

        let mut state = CalculatorState::default();
        state.settings.analysis_years = 0;
        assert!(state.validate().is_err());
    }

    #[test]
    fn test_validate_allows_negative_growth() {
        let mut state = CalculatorState::default();
        state.settings.property_appreciation = -5.0;
        state.income.annual_rent_increase = -1.0;
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let state: CalculatorState = serde_json::from_str(
            r#"{"income": {"monthlyRent": 2500}, "settings": {"analysisYears": 5}}"#,
        )
        .unwrap();
        assert_eq!(state.income.monthly_rent, 2500.0);
        assert_eq!(state.income.annual_rent_increase, 3.0);
        assert_eq!(state.settings.analysis_years, 5);
        assert_eq!(state.loan_details, LoanDetails::default());
    }
}
