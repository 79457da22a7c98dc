//! Escalating values carried from one projection year to the next

use crate::inputs::CalculatorState;

/// Values that compound year over year during a projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection year (0 before the first year)
    pub year: u32,

    /// Contract rent per month
    pub monthly_rent: f64,

    /// Annual property taxes
    pub property_taxes: f64,

    /// Appreciated property value
    pub property_value: f64,

    /// Cash flow accumulated over the years processed so far
    pub cumulative_cash_flow: f64,

    rent_growth: f64,
    tax_growth: f64,
    appreciation: f64,
}

impl ProjectionState {
    /// Initialize from the unescalated inputs
    pub fn from_state(state: &CalculatorState) -> Self {
        Self {
            year: 0,
            monthly_rent: state.income.monthly_rent,
            property_taxes: state.expenses.property_taxes,
            property_value: state.loan_details.purchase_price,
            cumulative_cash_flow: 0.0,
            rent_growth: 1.0 + state.income.annual_rent_increase / 100.0,
            tax_growth: 1.0 + state.expenses.property_tax_increase_rate / 100.0,
            appreciation: 1.0 + state.settings.property_appreciation / 100.0,
        }
    }

    /// Advance to the next year
    ///
    /// Year 1 keeps the input values; every later year compounds rent, taxes
    /// and property value once.
    pub fn advance_year(&mut self) {
        self.year += 1;

        if self.year > 1 {
            self.monthly_rent *= self.rent_growth;
            self.property_taxes *= self.tax_growth;
            self.property_value *= self.appreciation;
        }
    }

    /// Add this year's cash flow to the running total
    pub fn record_cash_flow(&mut self, cash_flow: f64) {
        self.cumulative_cash_flow += cash_flow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_year_unescalated() {
        let input = CalculatorState::default();
        let mut state = ProjectionState::from_state(&input);
        state.advance_year();

        assert_eq!(state.year, 1);
        assert_eq!(state.monthly_rent, input.income.monthly_rent);
        assert_eq!(state.property_taxes, input.expenses.property_taxes);
        assert_eq!(state.property_value, input.loan_details.purchase_price);
    }

    #[test]
    fn test_growth_compounds() {
        let input = CalculatorState::default();
        let mut state = ProjectionState::from_state(&input);
        for _ in 0..3 {
            state.advance_year();
        }

        // Two escalations by year 3
        let expected_rent = 3_000.0 * 1.03 * 1.03;
        assert!((state.monthly_rent - expected_rent).abs() < 1e-9);
        let expected_value = 400_000.0 * 1.03 * 1.03;
        assert!((state.property_value - expected_value).abs() < 1e-6);
    }
}
