//! Return and coverage ratios

/// Cash-on-cash return as a percentage of the cash invested
///
/// Returns 0 when nothing was invested.
pub fn calculate_cash_on_cash(annual_cash_flow: f64, total_invested: f64) -> f64 {
    if total_invested == 0.0 {
        return 0.0;
    }
    annual_cash_flow / total_invested * 100.0
}

/// Capitalization rate: NOI as a percentage of property value
pub fn calculate_cap_rate(noi: f64, property_value: f64) -> f64 {
    if property_value == 0.0 {
        return 0.0;
    }
    noi / property_value * 100.0
}

/// Net operating income (debt service excluded). May be negative.
pub fn calculate_noi(gross_income: f64, operating_expenses: f64) -> f64 {
    gross_income - operating_expenses
}

/// Debt service coverage ratio
///
/// 1.25 or above is the usual lender threshold. Returns 0 for an unfinanced
/// purchase (no debt service).
pub fn calculate_dscr(noi: f64, annual_debt_service: f64) -> f64 {
    if annual_debt_service == 0.0 {
        return 0.0;
    }
    noi / annual_debt_service
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominators() {
        assert_eq!(calculate_cash_on_cash(5000.0, 0.0), 0.0);
        assert_eq!(calculate_cap_rate(5000.0, 0.0), 0.0);
        assert_eq!(calculate_dscr(5000.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratios() {
        assert!((calculate_cash_on_cash(6500.0, 65000.0) - 10.0).abs() < 1e-12);
        assert!((calculate_cap_rate(18000.0, 300000.0) - 6.0).abs() < 1e-12);
        assert!((calculate_dscr(25000.0, 20000.0) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_negative_noi() {
        assert_eq!(calculate_noi(10000.0, 12500.0), -2500.0);
        assert!(calculate_cap_rate(-2500.0, 100000.0) < 0.0);
    }
}
