//! Amortizing loan math: level payment, outstanding balance, yearly schedule

use serde::{Deserialize, Serialize};

/// Monthly principal-and-interest payment on a fully amortizing loan
///
/// `M = P * [r(1+r)^n] / [(1+r)^n - 1]` with `r` the monthly rate and `n` the
/// number of monthly payments.
///
/// # Arguments
/// * `principal` - Loan amount
/// * `annual_rate` - Annual interest rate as a percentage (6.5 = 6.5%)
/// * `years` - Loan term in years
pub fn calculate_mortgage_payment(principal: f64, annual_rate: f64, years: f64) -> f64 {
    if principal <= 0.0 || years <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let num_payments = years * 12.0;

    if monthly_rate == 0.0 {
        return principal / num_payments;
    }

    let growth = (1.0 + monthly_rate).powf(num_payments);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Outstanding principal after `months_paid` scheduled payments
///
/// Zero once the loan is paid off, never negative.
pub fn calculate_remaining_balance(
    principal: f64,
    annual_rate: f64,
    years: f64,
    months_paid: u32,
) -> f64 {
    if principal <= 0.0 || years <= 0.0 {
        return 0.0;
    }

    let monthly_payment = calculate_mortgage_payment(principal, annual_rate, years);
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let total_payments = years * 12.0;
    let payments_remaining = total_payments - months_paid as f64;

    if payments_remaining <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return (principal - monthly_payment * months_paid as f64).max(0.0);
    }

    let growth = (1.0 + monthly_rate).powf(payments_remaining);
    let balance = monthly_payment * (growth - 1.0) / (monthly_rate * growth);

    balance.max(0.0)
}

/// One loan year of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationYear {
    pub year: u32,
    /// Total paid during the year (interest + principal)
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub ending_balance: f64,
}

/// Month-by-month amortization rolled up into loan years
///
/// The final month retires whatever balance remains so the schedule always
/// ends at exactly zero. Returns an empty schedule for a degenerate loan.
pub fn amortization_schedule(principal: f64, annual_rate: f64, years: f64) -> Vec<AmortizationYear> {
    if principal <= 0.0 || years <= 0.0 {
        return Vec::new();
    }

    let payment = calculate_mortgage_payment(principal, annual_rate, years);
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let total_months = (years * 12.0).ceil() as u32;

    let mut schedule = Vec::with_capacity((total_months as usize + 11) / 12);
    let mut balance = principal;
    let mut current = AmortizationYear {
        year: 1,
        payment: 0.0,
        interest: 0.0,
        principal: 0.0,
        ending_balance: principal,
    };

    for month in 1..=total_months {
        let interest = balance * monthly_rate;
        let principal_paid = if month == total_months {
            balance
        } else {
            (payment - interest).min(balance)
        };

        balance -= principal_paid;
        current.interest += interest;
        current.principal += principal_paid;
        current.payment += interest + principal_paid;
        current.ending_balance = balance.max(0.0);

        if month % 12 == 0 || month == total_months {
            let next_year = current.year + 1;
            schedule.push(current);
            current = AmortizationYear {
                year: next_year,
                payment: 0.0,
                interest: 0.0,
                principal: 0.0,
                ending_balance: balance.max(0.0),
            };
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_payment() {
        // 300k at 6.5% over 30 years
        let payment = calculate_mortgage_payment(300_000.0, 6.5, 30.0);
        assert_abs_diff_eq!(payment, 1896.20, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_payment() {
        assert_eq!(calculate_mortgage_payment(120_000.0, 0.0, 10.0), 1000.0);
    }

    #[test]
    fn test_degenerate_loans() {
        assert_eq!(calculate_mortgage_payment(0.0, 6.5, 30.0), 0.0);
        assert_eq!(calculate_mortgage_payment(-5.0, 6.5, 30.0), 0.0);
        assert_eq!(calculate_mortgage_payment(100_000.0, 6.5, 0.0), 0.0);
        assert_eq!(calculate_remaining_balance(0.0, 6.5, 30.0, 12), 0.0);
        assert_eq!(calculate_remaining_balance(100_000.0, 6.5, -1.0, 12), 0.0);
    }

    #[test]
    fn test_remaining_balance_monotonic() {
        let mut previous = calculate_remaining_balance(240_000.0, 6.5, 30.0, 0);
        assert_abs_diff_eq!(previous, 240_000.0, epsilon = 1e-4);

        for k in 1..=360 {
            let balance = calculate_remaining_balance(240_000.0, 6.5, 30.0, k);
            assert!(balance <= previous + 1e-9, "balance rose at month {}", k);
            previous = balance;
        }

        assert_eq!(calculate_remaining_balance(240_000.0, 6.5, 30.0, 360), 0.0);
        assert_eq!(calculate_remaining_balance(240_000.0, 6.5, 30.0, 400), 0.0);
    }

    #[test]
    fn test_remaining_balance_zero_rate() {
        // 1000/month straight-line
        assert_eq!(calculate_remaining_balance(120_000.0, 0.0, 10.0, 12), 108_000.0);
        assert_eq!(calculate_remaining_balance(120_000.0, 0.0, 10.0, 120), 0.0);
    }

    #[test]
    fn test_schedule_matches_balance() {
        let schedule = amortization_schedule(240_000.0, 6.5, 30.0);
        assert_eq!(schedule.len(), 30);

        for row in &schedule {
            let expected = calculate_remaining_balance(240_000.0, 6.5, 30.0, row.year * 12);
            assert_abs_diff_eq!(row.ending_balance, expected, epsilon = 0.01);
        }

        let total_principal: f64 = schedule.iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(total_principal, 240_000.0, epsilon = 1e-6);
        assert_eq!(schedule.last().map(|r| r.ending_balance), Some(0.0));

        // Interest share shrinks as the loan amortizes
        assert!(schedule[0].interest > schedule[29].interest);
    }

    #[test]
    fn test_schedule_degenerate() {
        assert!(amortization_schedule(0.0, 6.5, 30.0).is_empty());
        assert!(amortization_schedule(100_000.0, 6.5, 0.0).is_empty());
    }
}
