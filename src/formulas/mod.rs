//! Pure financial formulas: loan math, return ratios, IRR and rounding
//!
//! Every function here is stateless and side-effect free. Degenerate inputs
//! (zero denominators, zero-length loans) produce 0 instead of NaN/inf.

mod mortgage;
mod ratios;
mod irr;
mod rounding;

pub use mortgage::{
    calculate_mortgage_payment, calculate_remaining_balance, amortization_schedule,
    AmortizationYear,
};
pub use ratios::{calculate_cash_on_cash, calculate_cap_rate, calculate_noi, calculate_dscr};
pub use irr::{
    calculate_irr, solve_irr, IrrSolution,
    IRR_DEFAULT_GUESS, IRR_MAX_ITERATIONS, IRR_TOLERANCE, IRR_RATE_FLOOR, IRR_RATE_CEILING,
};
pub use rounding::{round2, format_currency, format_percent};
