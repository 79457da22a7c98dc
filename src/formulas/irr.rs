//! Internal Rate of Return (IRR) calculation
//!
//! Newton-Raphson on the NPV of a periodic cash-flow stream. The solver is an
//! approximation: the rate is clamped each iteration and the iteration count
//! is capped, so a stream without a well-behaved root yields the last iterate
//! rather than an error.

use log::debug;

/// Starting guess for the periodic rate (10%)
pub const IRR_DEFAULT_GUESS: f64 = 0.10;

/// Upper bound on Newton-Raphson iterations
pub const IRR_MAX_ITERATIONS: u32 = 100;

/// Convergence threshold on the step size, also the floor on |dNPV/dr|
pub const IRR_TOLERANCE: f64 = 0.00001;

/// Lowest rate the iteration may reach (-99%)
pub const IRR_RATE_FLOOR: f64 = -0.99;

/// Highest rate the iteration may reach (+1000%)
pub const IRR_RATE_CEILING: f64 = 10.0;

/// Outcome of an IRR solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrSolution {
    /// Rate per period as a percentage (10.0 = 10%)
    pub rate_percent: f64,
    /// Whether the step size fell below `IRR_TOLERANCE`
    pub converged: bool,
    /// Newton-Raphson iterations performed
    pub iterations: u32,
}

/// Calculate the IRR of a cash-flow stream as a percentage
///
/// Index 0 is the initial outlay (conventionally negative); the last entry
/// should already include any terminal value. Fewer than two flows yield 0.
/// Non-convergence is silent; use [`solve_irr`] to observe it.
pub fn calculate_irr(cash_flows: &[f64], initial_guess: f64) -> f64 {
    solve_irr(cash_flows, initial_guess).rate_percent
}

/// Newton-Raphson IRR with the convergence outcome reported
pub fn solve_irr(cash_flows: &[f64], initial_guess: f64) -> IrrSolution {
    if cash_flows.len() < 2 {
        return IrrSolution { rate_percent: 0.0, converged: false, iterations: 0 };
    }

    let mut rate = initial_guess;

    for iteration in 1..=IRR_MAX_ITERATIONS {
        let (npv, derivative) = npv_and_derivative(cash_flows, rate);

        if derivative.abs() < IRR_TOLERANCE {
            debug!("IRR derivative vanished at rate {:.6} after {} iterations", rate, iteration);
            return IrrSolution { rate_percent: rate * 100.0, converged: false, iterations: iteration };
        }

        let new_rate = rate - npv / derivative;

        if (new_rate - rate).abs() < IRR_TOLERANCE {
            return IrrSolution { rate_percent: new_rate * 100.0, converged: true, iterations: iteration };
        }

        rate = new_rate.clamp(IRR_RATE_FLOOR, IRR_RATE_CEILING);
    }

    debug!("IRR did not converge in {} iterations, last rate {:.6}", IRR_MAX_ITERATIONS, rate);
    IrrSolution { rate_percent: rate * 100.0, converged: false, iterations: IRR_MAX_ITERATIONS }
}

/// NPV and its derivative with respect to rate
fn npv_and_derivative(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cash_flows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
    }

    (npv, dnpv)
}
