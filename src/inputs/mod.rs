//! Calculator input records, defaults, validation and loading

mod data;
mod error;
pub mod loader;

pub use data::{CalculatorState, LoanDetails, Expenses, Income, ProjectionSettings, MAX_ANALYSIS_YEARS};
pub use error::InputError;
pub use loader::{load_state, load_state_from_reader, load_scenarios, load_scenarios_from_reader, NamedState};
