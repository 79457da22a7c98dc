//! Load calculator inputs from JSON snapshots and CSV scenario sheets

use super::data::{CalculatorState, Expenses, Income, LoanDetails, ProjectionSettings};
use super::error::InputError;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A calculator state tagged with a scenario name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedState {
    pub name: String,
    pub state: CalculatorState,
}

/// Raw CSV row, one scenario per line
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    /// Blank means purchase price less down payment
    #[serde(rename = "LoanAmount", default)]
    loan_amount: Option<f64>,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "LoanTerm")]
    loan_term: f64,
    #[serde(rename = "ClosingCosts")]
    closing_costs: f64,
    #[serde(rename = "LoanPoints")]
    loan_points: f64,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "OtherIncome")]
    other_income: f64,
    #[serde(rename = "AnnualRentIncrease")]
    annual_rent_increase: f64,
    #[serde(rename = "VacancyRate")]
    vacancy_rate: f64,
    #[serde(rename = "PropertyTaxes")]
    property_taxes: f64,
    #[serde(rename = "PropertyTaxIncreaseRate")]
    property_tax_increase_rate: f64,
    #[serde(rename = "HomeInsurance")]
    home_insurance: f64,
    #[serde(rename = "LandlordInsurance")]
    landlord_insurance: f64,
    #[serde(rename = "HoaFees")]
    hoa_fees: f64,
    #[serde(rename = "PropertyManagementFee")]
    property_management_fee: f64,
    #[serde(rename = "MaintenanceReserve")]
    maintenance_reserve: f64,
    #[serde(rename = "CapexReserve")]
    capex_reserve: f64,
    #[serde(rename = "AnalysisYears")]
    analysis_years: u32,
    #[serde(rename = "PropertyAppreciation")]
    property_appreciation: f64,
}

impl CsvRow {
    fn into_named_state(self) -> NamedState {
        let mut loan_details = LoanDetails::financed(
            self.purchase_price,
            self.down_payment,
            self.interest_rate,
            self.loan_term,
            self.closing_costs,
            self.loan_points,
        );
        if let Some(amount) = self.loan_amount {
            loan_details.loan_amount = amount;
        }

        NamedState {
            name: self.name,
            state: CalculatorState {
                loan_details,
                expenses: Expenses {
                    vacancy_rate: self.vacancy_rate,
                    property_taxes: self.property_taxes,
                    property_tax_increase_rate: self.property_tax_increase_rate,
                    home_insurance: self.home_insurance,
                    landlord_insurance: self.landlord_insurance,
                    hoa_fees: self.hoa_fees,
                    property_management_fee: self.property_management_fee,
                    maintenance_reserve: self.maintenance_reserve,
                    capex_reserve: self.capex_reserve,
                },
                income: Income {
                    monthly_rent: self.monthly_rent,
                    other_income: self.other_income,
                    annual_rent_increase: self.annual_rent_increase,
                },
                settings: ProjectionSettings {
                    analysis_years: self.analysis_years,
                    property_appreciation: self.property_appreciation,
                },
            },
        }
    }
}

/// Load and validate a single JSON calculator snapshot
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<CalculatorState, InputError> {
    let file = File::open(path)?;
    load_state_from_reader(BufReader::new(file))
}

/// Load and validate a JSON snapshot from any reader
///
/// Missing sections and fields fall back to the calculator defaults.
pub fn load_state_from_reader<R: Read>(reader: R) -> Result<CalculatorState, InputError> {
    let state: CalculatorState = serde_json::from_reader(reader)?;
    state.validate()?;
    Ok(state)
}

/// Load and validate every scenario in a CSV sheet
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedState>, InputError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(BufReader::new(file))
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedState>, InputError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let named = row.into_named_state();
        named.state.validate().map_err(|source| InputError::Row {
            row: index + 1,
            name: named.name.clone(),
            source: Box::new(source),
        })?;
        scenarios.push(named);
    }

    Ok(scenarios)
}
