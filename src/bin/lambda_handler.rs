//! AWS Lambda handler for ROI calculations
//!
//! Accepts a calculator snapshot as the JSON event and returns the calculated
//! metrics, optionally with the first-year monthly breakdown. Invalid input is
//! reported in the response body rather than failing the invocation.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use rental_roi::{calculate_roi, generate_monthly_breakdown, CalculatedMetrics, CalculatorState, MonthlyBreakdown};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Input event: the calculator sections plus output options
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(flatten)]
    pub state: CalculatorState,

    /// Include the January..December breakdown (default: false)
    #[serde(default)]
    pub include_breakdown: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<CalculatedMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<MonthlyBreakdown>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

fn respond(request: &CalculationRequest) -> CalculationResponse {
    let start = Instant::now();

    if let Err(err) = request.state.validate() {
        warn!("Rejected calculation request: {}", err);
        return CalculationResponse {
            metrics: None,
            breakdown: None,
            error: Some(err.to_string()),
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
    }

    let metrics = calculate_roi(&request.state);
    let breakdown = request
        .include_breakdown
        .then(|| generate_monthly_breakdown(&request.state));

    info!(
        "Calculated {} projection years, IRR {:.2}%",
        metrics.yearly_projections.len(),
        metrics.irr
    );

    CalculationResponse {
        metrics: Some(metrics),
        breakdown,
        error: None,
        execution_time_ms: start.elapsed().as_millis() as u64,
    }
}

async fn handler(event: LambdaEvent<CalculationRequest>) -> Result<CalculationResponse, Error> {
    Ok(respond(&event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
