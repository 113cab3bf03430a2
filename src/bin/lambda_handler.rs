//! AWS Lambda handler for buy vs rent projections
//!
//! Accepts a scenario as JSON (missing fields use the defaults) and returns the
//! comparison summary, derived constants and optionally the yearly table.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use chrono::{DateTime, Utc};
use housing_projection::projection::{DerivedConstants, ProjectionEngine, YearlyRow};
use housing_projection::{ComparisonSummary, ScenarioParameters, Tenure};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Input for one projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub scenario: ScenarioParameters,

    /// Include the year-by-year table (default: true)
    #[serde(default = "default_include_series")]
    pub include_series: bool,
}

fn default_include_series() -> bool { true }

/// Output of one projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub generated_at: DateTime<Utc>,
    pub parameters: ScenarioParameters,
    pub constants: DerivedConstants,
    pub summary: ComparisonSummary,
    pub cheaper: Tenure,
    pub wealthier: Tenure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly: Option<Vec<YearlyRow>>,
    pub execution_time_us: u64,
}

fn http_response(status: u16, body: String) -> Value {
    json!({
        "statusCode": status,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": body,
    })
}

fn error_response(status: u16, message: &str) -> Value {
    http_response(status, json!({ "error": message }).to_string())
}

/// Route one request; kept free of the Lambda event types for testing
fn handle(method: &str, body: Option<&str>) -> Value {
    let start = std::time::Instant::now();

    if method.eq_ignore_ascii_case("OPTIONS") {
        return http_response(200, String::new());
    }

    let body = body.filter(|b| !b.trim().is_empty()).unwrap_or("{}");
    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let engine = match ProjectionEngine::new(request.scenario) {
        Ok(engine) => engine,
        Err(e) => {
            warn!("rejected scenario: {}", e);
            return error_response(422, &e.to_string());
        }
    };
    let report = engine.run();

    let response = ProjectionResponse {
        generated_at: Utc::now(),
        parameters: report.parameters,
        constants: report.constants,
        summary: report.summary,
        cheaper: report.summary.cheaper_option(),
        wealthier: report.summary.wealthier_option(),
        yearly: request.include_series.then(|| report.yearly_table()),
        execution_time_us: start.elapsed().as_micros() as u64,
    };

    match serde_json::to_string(&response) {
        Ok(body) => http_response(200, body),
        Err(e) => error_response(500, &format!("Failed to serialize response: {}", e)),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let request = event.payload;
    let method = request
        .request_context
        .http
        .method
        .clone()
        .unwrap_or_else(|| "POST".to_string());

    if request.is_base64_encoded {
        return Ok(error_response(400, "Base64-encoded bodies are not supported"));
    }

    info!("{} request", method);
    Ok(handle(&method, request.body.as_deref()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
