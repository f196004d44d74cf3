use std::borrow::Cow;

use log::info;
use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};
use rocket::{Catcher, Request, Route};
use serde::Deserialize;

use expression::{Conversion, Evaluation};
use telemetry::Measure;

use crate::error::{ApiError, ErrorResponse};

lazy_static! {
    static ref EVALUATE_MEASURE: Measure = Measure::new("controller", "evaluate");
    static ref CONVERT_MEASURE: Measure = Measure::new("controller", "convert");
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct ExpressionRequest {
    #[serde(default)]
    expression: Option<String>,
}

impl ExpressionRequest {
    fn text(&self) -> &str {
        self.expression.as_deref().unwrap_or_default()
    }
}

#[get("/")]
fn index() -> Value {
    json!({ "message": "Expression Tree Calculator API" })
}

#[get("/status")]
fn status() -> Value {
    json!({ "status": "ok" })
}

#[get("/metrics")]
fn metrics() -> Result<String, Status> {
    telemetry::encode().map_err(|_| Status::InternalServerError)
}

#[post("/evaluate", data = "<request>")]
fn evaluate(request: Json<ExpressionRequest>) -> Result<Json<Evaluation>, ApiError> {
    EVALUATE_MEASURE.stats(|| {
        let evaluation = expression::evaluate(request.text())?;
        info!(
            "Evaluated {:?} to {}",
            evaluation.expression, evaluation.result
        );
        Ok(Json(evaluation))
    })
}

#[post("/convert", data = "<request>")]
fn convert(request: Json<ExpressionRequest>) -> Result<Json<Conversion>, ApiError> {
    CONVERT_MEASURE.stats(|| {
        let conversion = expression::convert(request.text())?;
        info!(
            "Converted {:?} to {:?}",
            conversion.expression, conversion.postfix
        );
        Ok(Json(conversion))
    })
}

#[catch(default)]
fn default_catcher(
    status: Status,
    _request: &Request<'_>,
) -> (Status, Json<ErrorResponse<'static>>) {
    let error = Cow::Borrowed(status.reason().unwrap_or("Unknown Error"));
    (status, Json(ErrorResponse { error }))
}

pub fn routes() -> Vec<Route> {
    routes![index, status, metrics, evaluate, convert]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}
