use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::constants::{CVRANK_REQUEST_ID_HEADER, CVRANK_STATUS_HEADER, CVRANK_STATUS_RANKED};
use crate::cv::{CandidateCv, RankRequest};
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;

#[instrument(skip_all, fields(request_id = tracing::field::Empty, num_cvs = tracing::field::Empty))]
pub async fn rank_handler(
    State(state): State<HandlerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));

    let mut response = match rank(&state, payload).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                GatewayError::InvalidRequest(_) => warn!(error = %e, "Rejected ranking request"),
                _ => error!(error = %e, "Ranking request failed"),
            }
            e.into_response()
        }
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(CVRANK_REQUEST_ID_HEADER, value);
    }

    response
}

async fn rank(
    state: &HandlerState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(body) = payload
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid JSON body: {}", e.body_text())))?;

    let request = parse_rank_request(body, state.max_candidates)?;
    tracing::Span::current().record("num_cvs", request.cvs.len());

    debug!(
        job_requirements_len = request.job_requirements.len(),
        "Processing ranking request"
    );

    let ranked = state.pipeline.rank(request).await?;

    info!(num_ranked = ranked.len(), "Ranking complete");

    let mut headers = HeaderMap::new();
    headers.insert(
        CVRANK_STATUS_HEADER,
        HeaderValue::from_static(CVRANK_STATUS_RANKED),
    );

    Ok((StatusCode::OK, headers, Json(ranked)).into_response())
}

/// Validates the raw body and converts it to a [`RankRequest`].
pub fn parse_rank_request(body: Value, max_candidates: usize) -> Result<RankRequest, GatewayError> {
    let Value::Object(mut fields) = body else {
        return Err(GatewayError::InvalidRequest(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let job_requirements = match fields.remove("job_requirements") {
        Some(Value::String(text)) => text,
        Some(_) => {
            return Err(GatewayError::InvalidRequest(
                "'job_requirements' must be a string".to_string(),
            ));
        }
        None => {
            return Err(GatewayError::InvalidRequest(
                "Missing 'job_requirements'".to_string(),
            ));
        }
    };

    let raw_cvs = match fields.remove("cvs") {
        Some(Value::Array(cvs)) => cvs,
        Some(_) => {
            return Err(GatewayError::InvalidRequest(
                "'cvs' must be an array".to_string(),
            ));
        }
        None => return Err(GatewayError::InvalidRequest("Missing 'cvs'".to_string())),
    };

    if raw_cvs.len() > max_candidates {
        return Err(GatewayError::InvalidRequest(format!(
            "Too many CVs: {} (max {})",
            raw_cvs.len(),
            max_candidates
        )));
    }

    let cvs = raw_cvs
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_value::<CandidateCv>(raw)
                .map_err(|e| GatewayError::InvalidRequest(format!("Invalid CV at index {}: {}", index, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RankRequest {
        job_requirements,
        cvs,
    })
}
