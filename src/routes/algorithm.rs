use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{UpdateWeightsRequest, WeightsUpdateResponse};
use crate::routes::{ApiError, AppState};

/// Configure scoring weight routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/algorithm/weights")
            .route(web::get().to(get_weights))
            .route(web::put().to(update_weights)),
    );
}

/// GET /api/v1/algorithm/weights
async fn get_weights(state: web::Data<AppState>) -> HttpResponse {
    let weights = *state.weights.read().await;
    HttpResponse::Ok().json(weights)
}

/// Update any subset of the scoring weights
///
/// PUT /api/v1/algorithm/weights
///
/// The merged set must sum to 1.0 (within 0.01); otherwise nothing changes.
async fn update_weights(
    state: web::Data<AppState>,
    req: web::Json<UpdateWeightsRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let mut weights = state.weights.write().await;
    let merged = req.apply(&weights);

    if !merged.is_normalized() {
        tracing::warn!("Rejected weight update, sum {:.3}", merged.total());
        return Err(ApiError::BadRequest(format!(
            "Weights must sum to approximately 1.0, current sum: {}",
            merged.total()
        )));
    }

    *weights = merged;
    tracing::info!("Scoring weights updated: {:?}", merged);

    Ok(HttpResponse::Ok().json(WeightsUpdateResponse {
        message: "Algorithm weights updated successfully".to_string(),
        updated_weights: req
            .updated_keys()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
        current_weights: merged,
    }))
}
