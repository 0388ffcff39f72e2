use axum::{http::StatusCode, Json};

use crate::domain::generation::service::{self, GenerationError};
use contracts::brief::Brief;
use contracts::post::{ErrorBody, GeneratedPost};

/// POST /api/generate
pub async fn generate(
    Json(brief): Json<Brief>,
) -> Result<Json<GeneratedPost>, (StatusCode, Json<ErrorBody>)> {
    match service::generate(&brief).await {
        Ok(post) => Ok(Json(post)),
        Err(e) => {
            tracing::error!("Failed to generate post: {}", e);
            let status = match &e {
                GenerationError::InvalidBrief(_) => StatusCode::UNPROCESSABLE_ENTITY,
                GenerationError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
                GenerationError::Provider(_) | GenerationError::MalformedResponse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            };
            Err((
                status,
                Json(ErrorBody::new(service::GENERIC_FAILURE, Some(e.to_string()))),
            ))
        }
    }
}
