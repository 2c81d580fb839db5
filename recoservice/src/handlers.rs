use actix_web::web::Data;
use actix_web::Error;
use paperclip::actix::{
    api_v2_operation,
    web::{self, Json},
};

use crate::api::{RecoPath, RecoResponse, UserId};
use crate::errors::ApiError;
use crate::recommendations;
use crate::settings::ServiceConfig;

pub const HEALTH_MESSAGE: &str = "I am alive";

#[api_v2_operation(
    summary = "Health check endpoint",
    description = "Returns a simple message to confirm the service is running",
    tags(Health)
)]
pub async fn health() -> Result<Json<String>, Error> {
    Ok(Json(HEALTH_MESSAGE.to_string()))
}

#[api_v2_operation(
    summary = "Get recommendations for a user",
    description = "Returns recommendations for a given user using the specified model",
    tags(Recommendations)
)]
pub async fn get_reco(
    config: Data<ServiceConfig>,
    path: web::Path<RecoPath>,
) -> Result<Json<RecoResponse>, ApiError> {
    let RecoPath { model_name, user_id } = path.into_inner();
    tracing::info!("Request for model: {}, user_id: {}", model_name, user_id);

    let user_id: UserId = user_id.parse()?;
    let response = recommendations::recommend(&model_name, user_id, config.k_recs)?;
    Ok(Json(response))
}
