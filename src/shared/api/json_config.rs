// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Profile payloads are small; anything bigger is rejected before parsing.
const MAX_JSON_PAYLOAD_BYTES: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::warn!(error = %message, "Rejected JSON payload");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
