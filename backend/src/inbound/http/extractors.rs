//! Extractor configuration shared by the todo routes.
//!
//! Actix's default extractor failures produce plain-text bodies; these
//! handlers turn them into domain `InvalidRequest` errors so clients always
//! receive `{"error": ...}`.

use actix_web::web;
use tracing::debug;

use crate::domain::Error;

/// Message for any JSON body that cannot be decoded into the request DTO.
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Message for a path identifier that is not a 32-bit integer.
pub const INVALID_TODO_ID: &str = "Invalid todo id";

/// JSON body configuration: any content type, decode failures become 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejected request payload");
            Error::invalid_request(INVALID_PAYLOAD).into()
        })
}

/// Path parameter configuration: parse failures become 400.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected path parameter");
        Error::invalid_request(INVALID_TODO_ID).into()
    })
}
