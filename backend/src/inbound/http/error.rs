//! HTTP mapping for domain errors.
//!
//! Every failure is rendered as `{"error": "<message>"}` with the status
//! implied by its [`ErrorCode`]. Internal errors keep the storage message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "Todo not found")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = self.trace_id().map(|id| id.to_string());
        if status.is_server_error() {
            error!(trace_id = trace_id.as_deref(), error = self.message(), "request failed");
        } else {
            debug!(trace_id = trace_id.as_deref(), error = self.message(), %status, "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = trace_id {
            builder.insert_header((TRACE_ID_HEADER, id));
        }
        builder.json(ErrorBody {
            error: self.message().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TraceId;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    async fn body_of(error: &Error) -> ErrorBody {
        let bytes = to_bytes(error.error_response().into_body())
            .await
            .expect("reading response body succeeds");
        serde_json::from_slice(&bytes).expect("error body is JSON")
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), expected);
    }

    #[actix_web::test]
    async fn internal_errors_expose_the_underlying_message() {
        let error = Error::internal("connection refused");

        assert_eq!(
            body_of(&error).await,
            ErrorBody {
                error: "connection refused".to_owned()
            }
        );
    }

    #[actix_web::test]
    async fn trace_id_is_echoed_in_header() {
        let trace_id = TraceId::generate();
        let error = Error::not_found("Todo not found").with_trace_id(trace_id);

        let response = error.error_response();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("ascii header");

        assert_eq!(header, trace_id.to_string());
    }

    #[actix_web::test]
    async fn missing_trace_id_omits_header() {
        let response = Error::invalid_request("bad").error_response();

        assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    }
}
