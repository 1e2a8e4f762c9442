//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the todo endpoints, the health endpoints and the DTOs
//! they exchange. Swagger UI serves it in debug builds and the
//! `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::health::{HealthBody, HealthStatus};
use crate::inbound::http::todos::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "1.0",
        description = "This is a simple Todo API server."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::get_todo,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TodoResponse,
        CreateTodoRequest,
        UpdateTodoRequest,
        ErrorBody,
        HealthBody,
        HealthStatus
    )),
    tags(
        (name = "todos", description = "Create, read, update and delete todos"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[test]
    fn info_describes_the_todo_api() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Todo API");
        assert_eq!(doc.info.version, "1.0");
    }

    #[rstest]
    #[case("/api/todos")]
    #[case("/api/todos/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn todo_schema_exposes_wire_fields() {
        let mut fields = schema_fields("TodoResponse");
        fields.sort();
        assert_eq!(fields, ["completed", "created_at", "id", "title"]);
    }

    #[test]
    fn error_schema_has_single_field() {
        assert_eq!(schema_fields("ErrorBody"), ["error"]);
    }
}
