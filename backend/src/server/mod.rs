//! Server construction and middleware wiring.

mod bootstrap;
mod config;
mod settings;

pub use bootstrap::{StartupError, connect, prepare_storage, seed_if_enabled};
pub use config::ServerConfig;
pub use settings::{DEFAULT_DATABASE_URL, DEFAULT_PORT, ServiceSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::TodoService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::todos;
use crate::outbound::persistence::DieselTodoRepository;

/// Assemble the application: todo routes under `/api`, health endpoints and,
/// in debug builds, Swagger UI at `/docs`.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api").configure(todos::configure))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server backed by the Diesel todo repository.
///
/// Marks the listener as bound on `health_state`; readiness also waits for
/// [`prepare_storage`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let service = Arc::new(TodoService::new(Arc::new(DieselTodoRepository::new(db_pool))));
    let http_state = web::Data::new(HttpState::new(service.clone(), service));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "todo server listening");
    health_state.mark_listening();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{InMemoryTodoRepository, state_for};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;

    #[rstest]
    #[case("/api/todos", StatusCode::OK)]
    #[case("/health/live", StatusCode::OK)]
    #[case("/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[case("/todos", StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn routes_are_mounted(#[case] uri: &str, #[case] expected: StatusCode) {
        let state = state_for(Arc::new(InMemoryTodoRepository::new()));
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            web::Data::new(state),
        ))
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
            .await;

        assert_eq!(res.status(), expected);
    }

    #[cfg(debug_assertions)]
    #[actix_web::test]
    async fn openapi_document_is_served_in_debug_builds() {
        let state = state_for(Arc::new(InMemoryTodoRepository::new()));
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            web::Data::new(state),
        ))
        .await;

        let body: serde_json::Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api-docs/openapi.json")
                .to_request(),
        )
        .await;

        assert_eq!(body["info"]["title"], "Todo API");
    }
}
