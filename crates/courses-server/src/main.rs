use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod error;
mod models;
mod routes;

use adapters::PgUnitOfWorkFactory;
use courses::{
    InMemoryStore, ReportConfig, SemesterReportService, TeacherAssignmentService, UnitOfWork,
    UnitOfWorkFactory,
};

/// Type aliases for application services over a request-scoped unit of work
pub type AppAssignmentService = TeacherAssignmentService<dyn UnitOfWork>;
pub type AppReportService = SemesterReportService<dyn UnitOfWork>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub uow_factory: Arc<dyn UnitOfWorkFactory>,
    pub report_config: ReportConfig,
}

impl AppState {
    /// Assignment service bound to a fresh unit of work
    pub fn assignment_service(&self) -> AppAssignmentService {
        TeacherAssignmentService::new(self.uow_factory.begin())
    }

    /// Report service bound to a fresh unit of work
    pub fn report_service(&self) -> AppReportService {
        SemesterReportService::new(self.uow_factory.begin(), self.report_config.clone())
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Courses API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with shared state
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::course::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Courses API initializing...");

    let report_config = secrets
        .get("DEFAULT_SEMESTER")
        .filter(|s| !s.is_empty())
        .map(ReportConfig::new)
        .unwrap_or_default();

    tracing::info!("Default semester: {}", report_config.default_semester);

    let uow_factory: Arc<dyn UnitOfWorkFactory> =
        match secrets.get("COURSES_STORAGE").as_deref() {
            Some("memory") => {
                tracing::warn!("COURSES_STORAGE=memory - using seeded in-memory store");
                Arc::new(InMemoryStore::demo())
            }
            _ => {
                sqlx::migrate!()
                    .run(&pool)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

                tracing::info!("Database migrations completed");
                Arc::new(PgUnitOfWorkFactory::new(pool))
            }
        };

    let router = app(AppState {
        uow_factory,
        report_config,
    });

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Courses API ready");

    Ok(router.into())
}
