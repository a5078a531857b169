use crate::handlers::{
    courses::{create_course, delete_course, get_course, get_courses, update_course},
    health::health_check,
    students::{create_student, get_students},
    subcourses::{create_subcourse, delete_subcourse, get_course_subcourses, update_subcourse},
    trainers::{create_trainer, get_trainers},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Trainer routes
        .route("/api/trainers", post(create_trainer))
        .route("/api/trainers", get(get_trainers))
        // Student routes
        .route("/api/students", post(create_student))
        .route("/api/students", get(get_students))
        // Course routes
        .route("/api/courses", post(create_course))
        .route("/api/courses", get(get_courses))
        .route("/api/courses/:course_id", get(get_course))
        .route("/api/courses/:course_id", put(update_course))
        .route("/api/courses/:course_id", delete(delete_course))
        // SubCourse routes
        .route("/api/subcourses", post(create_subcourse))
        .route("/api/courses/:course_id/subcourses", get(get_course_subcourses))
        .route("/api/subcourses/:subcourse_id", put(update_subcourse))
        .route("/api/subcourses/:subcourse_id", delete(delete_subcourse))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
