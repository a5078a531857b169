use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers.
///
/// The database connection is opened once at process start and injected
/// here; handlers never reach for ambient globals.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::trainers::create_trainer,
        crate::handlers::trainers::get_trainers,
        crate::handlers::students::create_student,
        crate::handlers::students::get_students,
        crate::handlers::courses::create_course,
        crate::handlers::courses::get_courses,
        crate::handlers::courses::get_course,
        crate::handlers::courses::update_course,
        crate::handlers::courses::delete_course,
        crate::handlers::subcourses::create_subcourse,
        crate::handlers::subcourses::get_course_subcourses,
        crate::handlers::subcourses::update_subcourse,
        crate::handlers::subcourses::delete_subcourse,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            crate::handlers::trainers::Gender,
            crate::handlers::trainers::CreateTrainerRequest,
            crate::handlers::trainers::TrainerResponse,
            crate::handlers::students::CreateStudentRequest,
            crate::handlers::students::StudentResponse,
            crate::handlers::courses::ProgressStatus,
            crate::handlers::courses::CreateCourseRequest,
            crate::handlers::courses::UpdateCourseRequest,
            crate::handlers::courses::CourseResponse,
            crate::handlers::courses::CourseWithSubCoursesResponse,
            crate::handlers::subcourses::CreateSubCourseRequest,
            crate::handlers::subcourses::UpdateSubCourseRequest,
            crate::handlers::subcourses::SubCourseResponse,
            ApiResponse<crate::handlers::trainers::TrainerResponse>,
            ApiResponse<crate::handlers::students::StudentResponse>,
            ApiResponse<crate::handlers::courses::CourseResponse>,
            ApiResponse<crate::handlers::courses::CourseWithSubCoursesResponse>,
            ApiResponse<crate::handlers::subcourses::SubCourseResponse>,
            ApiResponse<String>,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "trainers", description = "Trainer registration and listing"),
        (name = "students", description = "Student registration and listing"),
        (name = "courses", description = "Course catalog management"),
        (name = "subcourses", description = "Per-course module management"),
    ),
    info(
        title = "TrainHub API",
        description = "Administrative record keeping for a training organization: trainers, students, and a course catalog with per-module status tracking",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
