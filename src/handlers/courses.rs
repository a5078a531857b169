use crate::handlers::subcourses::SubCourseResponse;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{course, sub_course};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Completion status accepted on the wire for courses and subcourses.
///
/// Any state may be set from any other state; there is no enforced
/// ordering between the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum ProgressStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl From<ProgressStatus> for course::ProgressStatus {
    fn from(status: ProgressStatus) -> Self {
        match status {
            ProgressStatus::NotStarted => course::ProgressStatus::NotStarted,
            ProgressStatus::InProgress => course::ProgressStatus::InProgress,
            ProgressStatus::Completed => course::ProgressStatus::Completed,
        }
    }
}

impl From<course::ProgressStatus> for ProgressStatus {
    fn from(status: course::ProgressStatus) -> Self {
        match status {
            course::ProgressStatus::NotStarted => ProgressStatus::NotStarted,
            course::ProgressStatus::InProgress => ProgressStatus::InProgress,
            course::ProgressStatus::Completed => ProgressStatus::Completed,
        }
    }
}

/// Request body for creating a new course
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCourseRequest {
    /// Course title
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Thumbnail image URL
    #[validate(url(message = "thumbnail must be a valid URL"))]
    pub thumbnail: Option<String>,
    /// Link the catalog entry redirects to
    #[validate(url(message = "redirection_link must be a valid URL"))]
    pub redirection_link: Option<String>,
    /// Completion status (defaults to "Not Started")
    pub status: Option<ProgressStatus>,
}

/// Request body for updating a course; all fields optional
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(url(message = "thumbnail must be a valid URL"))]
    pub thumbnail: Option<String>,
    #[validate(url(message = "redirection_link must be a valid URL"))]
    pub redirection_link: Option<String>,
    pub status: Option<ProgressStatus>,
}

/// Course response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub title: String,
    pub thumbnail: Option<String>,
    pub redirection_link: Option<String>,
    pub status: ProgressStatus,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            thumbnail: model.thumbnail,
            redirection_link: model.redirection_link,
            status: model.status.into(),
        }
    }
}

/// Course response with its subcourses nested, as returned by the listing
/// endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseWithSubCoursesResponse {
    pub id: i32,
    pub title: String,
    pub thumbnail: Option<String>,
    pub redirection_link: Option<String>,
    pub status: ProgressStatus,
    pub subcourses: Vec<SubCourseResponse>,
}

impl CourseWithSubCoursesResponse {
    fn from_pair(course: course::Model, subcourses: Vec<sub_course::Model>) -> Self {
        Self {
            id: course.id,
            title: course.title,
            thumbnail: course.thumbnail,
            redirection_link: course.redirection_link,
            status: course.status.into(),
            subcourses: subcourses.into_iter().map(SubCourseResponse::from).collect(),
        }
    }
}

/// Create a new course
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created successfully", body = ApiResponse<CourseResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_course function");
    debug!("Creating course with title: {}", request.title);

    if let Err(validation_errors) = request.validate() {
        warn!("Course payload failed validation: {}", validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: validation_errors.to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    let status = request.status.unwrap_or(ProgressStatus::NotStarted);
    let new_course = course::ActiveModel {
        title: Set(request.title.clone()),
        thumbnail: Set(request.thumbnail.clone()),
        redirection_link: Set(request.redirection_link.clone()),
        status: Set(status.into()),
        ..Default::default()
    };

    trace!("Attempting to insert new course into database");
    match new_course.insert(&state.db).await {
        Ok(course_model) => {
            info!(
                "Course created successfully with ID: {}, title: {}",
                course_model.id, course_model.title
            );
            let response = ApiResponse {
                data: CourseResponse::from(course_model),
                message: "Course created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to create course '{}': {}", request.title, db_error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while creating course".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}

/// Get all courses with their subcourses nested
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    responses(
        (status = 200, description = "Courses retrieved successfully", body = ApiResponse<Vec<CourseWithSubCoursesResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CourseWithSubCoursesResponse>>>, (StatusCode, Json<ErrorResponse>)>
{
    trace!("Entering get_courses function");
    debug!("Fetching all courses with subcourses from database");

    // One query; courses and their subcourses both come back ordered by id
    let courses = course::Entity::find()
        .find_with_related(sub_course::Entity)
        .order_by_asc(course::Column::Id)
        .order_by_asc(sub_course::Column::Id)
        .all(&state.db)
        .await;

    match courses {
        Ok(course_pairs) => {
            let course_count = course_pairs.len();
            debug!("Retrieved {} courses from database", course_count);

            let course_responses: Vec<CourseWithSubCoursesResponse> = course_pairs
                .into_iter()
                .map(|(course, subcourses)| {
                    CourseWithSubCoursesResponse::from_pair(course, subcourses)
                })
                .collect();

            info!("Successfully retrieved {} courses", course_count);
            let response = ApiResponse {
                data: course_responses,
                message: "Courses retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve courses from database: {}", db_error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while listing courses".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}

/// Get a specific course by ID, with its subcourses nested
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = "courses",
    params(
        ("course_id" = i32, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, description = "Course retrieved successfully", body = ApiResponse<CourseWithSubCoursesResponse>),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_course(
    Path(course_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CourseWithSubCoursesResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_course function for course_id: {}", course_id);

    let course_model = match course::Entity::find_by_id(course_id).one(&state.db).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            warn!("Course with ID {} not found", course_id);
            return Err(course_not_found(course_id));
        }
        Err(db_error) => {
            error!("Failed to retrieve course with ID {}: {}", course_id, db_error);
            return Err(internal_error("Internal server error while fetching course"));
        }
    };

    let subcourses = match sub_course::Entity::find()
        .filter(sub_course::Column::CourseId.eq(course_id))
        .order_by_asc(sub_course::Column::Id)
        .all(&state.db)
        .await
    {
        Ok(subcourses) => subcourses,
        Err(db_error) => {
            error!(
                "Failed to retrieve subcourses for course {}: {}",
                course_id, db_error
            );
            return Err(internal_error("Internal server error while fetching course"));
        }
    };

    info!(
        "Successfully retrieved course with ID: {}, title: {}",
        course_model.id, course_model.title
    );
    let response = ApiResponse {
        data: CourseWithSubCoursesResponse::from_pair(course_model, subcourses),
        message: "Course retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

/// Update a course
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    tag = "courses",
    params(
        ("course_id" = i32, Path, description = "Course ID"),
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated successfully", body = ApiResponse<CourseResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn update_course(
    Path(course_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<Json<ApiResponse<CourseResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering update_course function for course_id: {}", course_id);
    debug!("Updating course with ID: {}", course_id);

    if let Err(validation_errors) = request.validate() {
        warn!("Course update payload failed validation: {}", validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: validation_errors.to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    // First, find the existing course
    trace!("Looking up existing course with ID: {}", course_id);
    let existing_course = match course::Entity::find_by_id(course_id).one(&state.db).await {
        Ok(Some(course)) => {
            debug!("Found existing course: {}", course.title);
            course
        }
        Ok(None) => {
            warn!("Course with ID {} not found for update", course_id);
            return Err(course_not_found(course_id));
        }
        Err(db_error) => {
            error!(
                "Failed to lookup course with ID {} for update: {}",
                course_id, db_error
            );
            return Err(internal_error("Internal server error while updating course"));
        }
    };

    // Create active model for update
    let mut course_active: course::ActiveModel = existing_course.into();
    let mut updated_fields = Vec::new();

    // Update only provided fields
    if let Some(title) = request.title {
        debug!("Updating course title to: {}", title);
        course_active.title = Set(title.clone());
        updated_fields.push(format!("title: {}", title));
    }
    if let Some(thumbnail) = request.thumbnail {
        course_active.thumbnail = Set(Some(thumbnail.clone()));
        updated_fields.push(format!("thumbnail: {}", thumbnail));
    }
    if let Some(redirection_link) = request.redirection_link {
        course_active.redirection_link = Set(Some(redirection_link.clone()));
        updated_fields.push(format!("redirection_link: {}", redirection_link));
    }
    if let Some(status) = request.status {
        course_active.status = Set(status.into());
        updated_fields.push(format!("status: {:?}", status));
    }

    if updated_fields.is_empty() {
        debug!("No fields to update for course ID: {}", course_id);
    } else {
        debug!("Updating fields: {}", updated_fields.join(", "));
    }

    trace!("Attempting to update course in database");
    match course_active.update(&state.db).await {
        Ok(updated_course) => {
            info!(
                "Course with ID {} updated successfully. Updated fields: {}",
                course_id,
                if updated_fields.is_empty() {
                    "none".to_string()
                } else {
                    updated_fields.join(", ")
                }
            );
            let response = ApiResponse {
                data: CourseResponse::from(updated_course),
                message: "Course updated successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to update course with ID {}: {}", course_id, db_error);
            Err(internal_error("Internal server error while updating course"))
        }
    }
}

/// Delete a course and all of its subcourses
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    tag = "courses",
    params(
        ("course_id" = i32, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, description = "Course deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_course(
    Path(course_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering delete_course function for course_id: {}", course_id);
    debug!("Attempting to delete course with ID: {}", course_id);

    // Children and parent go in one transaction so no orphan subcourse can
    // survive a partial failure.
    let txn = match state.db.begin().await {
        Ok(txn) => txn,
        Err(db_error) => {
            error!("Failed to open transaction for course delete: {}", db_error);
            return Err(internal_error("Internal server error while deleting course"));
        }
    };

    let subcourse_delete = sub_course::Entity::delete_many()
        .filter(sub_course::Column::CourseId.eq(course_id))
        .exec(&txn)
        .await;

    let deleted_subcourses = match subcourse_delete {
        Ok(result) => result.rows_affected,
        Err(db_error) => {
            error!(
                "Failed to delete subcourses of course {}: {}",
                course_id, db_error
            );
            return Err(internal_error("Internal server error while deleting course"));
        }
    };

    let course_delete = match course::Entity::delete_by_id(course_id).exec(&txn).await {
        Ok(result) => result,
        Err(db_error) => {
            error!("Failed to delete course with ID {}: {}", course_id, db_error);
            return Err(internal_error("Internal server error while deleting course"));
        }
    };

    if course_delete.rows_affected == 0 {
        // Dropping the transaction rolls back; nothing was there to delete
        warn!("Course with ID {} not found for deletion", course_id);
        return Err(course_not_found(course_id));
    }

    if let Err(db_error) = txn.commit().await {
        error!("Failed to commit course delete transaction: {}", db_error);
        return Err(internal_error("Internal server error while deleting course"));
    }

    info!(
        "Course with ID {} deleted successfully along with {} subcourses",
        course_id, deleted_subcourses
    );
    let response = ApiResponse {
        data: format!("Course {} deleted", course_id),
        message: "Course deleted successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}

fn course_not_found(course_id: i32) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Course with id {} does not exist", course_id),
            code: "COURSE_NOT_FOUND".to_string(),
            success: false,
        }),
    )
}

fn internal_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
            code: "DATABASE_ERROR".to_string(),
            success: false,
        }),
    )
}
