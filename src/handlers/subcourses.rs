use crate::handlers::courses::ProgressStatus;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{course, sub_course};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a new subcourse
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSubCourseRequest {
    /// Module title
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// What the module covers
    pub description: Option<String>,
    /// Video or content link
    #[validate(url(message = "link must be a valid URL"))]
    pub link: Option<String>,
    /// Completion status (defaults to "Not Started")
    pub status: Option<ProgressStatus>,
    /// ID of the course this module belongs to
    pub course_id: i32,
}

/// Request body for updating a subcourse; all fields optional
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSubCourseRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "link must be a valid URL"))]
    pub link: Option<String>,
    pub status: Option<ProgressStatus>,
}

/// SubCourse response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubCourseResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub status: ProgressStatus,
    pub course_id: i32,
}

impl From<sub_course::Model> for SubCourseResponse {
    fn from(model: sub_course::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            link: model.link,
            status: model.status.into(),
            course_id: model.course_id,
        }
    }
}

/// Create a new subcourse under an existing course
#[utoipa::path(
    post,
    path = "/api/subcourses",
    tag = "subcourses",
    request_body = CreateSubCourseRequest,
    responses(
        (status = 201, description = "SubCourse created successfully", body = ApiResponse<SubCourseResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_subcourse(
    State(state): State<AppState>,
    Json(request): Json<CreateSubCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SubCourseResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_subcourse function");
    debug!(
        "Creating subcourse with title: {} under course: {}",
        request.title, request.course_id
    );

    if let Err(validation_errors) = request.validate() {
        warn!("SubCourse payload failed validation: {}", validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: validation_errors.to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    // The referenced course must exist before we attach a module to it
    trace!("Checking that course {} exists", request.course_id);
    match course::Entity::find_by_id(request.course_id).one(&state.db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!(
                "Rejecting subcourse '{}': course {} does not exist",
                request.title, request.course_id
            );
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Course with id {} does not exist", request.course_id),
                    code: "INVALID_COURSE_ID".to_string(),
                    success: false,
                }),
            ));
        }
        Err(db_error) => {
            error!(
                "Failed to lookup course {} for subcourse creation: {}",
                request.course_id, db_error
            );
            return Err(internal_error("Internal server error while creating subcourse"));
        }
    }

    let status = request.status.unwrap_or(ProgressStatus::NotStarted);
    let new_subcourse = sub_course::ActiveModel {
        title: Set(request.title.clone()),
        description: Set(request.description.clone()),
        link: Set(request.link.clone()),
        status: Set(status.into()),
        course_id: Set(request.course_id),
        ..Default::default()
    };

    trace!("Attempting to insert new subcourse into database");
    match new_subcourse.insert(&state.db).await {
        Ok(subcourse_model) => {
            info!(
                "SubCourse created successfully with ID: {}, title: {}, course: {}",
                subcourse_model.id, subcourse_model.title, subcourse_model.course_id
            );
            let response = ApiResponse {
                data: SubCourseResponse::from(subcourse_model),
                message: "SubCourse created successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!(
                "Failed to create subcourse '{}': {}",
                request.title, db_error
            );
            Err(internal_error("Internal server error while creating subcourse"))
        }
    }
}

/// Get all subcourses of a course, ordered by id
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/subcourses",
    tag = "subcourses",
    params(
        ("course_id" = i32, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, description = "SubCourses retrieved successfully", body = ApiResponse<Vec<SubCourseResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_course_subcourses(
    Path(course_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SubCourseResponse>>>, (StatusCode, Json<ErrorResponse>)> {
    trace!(
        "Entering get_course_subcourses function for course_id: {}",
        course_id
    );
    debug!("Fetching subcourses for course: {}", course_id);

    match sub_course::Entity::find()
        .filter(sub_course::Column::CourseId.eq(course_id))
        .order_by_asc(sub_course::Column::Id)
        .all(&state.db)
        .await
    {
        Ok(subcourses) => {
            let subcourse_count = subcourses.len();
            debug!(
                "Retrieved {} subcourses for course {}",
                subcourse_count, course_id
            );

            let subcourse_responses: Vec<SubCourseResponse> =
                subcourses.into_iter().map(SubCourseResponse::from).collect();

            info!(
                "Successfully retrieved {} subcourses for course {}",
                subcourse_count, course_id
            );
            let response = ApiResponse {
                data: subcourse_responses,
                message: "SubCourses retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!(
                "Failed to retrieve subcourses for course {}: {}",
                course_id, db_error
            );
            Err(internal_error("Internal server error while listing subcourses"))
        }
    }
}

/// Update a subcourse
#[utoipa::path(
    put,
    path = "/api/subcourses/{subcourse_id}",
    tag = "subcourses",
    params(
        ("subcourse_id" = i32, Path, description = "SubCourse ID"),
    ),
    request_body = UpdateSubCourseRequest,
    responses(
        (status = 200, description = "SubCourse updated successfully", body = ApiResponse<SubCourseResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "SubCourse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn update_subcourse(
    Path(subcourse_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateSubCourseRequest>,
) -> Result<Json<ApiResponse<SubCourseResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!(
        "Entering update_subcourse function for subcourse_id: {}",
        subcourse_id
    );
    debug!("Updating subcourse with ID: {}", subcourse_id);

    if let Err(validation_errors) = request.validate() {
        warn!(
            "SubCourse update payload failed validation: {}",
            validation_errors
        );
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: validation_errors.to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    // First, find the existing subcourse
    trace!("Looking up existing subcourse with ID: {}", subcourse_id);
    let existing_subcourse = match sub_course::Entity::find_by_id(subcourse_id)
        .one(&state.db)
        .await
    {
        Ok(Some(subcourse)) => {
            debug!("Found existing subcourse: {}", subcourse.title);
            subcourse
        }
        Ok(None) => {
            warn!("SubCourse with ID {} not found for update", subcourse_id);
            return Err(subcourse_not_found(subcourse_id));
        }
        Err(db_error) => {
            error!(
                "Failed to lookup subcourse with ID {} for update: {}",
                subcourse_id, db_error
            );
            return Err(internal_error("Internal server error while updating subcourse"));
        }
    };

    // Create active model for update
    let mut subcourse_active: sub_course::ActiveModel = existing_subcourse.into();
    let mut updated_fields = Vec::new();

    // Update only provided fields
    if let Some(title) = request.title {
        debug!("Updating subcourse title to: {}", title);
        subcourse_active.title = Set(title.clone());
        updated_fields.push(format!("title: {}", title));
    }
    if let Some(description) = request.description {
        subcourse_active.description = Set(Some(description));
        updated_fields.push("description".to_string());
    }
    if let Some(link) = request.link {
        subcourse_active.link = Set(Some(link.clone()));
        updated_fields.push(format!("link: {}", link));
    }
    if let Some(status) = request.status {
        subcourse_active.status = Set(status.into());
        updated_fields.push(format!("status: {:?}", status));
    }

    if updated_fields.is_empty() {
        debug!("No fields to update for subcourse ID: {}", subcourse_id);
    } else {
        debug!("Updating fields: {}", updated_fields.join(", "));
    }

    trace!("Attempting to update subcourse in database");
    match subcourse_active.update(&state.db).await {
        Ok(updated_subcourse) => {
            info!(
                "SubCourse with ID {} updated successfully. Updated fields: {}",
                subcourse_id,
                if updated_fields.is_empty() {
                    "none".to_string()
                } else {
                    updated_fields.join(", ")
                }
            );
            let response = ApiResponse {
                data: SubCourseResponse::from(updated_subcourse),
                message: "SubCourse updated successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!(
                "Failed to update subcourse with ID {}: {}",
                subcourse_id, db_error
            );
            Err(internal_error("Internal server error while updating subcourse"))
        }
    }
}

/// Delete a subcourse
#[utoipa::path(
    delete,
    path = "/api/subcourses/{subcourse_id}",
    tag = "subcourses",
    params(
        ("subcourse_id" = i32, Path, description = "SubCourse ID"),
    ),
    responses(
        (status = 200, description = "SubCourse deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "SubCourse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn delete_subcourse(
    Path(subcourse_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ErrorResponse>)> {
    trace!(
        "Entering delete_subcourse function for subcourse_id: {}",
        subcourse_id
    );
    debug!("Attempting to delete subcourse with ID: {}", subcourse_id);

    match sub_course::Entity::delete_by_id(subcourse_id).exec(&state.db).await {
        Ok(delete_result) => {
            debug!(
                "Delete operation completed. Rows affected: {}",
                delete_result.rows_affected
            );
            if delete_result.rows_affected > 0 {
                info!("SubCourse with ID {} deleted successfully", subcourse_id);
                let response = ApiResponse {
                    data: format!("SubCourse {} deleted", subcourse_id),
                    message: "SubCourse deleted successfully".to_string(),
                    success: true,
                };
                Ok(Json(response))
            } else {
                warn!(
                    "SubCourse with ID {} not found for deletion (no rows affected)",
                    subcourse_id
                );
                Err(subcourse_not_found(subcourse_id))
            }
        }
        Err(db_error) => {
            error!(
                "Failed to delete subcourse with ID {}: {}",
                subcourse_id, db_error
            );
            Err(internal_error("Internal server error while deleting subcourse"))
        }
    }
}

fn subcourse_not_found(subcourse_id: i32) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("SubCourse with id {} does not exist", subcourse_id),
            code: "SUBCOURSE_NOT_FOUND".to_string(),
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
