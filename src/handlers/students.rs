use crate::handlers::trainers::Gender;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::NaiveDate;
use model::entities::student;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for registering a new student.
///
/// Students share the trainer record shape; aadhar uniqueness is checked
/// against the students table only.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateStudentRequest {
    /// Full name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: NaiveDate,
    /// Aadhar number; must be unique among students
    #[validate(length(equal = 12, message = "aadhar must be exactly 12 characters"))]
    pub aadhar: String,
    pub gender: Gender,
    /// Postal address
    pub address: Option<String>,
    /// Highest educational qualification
    pub educational_qualification: Option<String>,
}

/// Student response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub aadhar: String,
    pub gender: Gender,
    pub address: Option<String>,
    pub educational_qualification: Option<String>,
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            dob: model.dob,
            aadhar: model.aadhar,
            gender: model.gender.into(),
            address: model.address,
            educational_qualification: model.educational_qualification,
        }
    }
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student registered successfully", body = ApiResponse<StudentResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StudentResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_student function");
    debug!("Registering student with name: {}", request.name);

    if let Err(validation_errors) = request.validate() {
        warn!("Student payload failed validation: {}", validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: validation_errors.to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    let new_student = student::ActiveModel {
        name: Set(request.name.clone()),
        dob: Set(request.dob),
        aadhar: Set(request.aadhar.clone()),
        gender: Set(request.gender.into()),
        address: Set(request.address.clone()),
        educational_qualification: Set(request.educational_qualification.clone()),
        ..Default::default()
    };

    trace!("Attempting to insert new student into database");
    match new_student.insert(&state.db).await {
        Ok(student_model) => {
            info!(
                "Student registered successfully with ID: {}, name: {}",
                student_model.id, student_model.name
            );
            let response = ApiResponse {
                data: StudentResponse::from(student_model),
                message: "Student registered successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to register student '{}': {}", request.name, db_error);

            let error_msg = db_error.to_string().to_lowercase();
            if error_msg.contains("unique") || error_msg.contains("constraint") {
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Student with aadhar '{}' already exists", request.aadhar),
                        code: "AADHAR_ALREADY_EXISTS".to_string(),
                        success: false,
                    }),
                ))
            } else {
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error while registering student".to_string(),
                        code: "DATABASE_ERROR".to_string(),
                        success: false,
                    }),
                ))
            }
        }
    }
}

/// Get all students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses(
        (status = 200, description = "Students retrieved successfully", body = ApiResponse<Vec<StudentResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StudentResponse>>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_students function");
    debug!("Fetching all students from database");

    match student::Entity::find().all(&state.db).await {
        Ok(students) => {
            let student_count = students.len();
            debug!("Retrieved {} students from database", student_count);

            let student_responses: Vec<StudentResponse> =
                students.into_iter().map(StudentResponse::from).collect();

            info!("Successfully retrieved {} students", student_count);
            let response = ApiResponse {
                data: student_responses,
                message: "Students retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve students from database: {}", db_error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while listing students".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
