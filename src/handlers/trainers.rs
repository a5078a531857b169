use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::NaiveDate;
use model::entities::trainer;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Gender accepted on the wire for trainer and student records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl From<Gender> for trainer::Gender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => trainer::Gender::Male,
            Gender::Female => trainer::Gender::Female,
            Gender::Other => trainer::Gender::Other,
        }
    }
}

impl From<trainer::Gender> for Gender {
    fn from(gender: trainer::Gender) -> Self {
        match gender {
            trainer::Gender::Male => Gender::Male,
            trainer::Gender::Female => Gender::Female,
            trainer::Gender::Other => Gender::Other,
        }
    }
}

/// Request body for registering a new trainer
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainerRequest {
    /// Full name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: NaiveDate,
    /// Aadhar number; must be unique among trainers
    #[validate(length(equal = 12, message = "aadhar must be exactly 12 characters"))]
    pub aadhar: String,
    pub gender: Gender,
    /// Postal address
    pub address: Option<String>,
    /// Highest educational qualification
    pub educational_qualification: Option<String>,
}

/// Trainer response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainerResponse {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub aadhar: String,
    pub gender: Gender,
    pub address: Option<String>,
    pub educational_qualification: Option<String>,
}

impl From<trainer::Model> for TrainerResponse {
    fn from(model: trainer::Model) -> Self {
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

/// Register a new trainer
#[utoipa::path(
    post,
    path = "/api/trainers",
    tag = "trainers",
    request_body = CreateTrainerRequest,
    responses(
        (status = 201, description = "Trainer registered successfully", body = ApiResponse<TrainerResponse>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_trainer(
    State(state): State<AppState>,
    Json(request): Json<CreateTrainerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TrainerResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_trainer function");
    debug!("Registering trainer with name: {}", request.name);

    if let Err(validation_errors) = request.validate() {
        warn!("Trainer payload failed validation: {}", validation_errors);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: validation_errors.to_string(),
                code: "VALIDATION_ERROR".to_string(),
                success: false,
            }),
        ));
    }

    let new_trainer = trainer::ActiveModel {
        name: Set(request.name.clone()),
        dob: Set(request.dob),
        aadhar: Set(request.aadhar.clone()),
        gender: Set(request.gender.into()),
        address: Set(request.address.clone()),
        educational_qualification: Set(request.educational_qualification.clone()),
        ..Default::default()
    };

    trace!("Attempting to insert new trainer into database");
    match new_trainer.insert(&state.db).await {
        Ok(trainer_model) => {
            info!(
                "Trainer registered successfully with ID: {}, name: {}",
                trainer_model.id, trainer_model.name
            );
            let response = ApiResponse {
                data: TrainerResponse::from(trainer_model),
                message: "Trainer registered successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to register trainer '{}': {}", request.name, db_error);

            // A duplicate aadhar trips the unique constraint on the table
            let error_msg = db_error.to_string().to_lowercase();
            if error_msg.contains("unique") || error_msg.contains("constraint") {
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Trainer with aadhar '{}' already exists", request.aadhar),
                        code: "AADHAR_ALREADY_EXISTS".to_string(),
                        success: false,
                    }),
                ))
            } else {
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error while registering trainer".to_string(),
                        code: "DATABASE_ERROR".to_string(),
                        success: false,
                    }),
                ))
            }
        }
    }
}

/// Get all trainers
#[utoipa::path(
    get,
    path = "/api/trainers",
    tag = "trainers",
    responses(
        (status = 200, description = "Trainers retrieved successfully", body = ApiResponse<Vec<TrainerResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_trainers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TrainerResponse>>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_trainers function");
    debug!("Fetching all trainers from database");

    match trainer::Entity::find().all(&state.db).await {
        Ok(trainers) => {
            let trainer_count = trainers.len();
            debug!("Retrieved {} trainers from database", trainer_count);

            let trainer_responses: Vec<TrainerResponse> =
                trainers.into_iter().map(TrainerResponse::from).collect();

            info!("Successfully retrieved {} trainers", trainer_count);
            let response = ApiResponse {
                data: trainer_responses,
                message: "Trainers retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve trainers from database: {}", db_error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while listing trainers".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
