use crate::dtos::{CreateInquiryRequest, CreateInquiryResponse, InquiryListParams, InquiryResponse};
use crate::error::AppError;
use crate::models::{InquiryRecord, INQUIRY_COLLECTION};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::doc;

pub const CONFIRMATION_MESSAGE: &str = "Solicitud recibida. ¡Gracias!";

const DEFAULT_LIST_LIMIT: i64 = 20;

pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateInquiryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = InquiryRecord::new(request);
    let document = mongodb::bson::to_document(&record).map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("Failed to serialize inquiry: {}", e))
    })?;

    let id = state
        .db
        .create_document(INQUIRY_COLLECTION, document)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store inquiry: {}", e);
            e
        })?;

    tracing::info!(inquiry_id = %id, service_type = %record.service_type, "Inquiry received");

    Ok((
        StatusCode::CREATED,
        Json(CreateInquiryResponse {
            id,
            message: CONFIRMATION_MESSAGE.to_string(),
        }),
    ))
}

pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(params): Query<InquiryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT).max(1);

    let documents = state
        .db
        .get_documents(INQUIRY_COLLECTION, doc! {}, limit)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list inquiries: {}", e);
            e
        })?;

    let mut inquiries = Vec::with_capacity(documents.len());
    for document in documents {
        let record: InquiryRecord = mongodb::bson::from_document(document).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to decode inquiry: {}", e))
        })?;
        inquiries.push(InquiryResponse::from(record));
    }

    Ok(Json(inquiries))
}
