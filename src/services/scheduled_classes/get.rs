use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScheduledClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_failure};

pub async fn get_scheduled_class(
    service: &ScheduledClassService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_scheduled_class_by_id(id).await {
        Ok(Some(scheduled)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            scheduled,
            "Scheduled class retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::ScheduledClassNotFound,
            "Scheduled class not found",
        )),
        Err(e) => Ok(storage_failure(
            ErrorCode::InternalServerError,
            "Failed to get scheduled class",
            &e,
        )),
    }
}
