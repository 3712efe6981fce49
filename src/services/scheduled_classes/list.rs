use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScheduledClassService;
use crate::models::scheduled_classes::responses::ScheduledClassListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_failure;

pub async fn list_scheduled_classes(
    service: &ScheduledClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_scheduled_classes().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScheduledClassListResponse { items },
            "Scheduled classes retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure(
            ErrorCode::InternalServerError,
            "Failed to list scheduled classes",
            &e,
        )),
    }
}
