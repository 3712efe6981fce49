use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ScheduledClassService;
use super::update::load_modifiable;
use crate::models::scheduled_classes::entities::ScheduledClass;
use crate::models::users::entities::CurrentUser;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{locations, not_found, see_other, storage_failure};

pub async fn delete_confirm(
    service: &ScheduledClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_modifiable(&storage, user, id).await {
        Ok(scheduled) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            scheduled,
            "Confirm scheduled class deletion",
        ))),
        Err(resp) => Ok(resp),
    }
}

pub async fn delete_scheduled_class(
    service: &ScheduledClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_modifiable(&storage, user, id).await {
        return Ok(resp);
    }

    match storage.delete_scheduled_class(id).await {
        Ok(true) => {
            info!("Scheduled class {} deleted by {}", id, user.id);
            Ok(see_other::<ScheduledClass>(
                locations::ALL_SCHEDULED_CLASSES.to_string(),
                None,
                "Scheduled class deleted successfully",
            ))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::ScheduledClassNotFound,
            "Scheduled class not found",
        )),
        Err(e) => Ok(storage_failure(
            ErrorCode::ScheduledClassDeleteFailed,
            "Failed to delete scheduled class",
            &e,
        )),
    }
}
