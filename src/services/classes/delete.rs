use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use super::update::load_modifiable;
use crate::models::classes::entities::Class;
use crate::models::users::entities::CurrentUser;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{locations, not_found, see_other, storage_failure};

pub async fn delete_confirm(
    service: &ClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_modifiable(&storage, user, class_id).await {
        Ok(class) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Confirm class deletion",
        ))),
        Err(resp) => Ok(resp),
    }
}

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_modifiable(&storage, user, class_id).await {
        return Ok(resp);
    }

    match storage.delete_class(class_id).await {
        Ok(true) => {
            info!("Class {} deleted by {}", class_id, user.id);
            Ok(see_other::<Class>(
                locations::ALL_CLASSES.to_string(),
                None,
                "Class deleted successfully",
            ))
        }
        Ok(false) => Ok(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Ok(storage_failure(
            ErrorCode::ClassDeleteFailed,
            "Failed to delete class",
            &e,
        )),
    }
}
