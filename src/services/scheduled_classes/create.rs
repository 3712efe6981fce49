use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use super::ScheduledClassService;
use crate::models::classes::entities::Class;
use crate::models::scheduled_classes::requests::CreateScheduledClassRequest;
use crate::models::scheduled_classes::responses::ScheduledClassFormContext;
use crate::models::users::entities::CurrentUser;
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::{form_errors, locations, not_found, see_other, storage_failure};
use crate::storage::Storage;
use crate::utils::validate::check_date_range;

pub async fn create_form(
    service: &ScheduledClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_parent_class(storage.as_ref(), class_id).await {
        Ok(class) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScheduledClassFormContext {
                class_id: class.id,
                class_name: class.class_name,
            },
            "Scheduled class form",
        ))),
        Err(resp) => Ok(resp),
    }
}

pub async fn create_scheduled_class(
    service: &ScheduledClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    class_id: i64,
    data: CreateScheduledClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_parent_class(storage.as_ref(), class_id).await {
        return Ok(resp);
    }

    let mut errors = FieldErrors::new();
    check_date_range(&mut errors, data.start_date, data.end_date);
    if let Err(errors) = errors.into_result() {
        return Ok(form_errors(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            errors,
            "Scheduled class form is invalid",
        ));
    }

    match storage.create_scheduled_class(class_id, data, user.id).await {
        Ok(scheduled) => {
            info!(
                "Scheduled class {} created for class {} by {}",
                scheduled.id, class_id, user.id
            );
            Ok(see_other(
                locations::scheduled_class_detail(scheduled.id),
                Some(scheduled),
                "Scheduled class created successfully",
            ))
        }
        Err(e) => Ok(storage_failure(
            ErrorCode::ScheduledClassCreationFailed,
            "Failed to create scheduled class",
            &e,
        )),
    }
}

/// 路径中的班级必须存在
pub(crate) async fn load_parent_class(
    storage: &dyn Storage,
    class_id: i64,
) -> Result<Class, HttpResponse> {
    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(class),
        Ok(None) => Err(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Err(storage_failure(
            ErrorCode::InternalServerError,
            "Failed to get class",
            &e,
        )),
    }
}
