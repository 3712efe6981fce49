use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use super::ScheduledClassService;
use crate::models::scheduled_classes::entities::ScheduledClass;
use crate::models::scheduled_classes::requests::UpdateScheduledClassRequest;
use crate::models::users::entities::CurrentUser;
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::permission::check_modify_permission;
use crate::services::{form_errors, locations, not_found, see_other, storage_failure};
use crate::storage::Storage;
use crate::utils::validate::check_date_range;

pub async fn update_form(
    service: &ScheduledClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_modifiable(&storage, user, id).await {
        Ok(scheduled) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            scheduled,
            "Scheduled class update form",
        ))),
        Err(resp) => Ok(resp),
    }
}

pub async fn update_scheduled_class(
    service: &ScheduledClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
    data: UpdateScheduledClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current = match load_modifiable(&storage, user, id).await {
        Ok(scheduled) => scheduled,
        Err(resp) => return Ok(resp),
    };

    let errors = match validate_update(&storage, &current, &data).await {
        Ok(errors) => errors,
        Err(resp) => return Ok(resp),
    };
    if let Err(errors) = errors.into_result() {
        return Ok(form_errors(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            errors,
            "Scheduled class form is invalid",
        ));
    }

    match storage.update_scheduled_class(id, data).await {
        Ok(Some(scheduled)) => {
            info!("Scheduled class {} updated by {}", scheduled.id, user.id);
            Ok(see_other(
                locations::scheduled_class_update(scheduled.id),
                Some(scheduled),
                "Scheduled class updated successfully",
            ))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::ScheduledClassNotFound,
            "Scheduled class not found",
        )),
        Err(e) => Ok(storage_failure(
            ErrorCode::ScheduledClassUpdateFailed,
            "Failed to update scheduled class",
            &e,
        )),
    }
}

pub(super) async fn load_modifiable(
    storage: &Arc<dyn Storage>,
    user: &CurrentUser,
    id: i64,
) -> Result<ScheduledClass, HttpResponse> {
    let scheduled = match storage.get_scheduled_class_by_id(id).await {
        Ok(Some(scheduled)) => scheduled,
        Ok(None) => {
            return Err(not_found(
                ErrorCode::ScheduledClassNotFound,
                "Scheduled class not found",
            ));
        }
        Err(e) => {
            return Err(storage_failure(
                ErrorCode::InternalServerError,
                "Failed to get scheduled class",
                &e,
            ));
        }
    };

    check_modify_permission(user, "scheduled class", id)?;
    Ok(scheduled)
}

/// 日期区间按合并后的值校验；改挂班级时目标班级必须存在
async fn validate_update(
    storage: &Arc<dyn Storage>,
    current: &ScheduledClass,
    data: &UpdateScheduledClassRequest,
) -> Result<FieldErrors, HttpResponse> {
    let mut errors = FieldErrors::new();

    check_date_range(
        &mut errors,
        data.start_date.unwrap_or(current.start_date),
        data.end_date.unwrap_or(current.end_date),
    );

    if let Some(class_id) = data.class_id {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => errors.add("class_id", "Select a valid class."),
            Err(e) => {
                return Err(storage_failure(
                    ErrorCode::InternalServerError,
                    "Failed to get class",
                    &e,
                ));
            }
        }
    }

    Ok(errors)
}
