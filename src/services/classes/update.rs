use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use super::ClassService;
use crate::models::classes::entities::Class;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::users::entities::CurrentUser;
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::permission::check_modify_permission;
use crate::services::{form_errors, locations, not_found, see_other, storage_failure};
use crate::storage::Storage;
use crate::utils::validate::{NAME_MAX_LENGTH, TEXT_MAX_LENGTH, check_max_length, require_text};

pub async fn update_form(
    service: &ClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_modifiable(&storage, user, class_id).await {
        Ok(class) => Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class update form"))),
        Err(resp) => Ok(resp),
    }
}

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_modifiable(&storage, user, class_id).await {
        return Ok(resp);
    }

    if let Err(errors) = validate_update(&update_data) {
        return Ok(form_errors(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            errors,
            "Class form is invalid",
        ));
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => {
            info!("Class {} updated by {}", class.id, user.id);
            Ok(see_other(
                locations::class_detail(class.id),
                Some(class),
                "Class updated successfully",
            ))
        }
        Ok(None) => Ok(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Ok(storage_failure(
            ErrorCode::ClassUpdateFailed,
            "Failed to update class",
            &e,
        )),
    }
}

/// 先确认记录存在，再检查修改权限
pub(super) async fn load_modifiable(
    storage: &Arc<dyn Storage>,
    user: &CurrentUser,
    class_id: i64,
) -> Result<Class, HttpResponse> {
    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => return Err(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => {
            return Err(storage_failure(
                ErrorCode::InternalServerError,
                "Failed to get class",
                &e,
            ));
        }
    };

    check_modify_permission(user, "class", class_id)?;
    Ok(class)
}

fn validate_update(update_data: &UpdateClassRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Some(class_name) = &update_data.class_name {
        require_text(&mut errors, "class_name", class_name, NAME_MAX_LENGTH);
    }
    if let Some(description) = &update_data.description {
        check_max_length(&mut errors, "description", description, TEXT_MAX_LENGTH);
    }
    if let Some(expectations) = &update_data.expectations {
        check_max_length(&mut errors, "expectations", expectations, TEXT_MAX_LENGTH);
    }
    errors.into_result()
}
