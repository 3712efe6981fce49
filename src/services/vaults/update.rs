use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use super::{VaultService, check_unique_fields, resolve_write_conflict};
use crate::errors::ClassVaultError;
use crate::models::users::entities::CurrentUser;
use crate::models::vaults::entities::Vault;
use crate::models::vaults::requests::UpdateVaultRequest;
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::permission::check_modify_permission;
use crate::services::{form_errors, locations, not_found, see_other, storage_failure};
use crate::storage::Storage;
use crate::utils::validate::{NAME_MAX_LENGTH, TEXT_MAX_LENGTH, check_max_length, require_text};

pub async fn update_form(
    service: &VaultService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_modifiable(&storage, user, id).await {
        Ok(vault) => Ok(HttpResponse::Ok().json(ApiResponse::success(vault, "Vault update form"))),
        Err(resp) => Ok(resp),
    }
}

pub async fn update_vault(
    service: &VaultService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
    data: UpdateVaultRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_modifiable(&storage, user, id).await {
        return Ok(resp);
    }

    let errors = match validate_update(&storage, &data).await {
        Ok(errors) => errors,
        Err(resp) => return Ok(resp),
    };
    if let Err(errors) = errors.into_result() {
        return Ok(form_errors(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            errors,
            "Vault form is invalid",
        ));
    }

    // 自身当前值不算冲突
    if let Err(resp) = check_unique_fields(
        storage.as_ref(),
        data.saved_password.as_deref(),
        data.website.as_deref(),
        Some(id),
    )
    .await
    {
        return Ok(resp);
    }

    let saved_password = data.saved_password.clone();
    let website = data.website.clone();

    match storage.update_vault(id, data).await {
        Ok(Some(vault)) => {
            info!("Vault {} updated by {}", vault.id, user.id);
            Ok(see_other(
                locations::vault_detail(vault.id),
                Some(vault),
                "Vault updated successfully",
            ))
        }
        Ok(None) => Ok(not_found(ErrorCode::VaultNotFound, "Vault not found")),
        Err(ClassVaultError::Conflict(_)) => Ok(resolve_write_conflict(
            storage.as_ref(),
            saved_password.as_deref(),
            website.as_deref(),
            Some(id),
        )
        .await),
        Err(e) => Ok(storage_failure(
            ErrorCode::VaultUpdateFailed,
            "Failed to update vault",
            &e,
        )),
    }
}

pub(super) async fn load_modifiable(
    storage: &Arc<dyn Storage>,
    user: &CurrentUser,
    id: i64,
) -> Result<Vault, HttpResponse> {
    let vault = match storage.get_vault_by_id(id).await {
        Ok(Some(vault)) => vault,
        Ok(None) => return Err(not_found(ErrorCode::VaultNotFound, "Vault not found")),
        Err(e) => {
            return Err(storage_failure(
                ErrorCode::InternalServerError,
                "Failed to get vault",
                &e,
            ));
        }
    };

    check_modify_permission(user, "vault", id)?;
    Ok(vault)
}

async fn validate_update(
    storage: &Arc<dyn Storage>,
    data: &UpdateVaultRequest,
) -> Result<FieldErrors, HttpResponse> {
    let mut errors = FieldErrors::new();

    if let Some(saved_password) = &data.saved_password {
        require_text(&mut errors, "saved_password", saved_password, NAME_MAX_LENGTH);
    }
    if let Some(website) = &data.website {
        require_text(&mut errors, "website", website, NAME_MAX_LENGTH);
    }
    if let Some(Some(description)) = &data.description {
        check_max_length(&mut errors, "description", description, TEXT_MAX_LENGTH);
    }

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
