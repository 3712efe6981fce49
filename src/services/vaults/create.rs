use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use super::{VaultService, check_unique_fields, resolve_write_conflict};
use crate::errors::ClassVaultError;
use crate::models::users::entities::CurrentUser;
use crate::models::vaults::requests::CreateVaultRequest;
use crate::models::vaults::responses::VaultFormContext;
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::scheduled_classes::create::load_parent_class;
use crate::services::{form_errors, locations, see_other, storage_failure};
use crate::utils::validate::{NAME_MAX_LENGTH, TEXT_MAX_LENGTH, check_max_length, require_text};

pub async fn create_form(
    service: &VaultService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_parent_class(storage.as_ref(), class_id).await {
        Ok(class) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VaultFormContext {
                class_id: class.id,
                class_name: class.class_name,
            },
            "Vault form",
        ))),
        Err(resp) => Ok(resp),
    }
}

pub async fn create_vault(
    service: &VaultService,
    request: &HttpRequest,
    user: &CurrentUser,
    class_id: i64,
    data: CreateVaultRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_parent_class(storage.as_ref(), class_id).await {
        return Ok(resp);
    }

    if let Err(errors) = validate_create(&data) {
        return Ok(form_errors(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            errors,
            "Vault form is invalid",
        ));
    }

    if let Err(resp) = check_unique_fields(
        storage.as_ref(),
        Some(data.saved_password.as_str()),
        Some(data.website.as_str()),
        None,
    )
    .await
    {
        return Ok(resp);
    }

    let saved_password = data.saved_password.clone();
    let website = data.website.clone();

    match storage.create_vault(class_id, data).await {
        Ok(vault) => {
            info!("Vault {} created for class {} by {}", vault.id, class_id, user.id);
            Ok(see_other(
                locations::vault_detail(vault.id),
                Some(vault),
                "Vault created successfully",
            ))
        }
        Err(ClassVaultError::Conflict(_)) => Ok(resolve_write_conflict(
            storage.as_ref(),
            Some(saved_password.as_str()),
            Some(website.as_str()),
            None,
        )
        .await),
        Err(e) => Ok(storage_failure(
            ErrorCode::VaultCreationFailed,
            "Failed to create vault",
            &e,
        )),
    }
}

fn validate_create(data: &CreateVaultRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "saved_password", &data.saved_password, NAME_MAX_LENGTH);
    require_text(&mut errors, "website", &data.website, NAME_MAX_LENGTH);
    if let Some(description) = &data.description {
        check_max_length(&mut errors, "description", description, TEXT_MAX_LENGTH);
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_create_requires_both_unique_fields() {
        let data = CreateVaultRequest {
            saved_password: String::new(),
            website: "a".repeat(NAME_MAX_LENGTH + 1),
            description: None,
        };
        let errors = validate_create(&data).unwrap_err();
        assert!(errors.contains("saved_password"));
        assert!(errors.contains("website"));
        assert!(!errors.contains("description"));
    }
}
