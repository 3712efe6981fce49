pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use std::sync::Arc;
use tracing::warn;

use crate::models::users::entities::CurrentUser;
use crate::models::vaults::requests::{CreateVaultRequest, UpdateVaultRequest};
use crate::models::{ErrorCode, FieldErrors};
use crate::services::{form_errors, storage_failure};
use crate::storage::Storage;

pub struct VaultService {
    storage: Option<Arc<dyn Storage>>,
}

impl VaultService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_form(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        create::create_form(self, req, class_id).await
    }

    pub async fn create_vault(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        class_id: i64,
        data: CreateVaultRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_vault(self, req, user, class_id, data).await
    }

    pub async fn list_vaults(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_vaults(self, req).await
    }

    pub async fn get_vault(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_vault(self, req, id).await
    }

    pub async fn update_form(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        update::update_form(self, req, user, id).await
    }

    pub async fn update_vault(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
        data: UpdateVaultRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_vault(self, req, user, id, data).await
    }

    pub async fn delete_confirm(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_confirm(self, req, user, id).await
    }

    pub async fn delete_vault(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_vault(self, req, user, id).await
    }
}

fn field_label(field: &str) -> &'static str {
    match field {
        "saved_password" => "Saved password",
        "website" => "Website",
        _ => "Value",
    }
}

/// 唯一字段冲突转为字段级错误
fn conflict_errors(fields: &[&str]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        errors.add(
            field,
            format!("Vault with this {} already exists.", field_label(field)),
        );
    }
    errors
}

fn conflict_response(errors: FieldErrors) -> HttpResponse {
    form_errors(
        StatusCode::CONFLICT,
        ErrorCode::VaultAlreadyExists,
        errors,
        "Vault with these values already exists",
    )
}

/// 写入前检查唯一字段，有冲突时返回 409 响应
async fn check_unique_fields(
    storage: &dyn Storage,
    saved_password: Option<&str>,
    website: Option<&str>,
    exclude_id: Option<i64>,
) -> Result<(), HttpResponse> {
    match storage
        .find_vault_conflicts(saved_password, website, exclude_id)
        .await
    {
        Ok(fields) if fields.is_empty() => Ok(()),
        Ok(fields) => Err(conflict_response(conflict_errors(&fields))),
        Err(e) => Err(storage_failure(
            ErrorCode::InternalServerError,
            "Failed to check vault uniqueness",
            &e,
        )),
    }
}

/// 预检通过后写入仍可能被并发请求抢先，此时重新定位冲突字段
async fn resolve_write_conflict(
    storage: &dyn Storage,
    saved_password: Option<&str>,
    website: Option<&str>,
    exclude_id: Option<i64>,
) -> HttpResponse {
    warn!("Vault unique constraint hit after pre-check, re-resolving conflicting fields");
    match check_unique_fields(storage, saved_password, website, exclude_id).await {
        Err(resp) => resp,
        Ok(()) => {
            let mut errors = FieldErrors::new();
            errors.add("__all__", "Vault with these values already exists.");
            conflict_response(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_errors_messages() {
        let errors = conflict_errors(&["website"]);
        assert_eq!(
            errors.get("website"),
            Some(&["Vault with this Website already exists.".to_string()][..])
        );
        assert!(!errors.contains("saved_password"));
    }
}
