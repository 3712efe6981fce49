use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VaultService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{not_found, storage_failure};

pub async fn get_vault(
    service: &VaultService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_vault_by_id(id).await {
        Ok(Some(vault)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(vault, "Vault retrieved successfully")))
        }
        Ok(None) => Ok(not_found(ErrorCode::VaultNotFound, "Vault not found")),
        Err(e) => Ok(storage_failure(
            ErrorCode::InternalServerError,
            "Failed to get vault",
            &e,
        )),
    }
}
