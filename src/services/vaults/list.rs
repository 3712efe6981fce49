use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VaultService;
use crate::models::vaults::responses::VaultListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_failure;

pub async fn list_vaults(service: &VaultService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_vaults().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VaultListResponse { items },
            "Vaults retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure(
            ErrorCode::InternalServerError,
            "Failed to list vaults",
            &e,
        )),
    }
}
