use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::VaultService;
use super::update::load_modifiable;
use crate::models::users::entities::CurrentUser;
use crate::models::vaults::entities::Vault;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{locations, not_found, see_other, storage_failure};

pub async fn delete_confirm(
    service: &VaultService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_modifiable(&storage, user, id).await {
        Ok(vault) => Ok(HttpResponse::Ok().json(ApiResponse::success(vault, "Confirm vault deletion"))),
        Err(resp) => Ok(resp),
    }
}

pub async fn delete_vault(
    service: &VaultService,
    request: &HttpRequest,
    user: &CurrentUser,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_modifiable(&storage, user, id).await {
        return Ok(resp);
    }

    match storage.delete_vault(id).await {
        Ok(true) => {
            info!("Vault {} deleted by {}", id, user.id);
            Ok(see_other::<Vault>(
                locations::ALL_VAULTS.to_string(),
                None,
                "Vault deleted successfully",
            ))
        }
        Ok(false) => Ok(not_found(ErrorCode::VaultNotFound, "Vault not found")),
        Err(e) => Ok(storage_failure(
            ErrorCode::VaultDeleteFailed,
            "Failed to delete vault",
            &e,
        )),
    }
}
