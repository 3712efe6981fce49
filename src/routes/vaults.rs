use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::CurrentUser;
use crate::models::vaults::requests::{CreateVaultRequest, UpdateVaultRequest};
use crate::services::VaultService;
use crate::utils::{SafeClassIdI64, SafeIDI64};

static VAULT_SERVICE: Lazy<VaultService> = Lazy::new(VaultService::new_lazy);

pub async fn create_form(
    req: HttpRequest,
    _user: CurrentUser,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    VAULT_SERVICE.create_form(&req, class_id.0).await
}

pub async fn create_vault(
    req: HttpRequest,
    user: CurrentUser,
    class_id: SafeClassIdI64,
    data: web::Json<CreateVaultRequest>,
) -> ActixResult<HttpResponse> {
    VAULT_SERVICE
        .create_vault(&req, &user, class_id.0, data.into_inner())
        .await
}

pub async fn list_vaults(req: HttpRequest) -> ActixResult<HttpResponse> {
    VAULT_SERVICE.list_vaults(&req).await
}

pub async fn get_vault(req: HttpRequest, pk: SafeIDI64) -> ActixResult<HttpResponse> {
    VAULT_SERVICE.get_vault(&req, pk.0).await
}

pub async fn update_form(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    VAULT_SERVICE.update_form(&req, &user, pk.0).await
}

pub async fn update_vault(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
    data: web::Json<UpdateVaultRequest>,
) -> ActixResult<HttpResponse> {
    VAULT_SERVICE
        .update_vault(&req, &user, pk.0, data.into_inner())
        .await
}

pub async fn delete_confirm(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    VAULT_SERVICE.delete_confirm(&req, &user, pk.0).await
}

pub async fn delete_vault(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    VAULT_SERVICE.delete_vault(&req, &user, pk.0).await
}

pub fn configure_vaults_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/vault_create/{class_id}/")
            .route(web::get().to(create_form).wrap(middlewares::RequireJWT))
            .route(web::post().to(create_vault).wrap(middlewares::RequireJWT)),
    )
    .service(web::resource("/all_vaults").route(web::get().to(list_vaults)))
    .service(web::resource("/vault/{pk}/").route(web::get().to(get_vault)))
    .service(
        web::resource("/vault/{pk}/update/")
            .route(web::get().to(update_form).wrap(middlewares::RequireJWT))
            .route(web::post().to(update_vault).wrap(middlewares::RequireJWT))
            .route(web::put().to(update_vault).wrap(middlewares::RequireJWT)),
    )
    .service(
        web::resource("/vault/{pk}/delete/")
            .route(web::get().to(delete_confirm).wrap(middlewares::RequireJWT))
            .route(web::post().to(delete_vault).wrap(middlewares::RequireJWT))
            .route(web::delete().to(delete_vault).wrap(middlewares::RequireJWT)),
    );
}
