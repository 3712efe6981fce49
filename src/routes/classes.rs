use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::CurrentUser;
use crate::services::ClassService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn create_form(_user: CurrentUser) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_form().await
}

pub async fn create_class(
    req: HttpRequest,
    user: CurrentUser,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, &user, class_data.into_inner())
        .await
}

pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn get_class(req: HttpRequest, pk: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, pk.0).await
}

pub async fn update_form(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.update_form(&req, &user, pk.0).await
}

pub async fn update_class(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, &user, pk.0, update_data.into_inner())
        .await
}

pub async fn delete_confirm(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_confirm(&req, &user, pk.0).await
}

pub async fn delete_class(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, &user, pk.0).await
}

// 配置路由，列表与详情公开，其余需要登录
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/class_create/")
            .route(web::get().to(create_form).wrap(middlewares::RequireJWT))
            .route(web::post().to(create_class).wrap(middlewares::RequireJWT)),
    )
    .service(web::resource("/all_classes").route(web::get().to(list_classes)))
    .service(web::resource("/class/{pk}/").route(web::get().to(get_class)))
    .service(
        web::resource("/class/{pk}/update/")
            .route(web::get().to(update_form).wrap(middlewares::RequireJWT))
            .route(web::post().to(update_class).wrap(middlewares::RequireJWT))
            .route(web::put().to(update_class).wrap(middlewares::RequireJWT)),
    )
    .service(
        web::resource("/class/{pk}/delete/")
            .route(web::get().to(delete_confirm).wrap(middlewares::RequireJWT))
            .route(web::post().to(delete_class).wrap(middlewares::RequireJWT))
            .route(web::delete().to(delete_class).wrap(middlewares::RequireJWT)),
    );
}
