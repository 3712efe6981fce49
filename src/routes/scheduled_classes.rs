use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::scheduled_classes::requests::{
    CreateScheduledClassRequest, UpdateScheduledClassRequest,
};
use crate::models::users::entities::CurrentUser;
use crate::services::ScheduledClassService;
use crate::utils::{SafeClassIdI64, SafeIDI64};

static SCHEDULED_CLASS_SERVICE: Lazy<ScheduledClassService> =
    Lazy::new(ScheduledClassService::new_lazy);

pub async fn create_form(
    req: HttpRequest,
    _user: CurrentUser,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE.create_form(&req, class_id.0).await
}

pub async fn create_scheduled_class(
    req: HttpRequest,
    user: CurrentUser,
    class_id: SafeClassIdI64,
    data: web::Json<CreateScheduledClassRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE
        .create_scheduled_class(&req, &user, class_id.0, data.into_inner())
        .await
}

pub async fn list_scheduled_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE.list_scheduled_classes(&req).await
}

pub async fn get_scheduled_class(req: HttpRequest, pk: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE.get_scheduled_class(&req, pk.0).await
}

pub async fn update_form(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE.update_form(&req, &user, pk.0).await
}

pub async fn update_scheduled_class(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
    data: web::Json<UpdateScheduledClassRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE
        .update_scheduled_class(&req, &user, pk.0, data.into_inner())
        .await
}

pub async fn delete_confirm(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE.delete_confirm(&req, &user, pk.0).await
}

pub async fn delete_scheduled_class(
    req: HttpRequest,
    user: CurrentUser,
    pk: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHEDULED_CLASS_SERVICE
        .delete_scheduled_class(&req, &user, pk.0)
        .await
}

pub fn configure_scheduled_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/scheduled_class_create/{class_id}/")
            .route(web::get().to(create_form).wrap(middlewares::RequireJWT))
            .route(
                web::post()
                    .to(create_scheduled_class)
                    .wrap(middlewares::RequireJWT),
            ),
    )
    .service(web::resource("/all_scheduled_classes").route(web::get().to(list_scheduled_classes)))
    .service(web::resource("/scheduled_class/{pk}/").route(web::get().to(get_scheduled_class)))
    .service(
        web::resource("/scheduled_class/{pk}/update/")
            .route(web::get().to(update_form).wrap(middlewares::RequireJWT))
            .route(
                web::post()
                    .to(update_scheduled_class)
                    .wrap(middlewares::RequireJWT),
            )
            .route(
                web::put()
                    .to(update_scheduled_class)
                    .wrap(middlewares::RequireJWT),
            ),
    )
    .service(
        web::resource("/scheduled_class/{pk}/delete/")
            .route(web::get().to(delete_confirm).wrap(middlewares::RequireJWT))
            .route(
                web::post()
                    .to(delete_scheduled_class)
                    .wrap(middlewares::RequireJWT),
            )
            .route(
                web::delete()
                    .to(delete_scheduled_class)
                    .wrap(middlewares::RequireJWT),
            ),
    );
}
