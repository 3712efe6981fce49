pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::scheduled_classes::requests::{
    CreateScheduledClassRequest, UpdateScheduledClassRequest,
};
use crate::models::users::entities::CurrentUser;
use crate::storage::Storage;

pub struct ScheduledClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduledClassService {
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

    // 创建排课表单，展示所属班级
    pub async fn create_form(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        create::create_form(self, req, class_id).await
    }

    pub async fn create_scheduled_class(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        class_id: i64,
        data: CreateScheduledClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_scheduled_class(self, req, user, class_id, data).await
    }

    pub async fn list_scheduled_classes(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_scheduled_classes(self, req).await
    }

    pub async fn get_scheduled_class(
        &self,
        req: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_scheduled_class(self, req, id).await
    }

    pub async fn update_form(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        update::update_form(self, req, user, id).await
    }

    pub async fn update_scheduled_class(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
        data: UpdateScheduledClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_scheduled_class(self, req, user, id, data).await
    }

    pub async fn delete_confirm(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_confirm(self, req, user, id).await
    }

    pub async fn delete_scheduled_class(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_scheduled_class(self, req, user, id).await
    }
}
