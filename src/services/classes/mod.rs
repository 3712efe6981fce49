pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::CurrentUser;
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 创建班级表单
    pub async fn create_form(&self) -> ActixResult<HttpResponse> {
        create::create_form().await
    }

    pub async fn create_class(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, req, user, class_data).await
    }

    // 获取班级列表
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_classes(self, request).await
    }

    // 根据班级 ID 获取班级详情及其密码库记录
    pub async fn get_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        get::get_class(self, req, class_id).await
    }

    // 更新班级表单
    pub async fn update_form(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        update::update_form(self, req, user, class_id).await
    }

    // 更新班级信息
    pub async fn update_class(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, req, user, class_id, update_data).await
    }

    // 删除确认
    pub async fn delete_confirm(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_confirm(self, req, user, class_id).await
    }

    // 根据班级 ID 删除班级
    pub async fn delete_class(
        &self,
        req: &HttpRequest,
        user: &CurrentUser,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, req, user, class_id).await
    }
}
