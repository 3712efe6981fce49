pub mod classes;

pub mod scheduled_classes;

pub mod vaults;

use actix_web::web;

use crate::services::locations::MOUNT;

pub use classes::configure_classes_routes;
pub use scheduled_classes::configure_scheduled_classes_routes;
pub use vaults::configure_vaults_routes;

// 三类实体共用 /classes 前缀，必须注册在同一个 scope 内
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(MOUNT)
            .configure(configure_classes_routes)
            .configure(configure_scheduled_classes_routes)
            .configure(configure_vaults_routes),
    );
}
