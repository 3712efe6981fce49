//! 路由级集成测试，使用内存 SQLite

use std::sync::Arc;

use actix_web::http::{StatusCode, header::LOCATION};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use class_vault::config::DatabaseConfig;
use class_vault::models::classes::entities::Class;
use class_vault::models::classes::requests::CreateClassRequest;
use class_vault::models::scheduled_classes::requests::CreateScheduledClassRequest;
use class_vault::models::users::entities::CurrentUser;
use class_vault::models::vaults::requests::CreateVaultRequest;
use class_vault::routes;
use class_vault::storage::Storage;
use class_vault::storage::sea_orm_storage::SeaOrmStorage;
use class_vault::utils::jwt::JwtUtils;
use class_vault::utils::json_error_handler;

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .configure(routes::configure_routes),
        )
        .await
    };
}

async fn memory_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::connect(&DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    })
    .await
    .expect("in-memory storage");
    Arc::new(storage)
}

fn bearer(user: &CurrentUser) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(user).expect("token");
    ("Authorization", format!("Bearer {token}"))
}

fn teacher() -> CurrentUser {
    CurrentUser::new(10, "teacher", true, false)
}

fn student() -> CurrentUser {
    CurrentUser::new(20, "student", false, false)
}

async fn seed_class(storage: &Arc<dyn Storage>, name: &str) -> Class {
    storage
        .create_class(
            CreateClassRequest {
                class_name: name.to_string(),
                description: String::new(),
                expectations: String::new(),
            },
            10,
        )
        .await
        .expect("seed class")
}

#[actix_web::test]
async fn test_vault_only_listed_under_its_class() {
    let storage = memory_storage().await;
    let first = seed_class(&storage, "first").await;
    let second = seed_class(&storage, "second").await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/classes/vault_create/{}/", first.id))
        .insert_header(bearer(&teacher()))
        .set_json(json!({"saved_password": "pw-1", "website": "example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let body: Value = test::read_body_json(resp).await;
    let vault_id = body["data"]["record"]["id"].as_i64().expect("vault id");
    assert_eq!(
        body["data"]["redirect_to"],
        format!("/classes/vault/{vault_id}/")
    );

    let req = test::TestRequest::get()
        .uri(&format!("/classes/class/{}/", first.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let vaults = body["data"]["vaults"].as_array().expect("vaults");
    assert_eq!(vaults.len(), 1);
    assert_eq!(vaults[0]["website"], "example.com");

    let req = test::TestRequest::get()
        .uri(&format!("/classes/class/{}/", second.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"]["vaults"].as_array().expect("vaults").is_empty());
}

#[actix_web::test]
async fn test_student_cannot_modify_class() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Algebra").await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/classes/class/{}/update/", class.id))
        .insert_header(bearer(&student()))
        .set_json(json!({"class_name": "Hijacked"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("data").is_none());

    let req = test::TestRequest::post()
        .uri(&format!("/classes/class/{}/delete/", class.id))
        .insert_header(bearer(&student()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let unchanged = storage
        .get_class_by_id(class.id)
        .await
        .unwrap()
        .expect("class still exists");
    assert_eq!(unchanged.class_name, "Algebra");
}

#[actix_web::test]
async fn test_admin_updates_class_and_redirects_to_detail() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Algebra").await;
    let app = init_app!(storage);

    let admin = CurrentUser::new(30, "admin", false, true);
    let req = test::TestRequest::put()
        .uri(&format!("/classes/class/{}/update/", class.id))
        .insert_header(bearer(&admin))
        .set_json(json!({"description": "Linear equations"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        &format!("/classes/class/{}/", class.id)
    );

    let updated = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(updated.class_name, "Algebra");
    assert_eq!(updated.description, "Linear equations");
}

#[actix_web::test]
async fn test_missing_record_is_not_found_before_permission() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/classes/class/999/update/")
        .insert_header(bearer(&student()))
        .set_json(json!({"class_name": "x"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/classes/vault/999/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_write_requires_token() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/classes/class_create/")
        .set_json(json!({"class_name": "Anonymous"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/classes/class_create/")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .set_json(json!({"class_name": "Anonymous"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert!(storage.list_classes().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_create_class_stamps_user_and_lists_public() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    // 创建只要求登录
    let req = test::TestRequest::post()
        .uri("/classes/class_create/")
        .insert_header(bearer(&student()))
        .set_json(json!({"class_name": "Chemistry"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::post()
        .uri("/classes/class_create/")
        .insert_header(bearer(&teacher()))
        .set_json(json!({"class_name": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["class_name"].is_array());

    let req = test::TestRequest::get().uri("/classes/all_classes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["class_name"], "Chemistry");
    assert_eq!(items[0]["who_created"], 20);
    assert_eq!(items[0]["who_modified"], 20);
}

#[actix_web::test]
async fn test_teacher_toggles_scheduled_class_active() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Physics").await;
    let scheduled = storage
        .create_scheduled_class(class.id, CreateScheduledClassRequest::default(), 10)
        .await
        .unwrap();
    assert!(!scheduled.active);
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/classes/scheduled_class/{}/update/", scheduled.id))
        .insert_header(bearer(&teacher()))
        .set_json(json!({"active": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        &format!("/classes/scheduled_class/{}/update/", scheduled.id)
    );

    let updated = storage
        .get_scheduled_class_by_id(scheduled.id)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.active);
}

#[actix_web::test]
async fn test_scheduled_class_rejects_reversed_dates() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Biology").await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/classes/scheduled_class_create/{}/", class.id))
        .insert_header(bearer(&teacher()))
        .set_json(json!({"start_date": "2025-03-10", "end_date": "2025-03-01"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["end_date"].is_array());

    let req = test::TestRequest::post()
        .uri("/classes/scheduled_class_create/999/")
        .insert_header(bearer(&teacher()))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(storage.list_scheduled_classes().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_class_delete_cascades() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "History").await;
    let scheduled = storage
        .create_scheduled_class(class.id, CreateScheduledClassRequest::default(), 10)
        .await
        .unwrap();
    let vault = storage
        .create_vault(
            class.id,
            CreateVaultRequest {
                saved_password: "pw".to_string(),
                website: "history.example".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
    let app = init_app!(storage);

    let req = test::TestRequest::delete()
        .uri(&format!("/classes/class/{}/delete/", class.id))
        .insert_header(bearer(&teacher()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/classes/all_classes"
    );

    let req = test::TestRequest::get()
        .uri(&format!("/classes/vault/{}/", vault.id))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
    assert!(
        storage
            .get_scheduled_class_by_id(scheduled.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[actix_web::test]
async fn test_duplicate_website_is_field_error() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Networks").await;
    let app = init_app!(storage);

    let create = |password: &str| {
        test::TestRequest::post()
            .uri(&format!("/classes/vault_create/{}/", class.id))
            .insert_header(bearer(&teacher()))
            .set_json(json!({"saved_password": password, "website": "shared.example"}))
            .to_request()
    };

    let resp = test::call_service(&app, create("first")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = test::call_service(&app, create("second")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["website"].is_array());
    assert!(body["data"].get("saved_password").is_none());

    assert_eq!(storage.list_vaults().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_vault_update_keeps_own_values() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Security").await;
    let vault = storage
        .create_vault(
            class.id,
            CreateVaultRequest {
                saved_password: "pw".to_string(),
                website: "own.example".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
    let app = init_app!(storage);

    // 提交自身当前值不算冲突
    let req = test::TestRequest::post()
        .uri(&format!("/classes/vault/{}/update/", vault.id))
        .insert_header(bearer(&teacher()))
        .set_json(json!({"website": "own.example", "description": "notes"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::post()
        .uri(&format!("/classes/vault/{}/update/", vault.id))
        .insert_header(bearer(&teacher()))
        .set_json(json!({"class_id": 999}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["class_id"].is_array());

    let stored = storage.get_vault_by_id(vault.id).await.unwrap().unwrap();
    assert_eq!(stored.description.as_deref(), Some("notes"));
    assert_eq!(stored.class_id, class.id);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/classes/class_create/")
        .insert_header(bearer(&teacher()))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_missing_required_fields_are_field_errors() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Forms").await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri(&format!("/classes/vault_create/{}/", class.id))
        .insert_header(bearer(&teacher()))
        .set_json(json!({"saved_password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["website"][0], "This field is required.");
    assert!(body["data"].get("saved_password").is_none());

    let req = test::TestRequest::post()
        .uri("/classes/class_create/")
        .insert_header(bearer(&teacher()))
        .set_json(json!({"description": "no name"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["class_name"][0], "This field is required.");

    assert!(storage.list_vaults().await.unwrap().is_empty());
    assert_eq!(storage.list_classes().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_scheduled_class_delete_gate_and_redirect() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Geometry").await;
    let scheduled = storage
        .create_scheduled_class(class.id, CreateScheduledClassRequest::default(), 10)
        .await
        .unwrap();
    let app = init_app!(storage);
    let uri = format!("/classes/scheduled_class/{}/delete/", scheduled.id);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&student()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        storage.get_scheduled_class_by_id(scheduled.id).await.unwrap(),
        Some(scheduled.clone())
    );

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&teacher()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/classes/all_scheduled_classes"
    );
    assert!(
        storage
            .get_scheduled_class_by_id(scheduled.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(storage.get_class_by_id(class.id).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_vault_delete_gate_and_redirect() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Crypto").await;
    let vault = storage
        .create_vault(
            class.id,
            CreateVaultRequest {
                saved_password: "pw".to_string(),
                website: "crypto.example".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
    let app = init_app!(storage);
    let uri = format!("/classes/vault/{}/delete/", vault.id);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&student()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        storage.get_vault_by_id(vault.id).await.unwrap(),
        Some(vault.clone())
    );

    let admin = CurrentUser::new(30, "admin", false, true);
    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/classes/all_vaults");
    assert!(storage.get_vault_by_id(vault.id).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_null_clears_vault_description() {
    let storage = memory_storage().await;
    let class = seed_class(&storage, "Notes").await;
    let vault = storage
        .create_vault(
            class.id,
            CreateVaultRequest {
                saved_password: "pw".to_string(),
                website: "notes.example".to_string(),
                description: Some("old note".to_string()),
            },
        )
        .await
        .unwrap();
    let app = init_app!(storage);

    let req = test::TestRequest::put()
        .uri(&format!("/classes/vault/{}/update/", vault.id))
        .insert_header(bearer(&teacher()))
        .set_json(json!({"description": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = storage.get_vault_by_id(vault.id).await.unwrap().unwrap();
    assert_eq!(stored.description, None);
    assert_eq!(stored.website, "notes.example");
}
