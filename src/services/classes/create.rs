use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::classes::responses::ClassFormContext;
use crate::models::users::entities::CurrentUser;
use crate::models::{ApiResponse, ErrorCode, FieldErrors};
use crate::services::{form_errors, locations, see_other, storage_failure};
use crate::utils::validate::{NAME_MAX_LENGTH, TEXT_MAX_LENGTH, check_max_length, require_text};

const CLASS_FIELDS: &[&str] = &["class_name", "description", "expectations"];

pub async fn create_form() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassFormContext {
            fields: CLASS_FIELDS,
        },
        "Class form",
    )))
}

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    user: &CurrentUser,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_create(&class_data) {
        return Ok(form_errors(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed,
            errors,
            "Class form is invalid",
        ));
    }

    let storage = service.get_storage(request);

    match storage.create_class(class_data, user.id).await {
        Ok(class) => {
            info!("Class {} ({}) created by {}", class.id, class.class_name, user.id);
            Ok(see_other(
                locations::class_detail(class.id),
                Some(class),
                "Class created successfully",
            ))
        }
        Err(e) => Ok(storage_failure(
            ErrorCode::ClassCreationFailed,
            "Failed to create class",
            &e,
        )),
    }
}

fn validate_create(class_data: &CreateClassRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "class_name", &class_data.class_name, NAME_MAX_LENGTH);
    check_max_length(&mut errors, "description", &class_data.description, TEXT_MAX_LENGTH);
    check_max_length(&mut errors, "expectations", &class_data.expectations, TEXT_MAX_LENGTH);
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_create() {
        let ok = CreateClassRequest {
            class_name: "Rust 101".to_string(),
            description: String::new(),
            expectations: String::new(),
        };
        assert!(validate_create(&ok).is_ok());

        let bad = CreateClassRequest {
            class_name: " ".to_string(),
            description: "x".repeat(TEXT_MAX_LENGTH + 1),
            expectations: String::new(),
        };
        let errors = validate_create(&bad).unwrap_err();
        assert!(errors.contains("class_name"));
        assert!(errors.contains("description"));
        assert!(!errors.contains("expectations"));
    }
}
