use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use serial_test::serial;

use ems::database::models::{SettingPatch, UserInfo, UserRole};

mod common;

#[actix_web::test]
#[serial]
async fn test_admin_routes_forbidden_for_manager() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, token) = ctx.create_user(UserRole::Manager).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::get()
        .uri("/api/admin/users")
        .insert_header(common::bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
#[serial]
async fn test_list_users_hides_password_hash() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    ctx.create_user(UserRole::Employee).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::get()
        .uri("/api/admin/users")
        .insert_header(common::bearer(&token))
        .to_request();
    let users: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    // Assert
    assert_eq!(users.len(), 2);
    for user in &users {
        assert!(user.get("passwordHash").is_none());
        assert!(user.get("password_hash").is_none());
    }
}

#[actix_web::test]
#[serial]
async fn test_create_user_with_role_and_audit_entry() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::post()
        .uri("/api/admin/users/add")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "name": "New Manager",
            "email": "new.manager@example.com",
            "password": "secret123",
            "role": "manager",
            "department": "Sales"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: UserInfo = test::read_body_json(resp).await;
    assert_eq!(created.role, UserRole::Manager);
    assert_eq!(created.department.as_deref(), Some("Sales"));

    let action: String = sqlx::query_scalar("SELECT action FROM audit_logs")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();
    assert_eq!(action, "User Added");
}

#[actix_web::test]
#[serial]
async fn test_create_user_defaults_to_employee() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::post()
        .uri("/api/admin/users")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "name": "New Hire",
            "email": "hire@example.com",
            "password": "secret123"
        }))
        .to_request();
    let created: UserInfo = test::call_and_read_body_json(&app, req).await;

    // Assert
    assert_eq!(created.role, UserRole::Employee);
}

#[actix_web::test]
#[serial]
async fn test_update_user_keeps_absent_fields() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let (employee, _) = ctx.create_user(UserRole::Employee).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/users/{}", employee.id))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "role": "manager" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: UserInfo = test::read_body_json(resp).await;
    assert_eq!(updated.role, UserRole::Manager);
    assert_eq!(updated.name, employee.name);
    assert_eq!(updated.email, employee.email);
    assert_eq!(updated.department, employee.department);
}

#[actix_web::test]
#[serial]
async fn test_update_user_rejects_taken_email() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (admin, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let (employee, _) = ctx.create_user(UserRole::Employee).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/users/{}", employee.id))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "email": admin.email }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
#[serial]
async fn test_update_unknown_user_returns_not_found() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/users/{}", uuid::Uuid::new_v4()))
        .insert_header(common::bearer(&token))
        .set_json(json!({ "name": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
#[serial]
async fn test_delete_user() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let (employee, _) = ctx.create_user(UserRole::Employee).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{}", employee.id))
        .insert_header(common::bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User removed");
    assert_eq!(ctx.count_rows("users").await, 1);
}

#[actix_web::test]
#[serial]
async fn test_admin_cannot_delete_self() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (admin, token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let app = test::init_service(ctx.app()).await;

    // Act
    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/users/{}", admin.id))
        .insert_header(common::bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.count_rows("users").await, 1);
}

#[actix_web::test]
#[serial]
async fn test_dashboard_stats_alerts_and_logs() {
    // Arrange
    common::setup_test_env();
    let ctx = common::TestContext::new().await.unwrap();
    let (_, admin_token) = ctx.create_user(UserRole::Admin).await.unwrap();
    let (employee, employee_token) = ctx.create_user(UserRole::Employee).await.unwrap();
    ctx.create_user(UserRole::Employee).await.unwrap();
    ctx.update_settings(SettingPatch {
        maintenance_mode: Some(true),
        ..Default::default()
    })
    .await
    .unwrap();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/leaves/apply")
        .insert_header(common::bearer(&employee_token))
        .set_json(json!({
            "leaveType": "Casual Leave",
            "startDate": "2025-04-01",
            "endDate": "2025-04-02",
            "reason": "Family event"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/payroll/create")
        .insert_header(common::bearer(&admin_token))
        .set_json(json!({
            "userId": employee.id,
            "month": "2025-03",
            "basicSalary": 3000.0,
            "allowances": 500.0,
            "deductions": 200.0
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // Act
    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(common::bearer(&admin_token))
        .to_request();
    let dashboard: Value = test::call_and_read_body_json(&app, req).await;

    // Assert
    assert_eq!(dashboard["stats"]["totalEmployees"], 2);
    assert_eq!(dashboard["stats"]["adminsCount"], 1);
    assert_eq!(dashboard["stats"]["totalPayroll"], 3300.0);

    let alerts = dashboard["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].as_str().unwrap().starts_with("1 leave request"));

    let logs = dashboard["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["action"], "Payroll Run");
}
