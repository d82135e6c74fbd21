
use actix_web::{
    http::{header::ContentType, StatusCode},
    test,
};
use serde_json::{json, Value};
use test_utils::*;

fn create_body() -> Value {
    json!({
        "title": "X",
        "description": "Y",
        "image_path": "i.png",
        "project_type": "T",
        "year": 2025,
        "status": "Done",
        "tech_stack": ["Go", "SQL"]
    })
}

#[actix_rt::test]
async fn list_returns_seeded_projects_featured_first() {
    let app = TestApp::spawn(true).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let projects: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0]["title"], "Campus BookShare");
    assert_eq!(projects[0]["featured"], true);
    assert_eq!(projects[0]["tech_stack"], json!(["Flask", "SQLite", "JavaScript", "CSS3", "HTML5"]));
    assert_eq!(projects[1]["featured"], false);
}

#[actix_rt::test]
async fn create_then_fetch_round_trips() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(create_body())
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["message"], "Project created successfully");
    let id = created["id"].as_i64().expect("id should be an integer");

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{}", id))
        .to_request();
    let project: Value = test::call_and_read_body_json(&service, req).await;

    assert_eq!(project["id"], id);
    assert_eq!(project["title"], "X");
    assert_eq!(project["year"], 2025);
    assert_eq!(project["tech_stack"], json!(["Go", "SQL"]));
    assert_eq!(project["github_url"], Value::Null);
    assert_eq!(project["featured"], false);
    assert!(project["created_at"].is_string());
}

#[actix_rt::test]
async fn create_accepts_pre_joined_tech_stack() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let mut body = create_body();
    body["tech_stack"] = json!("Rust,Actix");
    body["featured"] = json!(true);

    let req = test::TestRequest::post().uri("/api/projects").set_json(body).to_request();
    let created: Value = test::call_and_read_body_json(&service, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{}", created["id"]))
        .to_request();
    let project: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(project["tech_stack"], json!(["Rust", "Actix"]));
    assert_eq!(project["featured"], true);
}

#[actix_rt::test]
async fn create_with_missing_field_is_bad_request() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let mut body = create_body();
    body.as_object_mut().unwrap().remove("description");

    let req = test::TestRequest::post().uri("/api/projects").set_json(body).to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error, json!({"error": "Missing required field: description"}));
}

#[actix_rt::test]
async fn malformed_body_is_a_generic_server_error() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header(ContentType::json())
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error, json!({"error": "Failed to create project"}));
}

#[actix_rt::test]
async fn unknown_project_is_not_found() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::get().uri("/api/projects/999").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error, json!({"error": "Project not found"}));

    let req = test::TestRequest::get().uri("/api/projects/not-a-number").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error, json!({"error": "Project not found"}));
}

#[actix_rt::test]
async fn non_integer_id_is_json_not_found_for_every_method() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let requests = [
        test::TestRequest::put()
            .uri("/api/projects/abc")
            .set_json(json!({"title": "Ghost"}))
            .to_request(),
        test::TestRequest::delete().uri("/api/projects/1.5").to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error, json!({"error": "Project not found"}));
    }
}

#[actix_rt::test]
async fn create_with_null_featured_defaults_to_not_featured() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let mut body = create_body();
    body["featured"] = Value::Null;

    let req = test::TestRequest::post().uri("/api/projects").set_json(body).to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{}", created["id"]))
        .to_request();
    let project: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(project["featured"], false);
}

#[actix_rt::test]
async fn update_applies_partial_changes() {
    let app = TestApp::spawn(false).await;
    let id = app.insert(&new_project("Before", 2022, false)).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{}", id))
        .set_json(json!({"title": "After", "live_url": "https://example.com"}))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Project updated successfully"}));

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{}", id))
        .to_request();
    let project: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(project["title"], "After");
    assert_eq!(project["live_url"], "https://example.com");
    assert_eq!(project["year"], 2022);
}

#[actix_rt::test]
async fn update_unknown_or_empty_is_not_found() {
    let app = TestApp::spawn(false).await;
    let id = app.insert(&new_project("Stable", 2022, false)).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::put()
        .uri("/api/projects/12345")
        .set_json(json!({"title": "Ghost"}))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{}", id))
        .set_json(json!({"colour": "blue"}))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn update_with_null_required_field_is_bad_request() {
    let app = TestApp::spawn(false).await;
    let id = app.insert(&new_project("Stable", 2022, false)).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{}", id))
        .set_json(json!({"title": null}))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn delete_twice_returns_not_found_the_second_time() {
    let app = TestApp::spawn(false).await;
    let id = app.insert(&new_project("Doomed", 2024, false)).await;
    let service = init_app(app.state.clone()).await;
    let uri = format!("/api/projects/{}", id);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Project deleted successfully"}));

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn featured_search_and_count_endpoints() {
    let app = TestApp::spawn(true).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::get().uri("/api/projects/featured").to_request();
    let featured: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["title"], "Campus BookShare");

    let req = test::TestRequest::get()
        .uri("/api/projects/search?q=accessibility")
        .to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["title"], "Personal Website v1");

    let req = test::TestRequest::get().uri("/api/projects/count").to_request();
    let count: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(count, json!({"count": 3}));
}

#[actix_rt::test]
async fn pages_are_served_from_the_site_root() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, INDEX_HTML.as_bytes());

    let req = test::TestRequest::get().uri("/about").to_request();
    let body = test::call_and_read_body(&service, req).await;
    assert_eq!(body, ABOUT_HTML.as_bytes());

    let req = test::TestRequest::get().uri("/blog.html").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn missing_pages_are_not_found() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    for uri in ["/contact", "/thankyou", "/missing.html", "/no/such/route"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[actix_rt::test]
async fn assets_and_resume_are_served() {
    let app = TestApp::spawn(false).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::get().uri("/css/main.css").to_request();
    let body = test::call_and_read_body(&service, req).await;
    assert_eq!(body, MAIN_CSS.as_bytes());

    let req = test::TestRequest::get().uri("/images/thumbs/me.png").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The configured name is absent, so the fallback file is sent.
    let req = test::TestRequest::get().uri("/resume.pdf").to_request();
    let body = test::call_and_read_body(&service, req).await;
    assert_eq!(body, &b"%PDF-1.4 fallback"[..]);

    let req = test::TestRequest::get().uri("/resume_file/resume.pdf").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/css/missing.css").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn health_reports_database_status() {
    let app = TestApp::spawn(true).await;
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let health: Value = test::call_and_read_body_json(&service, req).await;

    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "OK");
    assert_eq!(health["project_count"], 3);
}

#[actix_rt::test]
async fn health_reports_missing_database_without_recreating_it() {
    let app = TestApp::spawn(true).await;
    let db_path = app.config.database_path();
    std::fs::remove_file(&db_path).unwrap();
    let service = init_app(app.state.clone()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let health: Value = test::call_and_read_body_json(&service, req).await;

    assert_eq!(health["database"], "Unavailable");
    assert_eq!(health["project_count"], Value::Null);
    assert!(!db_path.exists());
}
