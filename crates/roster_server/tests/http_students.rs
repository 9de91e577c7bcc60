use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use roster_core::db::open_db_in_memory;
use roster_server::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    let conn = open_db_in_memory().unwrap();
    build_router(AppState::new(conn))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

fn post_student(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/rest/v1/students")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn seed_student(app: &Router, name: &str, age: i64) -> i64 {
    let body = format!(
        r#"{{"name":"{name}","lastname":"{name}_last","grade":"freshman","age":{age},"isFullTime":false,"updatedOn":"2018-04-29"}}"#
    );
    let (status, saved) = send(app, post_student(&body)).await;
    assert_eq!(status, StatusCode::OK);
    saved["id"].as_i64().expect("saved student must carry an id")
}

#[tokio::test]
async fn post_then_ignore_case_lookup_round_trips() {
    let app = test_app();

    let (status, saved) = send(
        &app,
        post_student(
            r#"{"name":"ilker_0","lastname":"kiris_0","grade":"freshman","age":200,"isFullTime":false,"updatedOn":"2018-04-29"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let id = saved["id"].as_i64().expect("response must carry a generated id");
    assert_eq!(saved["name"], "ilker_0");
    assert_eq!(saved["lastname"], "kiris_0");
    assert_eq!(saved["grade"], "freshman");
    assert_eq!(saved["age"], 200);
    assert_eq!(saved["isFullTime"], false);
    assert_eq!(saved["updatedOn"], "2018-04-29");

    let (status, found) = send(
        &app,
        get("/rest/v1/students/findByNameIgnoreCaseQuery/ILKER_0"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"].as_i64(), Some(id));
    assert_eq!(found, saved);
}

#[tokio::test]
async fn ignore_case_lookup_miss_returns_404_with_error_body() {
    let app = test_app();

    let (status, body) = send(
        &app,
        get("/rest/v1/students/findByNameIgnoreCaseQuery/nobody"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn paginated_list_defaults_to_page_0_size_5() {
    let app = test_app();
    for index in 0..7 {
        seed_student(&app, &format!("s{index}"), index).await;
    }

    let (status, page) = send(&app, get("/rest/v1/students")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 5);
    assert_eq!(page["totalElements"], 7);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["content"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn pagination_params_partition_the_set() {
    let app = test_app();
    for index in 0..7 {
        seed_student(&app, &format!("s{index}"), index).await;
    }

    let mut seen = Vec::new();
    for page_index in 0..3 {
        let (status, page) = send(
            &app,
            get(&format!(
                "/rest/v1/students?page={page_index}&rowsPerPage=3"
            )),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let content = page["content"].as_array().unwrap().clone();
        assert!(content.len() <= 3);
        for row in content {
            seen.push(row["id"].as_i64().unwrap());
        }
    }

    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 7, "pages must neither skip nor duplicate rows");
}

#[tokio::test]
async fn full_list_returns_every_row() {
    let app = test_app();
    for index in 0..7 {
        seed_student(&app, &format!("s{index}"), index).await;
    }

    let (status, all) = send(&app, get("/rest/v1/students/all")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn delete_returns_204_and_is_idempotent() {
    let app = test_app();
    let id = seed_student(&app, "target", 20).await;

    let delete_request = || {
        Request::builder()
            .method("DELETE")
            .uri(format!("/rest/v1/students/{id}"))
            .body(Body::empty())
            .unwrap()
    };

    let (status, _) = send(&app, delete_request()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Re-deleting the removed id must not differ in kind.
    let (status, _) = send(&app, delete_request()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        get("/rest/v1/students/findByNameIgnoreCaseQuery/target"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_with_existing_id_updates_in_place() {
    let app = test_app();
    let id = seed_student(&app, "before", 20).await;

    let (status, updated) = send(
        &app,
        post_student(&format!(
            r#"{{"id":{id},"name":"after","lastname":"x","grade":"senior","age":21,"isFullTime":true}}"#
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["name"], "after");
    assert_eq!(updated["isFullTime"], true);
    // Full replace: the omitted date comes back null, not the old value.
    assert_eq!(updated["updatedOn"], Value::Null);

    let (_, all) = send(&app, get("/rest/v1/students/all")).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn echo_message_decorates_input_with_fixed_prefix() {
    let app = test_app();

    let (status, body) = send(&app, get("/rest/v1/students/echoMessage?msg=Hi")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("echoMessage echoed: Hi".to_string()));

    let (status, body) = send(&app, get("/rest/v1/students/echoMessage")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Value::String("echoMessage echoed: Hello ilker".to_string())
    );
}
