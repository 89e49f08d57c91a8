use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use library_records::api::handlers::AppState;
use library_records::api::router::create_router;
use library_records::api::types::*;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

mod common;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// インメモリアダプターと実際のAPIルーターでアプリケーションを組み立てる
fn setup_e2e_app() -> axum::Router {
    let app_state = Arc::new(AppState {
        service_deps: common::in_memory_deps(),
    });

    create_router(app_state)
}

/// リクエストを送り、ステータスと本文を返す
async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn book_json(name: &str, book_type: i64) -> Value {
    json!({
        "name": name,
        "author": "Amos Oz",
        "year_published": "2002",
        "book_type": book_type,
    })
}

fn customer_json(name: &str) -> Value {
    json!({ "name": name, "city": "Arad", "age": "41" })
}

/// 顧客1名と書籍1冊を登録し、(顧客ID, 書籍ID)を返す
async fn seed_pair(app: &axum::Router, book_type: i64) -> (i64, i64) {
    let (status, _) = send(app, "POST", "/add-customer", Some(customer_json("Tamar"))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(app, "POST", "/add-book", Some(book_json("Tale", book_type))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app, "GET", "/show-customers", None).await;
    let customers: Vec<CustomerResponse> = serde_json::from_str(&body).unwrap();
    let (_, body) = send(app, "GET", "/show-books", None).await;
    let books: Vec<BookResponse> = serde_json::from_str(&body).unwrap();

    (customers.last().unwrap().id, books.last().unwrap().id)
}

// ============================================================================
// Books
// ============================================================================

#[tokio::test]
async fn test_e2e_book_flow() {
    let app = setup_e2e_app();

    // 追加は確認文言を返す
    let (status, body) = send(&app, "POST", "/add-book", Some(book_json("Judas", 1))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "A new record was created.");

    // 一覧
    let (status, body) = send(&app, "GET", "/show-books", None).await;
    assert_eq!(status, StatusCode::OK);
    let books: Vec<BookResponse> = serde_json::from_str(&body).unwrap();
    assert_eq!(books.len(), 1);
    let id = books[0].id;
    assert_eq!(
        books[0],
        BookResponse {
            id,
            name: "Judas".to_string(),
            author: "Amos Oz".to_string(),
            year_published: "2002".to_string(),
            book_type: 1,
        }
    );

    // 更新（book_typeも置き換わる）
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/update-book/{id}"),
        Some(book_json("Judas (revised)", 3)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "The record was updated.");

    let (status, body) = send(&app, "GET", &format!("/get-book/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let book: BookResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(book.name, "Judas (revised)");
    assert_eq!(book.book_type, 3);

    // 削除
    let (status, body) = send(&app, "DELETE", &format!("/delete-book/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Book deleted.");

    let (status, body) = send(&app, "GET", &format!("/get-book/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Book not found.");
}

#[tokio::test]
async fn test_e2e_book_not_found_paths() {
    let app = setup_e2e_app();

    let (status, body) = send(&app, "PUT", "/update-book/12", Some(book_json("X", 1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Book not found.");

    let (status, body) = send(&app, "DELETE", "/delete-book/12", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Book not found.");

    let (_, body) = send(&app, "GET", "/show-books", None).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_e2e_non_numeric_path_id_is_bad_request() {
    let app = setup_e2e_app();

    let (status, _) = send(&app, "GET", "/get-book/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "DELETE", "/delete-customer/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_e2e_malformed_book_body_is_bad_request() {
    let app = setup_e2e_app();

    let (status, _) = send(&app, "POST", "/add-book", Some(json!({ "name": "Only a name" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/show-books", None).await;
    assert_eq!(body, "[]");
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_e2e_customer_flow() {
    let app = setup_e2e_app();

    let (status, body) = send(&app, "POST", "/add-customer", Some(customer_json("Eli"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "A new record was created.");

    let (_, body) = send(&app, "GET", "/show-customers", None).await;
    let customers: Vec<CustomerResponse> = serde_json::from_str(&body).unwrap();
    let id = customers[0].id;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/update-customer/{id}"),
        Some(json!({ "name": "Eli", "city": "Eilat", "age": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "The record was updated.");

    let (status, body) = send(&app, "GET", &format!("/get-customer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value, json!({ "id": id, "name": "Eli", "city": "Eilat", "age": "42" }));

    let (status, body) = send(&app, "DELETE", &format!("/delete-customer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Customer deleted.");

    let (status, body) = send(&app, "GET", &format!("/get-customer/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Customer not found.");
}

// ============================================================================
// Loans
// ============================================================================

#[tokio::test]
async fn test_e2e_add_loan_computes_return_date_and_ignores_supplied_one() {
    let app = setup_e2e_app();
    let (cust_id, book_id) = seed_pair(&app, 2).await;

    let (status, body) = send(
        &app,
        "POST",
        "/add-loan",
        Some(json!({
            "cust_id": cust_id.to_string(),
            "book_id": book_id,
            "loan_date": "01/01/2024",
            "return_date": "01/02/2030",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "A new loan was created.");

    let (status, body) = send(&app, "GET", "/show-loans", None).await;
    assert_eq!(status, StatusCode::OK);
    let loans: Vec<LoanResponse> = serde_json::from_str(&body).unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].cust_id, cust_id);
    assert_eq!(loans[0].book_id, book_id);
    assert_eq!(loans[0].loan_date, "01/01/2024");
    assert_eq!(loans[0].return_date, "06/01/2024");
}

#[tokio::test]
async fn test_e2e_add_loan_duplicate_pair_is_conflict() {
    let app = setup_e2e_app();
    let (cust_id, book_id) = seed_pair(&app, 1).await;
    let request = json!({ "cust_id": cust_id, "book_id": book_id, "loan_date": "01/01/2024" });

    let (status, _) = send(&app, "POST", "/add-loan", Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/add-loan", Some(request)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "Loan already exists for the given customer and book.");

    let (_, body) = send(&app, "GET", "/show-loans", None).await;
    let loans: Vec<LoanResponse> = serde_json::from_str(&body).unwrap();
    assert_eq!(loans.len(), 1);
}

#[tokio::test]
async fn test_e2e_add_loan_rejections_create_nothing() {
    let app = setup_e2e_app();
    let (cust_id, book_id) = seed_pair(&app, 9).await;

    // 書籍種別が表にない
    let (status, body) = send(
        &app,
        "POST",
        "/add-loan",
        Some(json!({ "cust_id": cust_id, "book_id": book_id, "loan_date": "01/01/2024" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "Invalid book type.");

    // 存在しない参照
    let (status, body) = send(
        &app,
        "POST",
        "/add-loan",
        Some(json!({ "cust_id": 999, "book_id": book_id, "loan_date": "01/01/2024" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "Invalid customer or book.");

    // 日付の形式違い
    let (status, _) = send(
        &app,
        "POST",
        "/add-loan",
        Some(json!({ "cust_id": cust_id, "book_id": book_id, "loan_date": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 数値でないID
    let (status, _) = send(
        &app,
        "POST",
        "/add-loan",
        Some(json!({ "cust_id": "first", "book_id": book_id, "loan_date": "01/01/2024" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/show-loans", None).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_e2e_add_loan_with_short_or_signed_year_is_bad_request() {
    let app = setup_e2e_app();
    let (cust_id, book_id) = seed_pair(&app, 1).await;

    for loan_date in ["01/01/24", "01/01/+2024", " 01/01/2024"] {
        let (status, _) = send(
            &app,
            "POST",
            "/add-loan",
            Some(json!({ "cust_id": cust_id, "book_id": book_id, "loan_date": loan_date })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{loan_date:?}");
    }

    let (_, body) = send(&app, "GET", "/show-loans", None).await;
    assert_eq!(body, "[]");
}

// ============================================================================
// Cross-cutting
// ============================================================================

#[tokio::test]
async fn test_e2e_cors_allows_any_origin() {
    let app = setup_e2e_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/show-books")
                .header(header::ORIGIN, "http://frontend.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_e2e_health_check() {
    let app = setup_e2e_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
