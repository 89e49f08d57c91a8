use crate::application::records::{self, ServiceDependencies};
use crate::domain::{BookId, CustomerId, CustomerFields};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{
        AddLoanRequest, BookRequest, BookResponse, CustomerRequest, CustomerResponse,
        LoanResponse,
    },
};

/// 作成成功時の確認文言
pub const RECORD_CREATED: &str = "A new record was created.";
/// 更新成功時の確認文言
pub const RECORD_UPDATED: &str = "The record was updated.";
pub const BOOK_DELETED: &str = "Book deleted.";
pub const CUSTOMER_DELETED: &str = "Customer deleted.";
pub const LOAN_CREATED: &str = "A new loan was created.";

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Books
// ============================================================================

/// GET /show-books - 全書籍の一覧
pub async fn show_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = records::list_books(&state.service_deps).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// POST /add-book - 書籍を追加
///
/// 作成したレコードではなく確認文言を返す。
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(req) = payload?;
    records::add_book(&state.service_deps, req.into_fields()?).await?;
    Ok(RECORD_CREATED)
}

/// DELETE /delete-book/:id - 書籍を削除
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(book_id) = book_id?;
    records::delete_book(&state.service_deps, BookId::from_i64(book_id)).await?;
    Ok(BOOK_DELETED)
}

/// GET /get-book/:id - 書籍をIDで取得
///
/// 見つからない場合は404を返す。
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Path(book_id) = book_id?;
    let book = records::get_book(&state.service_deps, BookId::from_i64(book_id)).await?;
    Ok(Json(BookResponse::from(book)))
}

/// PUT /update-book/:id - 書籍の全項目を置き換え
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Path(book_id) = book_id?;
    let Json(req) = payload?;
    records::update_book(
        &state.service_deps,
        BookId::from_i64(book_id),
        req.into_fields()?,
    )
    .await?;
    Ok(RECORD_UPDATED)
}

// ============================================================================
// Customers
// ============================================================================

/// GET /show-customers - 全顧客の一覧
pub async fn show_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = records::list_customers(&state.service_deps).await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// POST /add-customer - 顧客を追加
pub async fn add_customer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(req) = payload?;
    records::add_customer(&state.service_deps, CustomerFields::from(req)).await?;
    Ok(RECORD_CREATED)
}

/// DELETE /delete-customer/:id - 顧客を削除
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    customer_id: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(customer_id) = customer_id?;
    records::delete_customer(&state.service_deps, CustomerId::from_i64(customer_id)).await?;
    Ok(CUSTOMER_DELETED)
}

/// GET /get-customer/:id - 顧客をIDで取得
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    customer_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(customer_id) = customer_id?;
    let customer =
        records::get_customer(&state.service_deps, CustomerId::from_i64(customer_id)).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// PUT /update-customer/:id - 顧客の全項目を置き換え
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    customer_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Path(customer_id) = customer_id?;
    let Json(req) = payload?;
    records::update_customer(
        &state.service_deps,
        CustomerId::from_i64(customer_id),
        CustomerFields::from(req),
    )
    .await?;
    Ok(RECORD_UPDATED)
}

// ============================================================================
// Loans
// ============================================================================

/// GET /show-loans - 全貸出の一覧（日付は`DD/MM/YYYY`）
pub async fn show_loans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LoanResponse>>, ApiError> {
    let loans = records::list_loans(&state.service_deps).await?;
    Ok(Json(loans.into_iter().map(LoanResponse::from).collect()))
}

/// POST /add-loan - 貸出を作成
///
/// 強制されるビジネスルール:
/// - 同じ(顧客, 書籍)の貸出が存在しないこと
/// - 顧客と書籍が存在すること
/// - 書籍種別が1, 2, 3のいずれかであること
///
/// 返却期限は書籍種別から算出され、リクエストの`return_date`は無視される。
pub async fn add_loan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddLoanRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(req) = payload?;
    let cmd = req.to_command()?;
    records::add_loan(&state.service_deps, cmd).await?;
    Ok(LOAN_CREATED)
}
