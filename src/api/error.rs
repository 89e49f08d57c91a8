use crate::application::records::RecordError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// 内部エラー時にクライアントへ返す文言
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、プレーンテキストのHTTPレスポンスへ対応付ける。
#[derive(Debug)]
pub struct ApiError(RecordError);

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(RecordError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(RecordError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            // 404 Not Found - リクエストされたレコードが存在しない
            RecordError::BookNotFound | RecordError::CustomerNotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request - 入力形式の誤り
            RecordError::Validation(_) => StatusCode::BAD_REQUEST,

            // 409 Conflict - 同じ(顧客, 書籍)の貸出が既にある
            RecordError::LoanAlreadyExists => StatusCode::CONFLICT,

            // 422 Unprocessable Entity - ビジネスルール違反
            RecordError::InvalidReference | RecordError::InvalidBookType(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // 500 Internal Server Error - システム障害
            // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            RecordError::Repository(ref e) => {
                tracing::error!("Repository error: {}", e);
                return (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE).into_response();
            }
        };

        (status, self.0.to_string()).into_response()
    }
}
