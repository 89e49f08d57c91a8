use thiserror::Error;

use crate::domain::DomainError;

/// レコードサービスのエラー
#[derive(Debug, Error)]
pub enum RecordError {
    /// 書籍が見つからない
    #[error("Book not found.")]
    BookNotFound,

    /// 顧客が見つからない
    #[error("Customer not found.")]
    CustomerNotFound,

    /// 入力値が不正（日付形式、数値でないIDなど）
    #[error("Invalid input: {0}")]
    Validation(String),

    /// 同じ(顧客, 書籍)の貸出が既に存在する
    #[error("Loan already exists for the given customer and book.")]
    LoanAlreadyExists,

    /// 顧客または書籍が存在しない
    #[error("Invalid customer or book.")]
    InvalidReference,

    /// 貸出期間表にない書籍種別
    #[error("Invalid book type.")]
    InvalidBookType(i32),

    /// リポジトリのエラー
    #[error("Repository error")]
    Repository(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<DomainError> for RecordError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidDate(_) => RecordError::Validation(err.to_string()),
            DomainError::InvalidBookType(value) => RecordError::InvalidBookType(value),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, RecordError>;
