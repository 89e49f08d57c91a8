use thiserror::Error;

/// ドメイン層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// `DD/MM/YYYY`として解釈できない日付
    #[error("Invalid date '{0}', expected DD/MM/YYYY")]
    InvalidDate(String),

    /// 貸出期間表にない書籍種別
    #[error("Invalid book type: {0}")]
    InvalidBookType(i32),
}
