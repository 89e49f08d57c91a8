use crate::domain::{BookId, CustomerId, Loan, NewLoan};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出リポジトリポート
///
/// 貸出は作成専用。更新・削除の操作は持たない。
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// 全貸出をストア順（ID昇順）で返す
    async fn list(&self) -> Result<Vec<Loan>>;

    /// (顧客, 書籍)の組に対する貸出が既にあるか
    async fn exists_for(&self, customer_id: CustomerId, book_id: BookId) -> Result<bool>;

    /// 貸出を保存する
    ///
    /// (顧客, 書籍)の一意性確認と挿入は不可分に行われなければならない。
    /// 組が既に使われている場合は`None`を返し、何も保存しない。
    async fn insert(&self, new_loan: NewLoan) -> Result<Option<Loan>>;
}
