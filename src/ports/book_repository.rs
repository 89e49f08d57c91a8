use crate::domain::{Book, BookFields, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// 書籍コレクションの永続化を抽象化する。
/// IDの採番はストアの責務。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 全書籍をストア順（ID昇順）で返す
    async fn list(&self) -> Result<Vec<Book>>;

    /// 書籍を追加し、採番済みのレコードを返す
    async fn insert(&self, fields: BookFields) -> Result<Book>;

    /// IDで書籍を取得する
    async fn get(&self, book_id: BookId) -> Result<Option<Book>>;

    /// 全項目を置き換える
    ///
    /// 存在しない場合は`None`を返し、ストアは変更しない。
    async fn update(&self, book_id: BookId, fields: BookFields) -> Result<Option<Book>>;

    /// 書籍を削除する
    ///
    /// 削除した場合は`true`。この書籍を参照する貸出には影響しない。
    async fn delete(&self, book_id: BookId) -> Result<bool>;
}
