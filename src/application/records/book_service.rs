use crate::domain::{Book, BookFields, BookId};

use super::dependencies::ServiceDependencies;
use super::errors::{RecordError, Result};

/// 全書籍を取得する
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.books.list().await.map_err(RecordError::Repository)
}

/// 書籍を追加する
///
/// 書籍種別はここでは検証しない（貸出作成時に検証される）。
pub async fn add_book(deps: &ServiceDependencies, fields: BookFields) -> Result<Book> {
    let book = deps
        .books
        .insert(fields)
        .await
        .map_err(RecordError::Repository)?;

    tracing::info!(book_id = book.id.value(), "Book created");
    Ok(book)
}

/// IDで書籍を取得する
///
/// # エラー
/// - BookNotFound: 該当IDの書籍がない
pub async fn get_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    deps.books
        .get(book_id)
        .await
        .map_err(RecordError::Repository)?
        .ok_or(RecordError::BookNotFound)
}

/// 書籍の全項目を置き換える
///
/// # エラー
/// - BookNotFound: 該当IDの書籍がない（ストアは変更されない）
pub async fn update_book(
    deps: &ServiceDependencies,
    book_id: BookId,
    fields: BookFields,
) -> Result<Book> {
    let book = deps
        .books
        .update(book_id, fields)
        .await
        .map_err(RecordError::Repository)?
        .ok_or(RecordError::BookNotFound)?;

    tracing::info!(book_id = book_id.value(), "Book updated");
    Ok(book)
}

/// 書籍を削除する
///
/// この書籍を参照する貸出は残る（連鎖削除なし）。
pub async fn delete_book(deps: &ServiceDependencies, book_id: BookId) -> Result<()> {
    let deleted = deps
        .books
        .delete(book_id)
        .await
        .map_err(RecordError::Repository)?;

    if !deleted {
        return Err(RecordError::BookNotFound);
    }

    tracing::info!(book_id = book_id.value(), "Book deleted");
    Ok(())
}
