use crate::domain::{Book, BookFields, BookId, BookType};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
fn map_row_to_book(row: &PgRow) -> Book {
    Book {
        id: BookId::from_i64(row.get("id")),
        name: row.get("name"),
        author: row.get("author"),
        year_published: row.get("year_published"),
        book_type: BookType::from_i32(row.get("book_type")),
    }
}

/// BookRepositoryのPostgreSQL実装
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQLコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn list(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, author, year_published, book_type
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_book).collect())
    }

    async fn insert(&self, fields: BookFields) -> Result<Book> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (name, author, year_published, book_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, author, year_published, book_type
            "#,
        )
        .bind(fields.name)
        .bind(fields.author)
        .bind(fields.year_published)
        .bind(fields.book_type.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_book(&row))
    }

    async fn get(&self, book_id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, author, year_published, book_type
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    /// 1文のUPDATEで全項目を置き換える。該当行がなければ`None`
    async fn update(&self, book_id: BookId, fields: BookFields) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            UPDATE books
            SET name = $2,
                author = $3,
                year_published = $4,
                book_type = $5
            WHERE id = $1
            RETURNING id, name, author, year_published, book_type
            "#,
        )
        .bind(book_id.value())
        .bind(fields.name)
        .bind(fields.author)
        .bind(fields.year_published)
        .bind(fields.book_type.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn delete(&self, book_id: BookId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
