use serde::{Deserialize, Serialize};

use super::{BookId, BookType};

/// 書籍レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author: String,
    /// 数値としては検証しない
    pub year_published: String,
    pub book_type: BookType,
}

/// 書籍の書き込み内容（追加・全項目置換で共通）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub name: String,
    pub author: String,
    pub year_published: String,
    pub book_type: BookType,
}

impl Book {
    /// 採番済みIDと書き込み内容からレコードを組み立てる
    pub fn from_fields(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            name: fields.name,
            author: fields.author,
            year_published: fields.year_published,
            book_type: fields.book_type,
        }
    }

    /// IDを保ったまま全項目を置き換える
    pub fn replace(&mut self, fields: BookFields) {
        *self = Self::from_fields(self.id, fields);
    }
}
