use serde::{Deserialize, Serialize};

use super::CustomerId;

/// 顧客レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub city: String,
    /// 文字列のまま保存する（数値検証なし）
    pub age: String,
}

/// 顧客の書き込み内容（追加・全項目置換で共通）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFields {
    pub name: String,
    pub city: String,
    pub age: String,
}

impl Customer {
    pub fn from_fields(id: CustomerId, fields: CustomerFields) -> Self {
        Self {
            id,
            name: fields.name,
            city: fields.city,
            age: fields.age,
        }
    }

    pub fn replace(&mut self, fields: CustomerFields) {
        *self = Self::from_fields(self.id, fields);
    }
}
