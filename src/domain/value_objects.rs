use serde::{Deserialize, Serialize};

/// 書籍ID - ストアが採番する整数ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 顧客ID - ストアが採番する整数ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 貸出ID - ストアが採番する整数ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(i64);

impl LoanId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 書籍種別
///
/// 想定値は 1, 2, 3 だが、書き込み時には検証しない。
/// 範囲外の値は貸出作成時に初めて拒否される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookType(i32);

impl BookType {
    pub fn from_i32(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// 貸出期間表を引く
    ///
    /// - 1 → 10日
    /// - 2 → 5日
    /// - 3 → 2日
    ///
    /// それ以外は`None`
    pub fn loan_period_days(&self) -> Option<i64> {
        match self.0 {
            1 => Some(10),
            2 => Some(5),
            3 => Some(2),
            _ => None,
        }
    }
}
