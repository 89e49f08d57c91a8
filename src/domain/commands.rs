use chrono::NaiveDate;

use super::{BookId, CustomerId};

/// コマンド：貸出を作成する
///
/// 返却期限は含まない。常に書籍種別から算出される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLoan {
    pub customer_id: CustomerId,
    pub book_id: BookId,
    pub loan_date: NaiveDate,
}
