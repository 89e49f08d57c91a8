use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{BookId, BookType, CustomerId, DomainError, LoanId, commands::AddLoan};

/// 貸出日・返却期限の入出力形式
pub const LOAN_DATE_FORMAT: &str = "%d/%m/%Y";

/// 貸出レコード
///
/// 作成専用。更新・削除・返却の状態は持たない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,

    // 他レコードへの論理参照（参照整合性は強制しない）
    pub customer_id: CustomerId,
    pub book_id: BookId,

    pub loan_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// 永続化前の貸出（IDはストアが採番する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoan {
    pub customer_id: CustomerId,
    pub book_id: BookId,
    pub loan_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl NewLoan {
    pub fn into_loan(self, id: LoanId) -> Loan {
        Loan {
            id,
            customer_id: self.customer_id,
            book_id: self.book_id,
            loan_date: self.loan_date,
            return_date: self.return_date,
        }
    }
}

/// `DD/MM/YYYY`形式の日付を解釈する
///
/// 日・月は1〜2桁、年はちょうど4桁の数字のみ受け付ける。
/// chronoの`%Y`は符号や桁数の違う年を、`%d`は先頭の空白を許すため、
/// 先に形を確認する。
pub fn parse_loan_date(text: &str) -> Result<NaiveDate, DomainError> {
    let invalid = || DomainError::InvalidDate(text.to_string());

    let parts: Vec<&str> = text.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let all_digits = |part: &str, widths: std::ops::RangeInclusive<usize>| {
        widths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !all_digits(*day, 1..=2) || !all_digits(*month, 1..=2) || !all_digits(*year, 4..=4) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, LOAN_DATE_FORMAT).map_err(|_| invalid())
}

/// 日付を`DD/MM/YYYY`形式で出力する
pub fn format_loan_date(date: NaiveDate) -> String {
    date.format(LOAN_DATE_FORMAT).to_string()
}

/// 純粋関数：返却期限を算出する
///
/// 返却期限 = 貸出日 + 書籍種別ごとの貸出期間
pub fn compute_return_date(
    loan_date: NaiveDate,
    book_type: BookType,
) -> Result<NaiveDate, DomainError> {
    let days = book_type
        .loan_period_days()
        .ok_or(DomainError::InvalidBookType(book_type.value()))?;

    loan_date
        .checked_add_days(Days::new(days as u64))
        .ok_or_else(|| DomainError::InvalidDate(format_loan_date(loan_date)))
}

/// 純粋関数：貸出を組み立てる
///
/// 参照先の存在確認と重複確認はアプリケーション層の責務。
/// ここでは書籍種別から返却期限を決めるだけ。
pub fn loan_book(cmd: &AddLoan, book_type: BookType) -> Result<NewLoan, DomainError> {
    let return_date = compute_return_date(cmd.loan_date, book_type)?;

    Ok(NewLoan {
        customer_id: cmd.customer_id,
        book_id: cmd.book_id,
        loan_date: cmd.loan_date,
        return_date,
    })
}
