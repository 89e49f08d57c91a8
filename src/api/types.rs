use serde::{Deserialize, Deserializer, Serialize};

use crate::application::records::RecordError;
use crate::domain::{
    Book, BookFields, BookId, BookType, Customer, CustomerFields, CustomerId, Loan,
    commands::AddLoan, format_loan_date, parse_loan_date,
};

// ============================================================================
// 入力の柔軟な型
// ============================================================================

/// 整数として受け付ける入力（JSON数値または数字の文字列）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntInput {
    Number(i64),
    Text(String),
}

impl IntInput {
    /// 整数として解釈する。`field`はエラーメッセージ用
    pub fn parse(&self, field: &str) -> Result<i64, RecordError> {
        match self {
            IntInput::Number(n) => Ok(*n),
            IntInput::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| RecordError::Validation(format!("{field} must be an integer"))),
        }
    }
}

/// 文字列として保存する項目は数値で送られても受け付ける
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

// ============================================================================
// リクエスト
// ============================================================================

/// 書籍の追加・更新リクエスト（POST /add-book, PUT /update-book/:id）
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub name: String,
    pub author: String,
    #[serde(deserialize_with = "text_or_number")]
    pub year_published: String,
    pub book_type: IntInput,
}

impl BookRequest {
    pub fn into_fields(self) -> Result<BookFields, RecordError> {
        let book_type = i32::try_from(self.book_type.parse("book_type")?)
            .map_err(|_| RecordError::Validation("book_type is out of range".to_string()))?;

        Ok(BookFields {
            name: self.name,
            author: self.author,
            year_published: self.year_published,
            book_type: BookType::from_i32(book_type),
        })
    }
}

/// 顧客の追加・更新リクエスト（POST /add-customer, PUT /update-customer/:id）
#[derive(Debug, Deserialize)]
pub struct CustomerRequest {
    pub name: String,
    pub city: String,
    #[serde(deserialize_with = "text_or_number")]
    pub age: String,
}

impl From<CustomerRequest> for CustomerFields {
    fn from(req: CustomerRequest) -> Self {
        Self {
            name: req.name,
            city: req.city,
            age: req.age,
        }
    }
}

/// 貸出作成リクエスト（POST /add-loan）
///
/// `return_date`は受け付けるが使わない。返却期限は常に算出される。
#[derive(Debug, Deserialize)]
pub struct AddLoanRequest {
    pub cust_id: IntInput,
    pub book_id: IntInput,
    pub loan_date: String,
    #[serde(default)]
    pub return_date: Option<serde_json::Value>,
}

impl AddLoanRequest {
    /// リクエストをコマンドに変換する
    ///
    /// # エラー
    /// - Validation: IDが整数でない、日付が`DD/MM/YYYY`でない
    pub fn to_command(&self) -> Result<AddLoan, RecordError> {
        Ok(AddLoan {
            customer_id: CustomerId::from_i64(self.cust_id.parse("cust_id")?),
            book_id: BookId::from_i64(self.book_id.parse("book_id")?),
            loan_date: parse_loan_date(&self.loan_date)?,
        })
    }
}

// ============================================================================
// レスポンス
// ============================================================================

/// 書籍レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub year_published: String,
    pub book_type: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            name: book.name,
            author: book.author,
            year_published: book.year_published,
            book_type: book.book_type.value(),
        }
    }
}

/// 顧客レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub age: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.value(),
            name: customer.name,
            city: customer.city,
            age: customer.age,
        }
    }
}

/// 貸出レスポンス（日付は`DD/MM/YYYY`）
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoanResponse {
    pub id: i64,
    pub cust_id: i64,
    pub book_id: i64,
    pub loan_date: String,
    pub return_date: String,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            id: loan.id.value(),
            cust_id: loan.customer_id.value(),
            book_id: loan.book_id.value(),
            loan_date: format_loan_date(loan.loan_date),
            return_date: format_loan_date(loan.return_date),
        }
    }
}
