use crate::domain::{BookId, CustomerId, Loan, LoanId, NewLoan};
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをLoanに変換する
fn map_row_to_loan(row: &PgRow) -> Loan {
    Loan {
        id: LoanId::from_i64(row.get("id")),
        customer_id: CustomerId::from_i64(row.get("customer_id")),
        book_id: BookId::from_i64(row.get("book_id")),
        loan_date: row.get("loan_date"),
        return_date: row.get("return_date"),
    }
}

/// LoanRepositoryのPostgreSQL実装
///
/// (customer_id, book_id)の一意性は`loans_customer_book_unique`制約で強制する。
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn list(&self) -> Result<Vec<Loan>> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, book_id, loan_date, return_date
            FROM loans
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_loan).collect())
    }

    async fn exists_for(&self, customer_id: CustomerId, book_id: BookId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM loans WHERE customer_id = $1 AND book_id = $2)",
        )
        .bind(customer_id.value())
        .bind(book_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// 貸出を保存（重複時は何もしない）
    ///
    /// ON CONFLICT DO NOTHINGで確認と挿入を1文にまとめる。
    /// 行が返らなければ組は既に使われている。
    async fn insert(&self, new_loan: NewLoan) -> Result<Option<Loan>> {
        let row = sqlx::query(
            r#"
            INSERT INTO loans (customer_id, book_id, loan_date, return_date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (customer_id, book_id) DO NOTHING
            RETURNING id, customer_id, book_id, loan_date, return_date
            "#,
        )
        .bind(new_loan.customer_id.value())
        .bind(new_loan.book_id.value())
        .bind(new_loan.loan_date)
        .bind(new_loan.return_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_loan))
    }
}
