use crate::domain::{BookId, CustomerId, Loan, LoanId, NewLoan};
use crate::ports::loan_repository::{LoanRepository as LoanRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    last_id: i64,
    loans: Vec<Loan>,
}

impl State {
    fn has_pair(&self, customer_id: CustomerId, book_id: BookId) -> bool {
        self.loans
            .iter()
            .any(|loan| loan.customer_id == customer_id && loan.book_id == book_id)
    }
}

/// LoanRepositoryのインメモリ実装
///
/// (顧客, 書籍)の確認と追加を同じロックの中で行うため、
/// 同じ組への同時挿入でも保存される貸出は1件だけ。
#[derive(Default)]
pub struct LoanRepository {
    state: Mutex<State>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoanRepositoryTrait for LoanRepository {
    async fn list(&self) -> Result<Vec<Loan>> {
        let state = self.state.lock().map_err(|_| "loan store lock poisoned")?;
        Ok(state.loans.clone())
    }

    async fn exists_for(&self, customer_id: CustomerId, book_id: BookId) -> Result<bool> {
        let state = self.state.lock().map_err(|_| "loan store lock poisoned")?;
        Ok(state.has_pair(customer_id, book_id))
    }

    async fn insert(&self, new_loan: NewLoan) -> Result<Option<Loan>> {
        let mut state = self.state.lock().map_err(|_| "loan store lock poisoned")?;
        if state.has_pair(new_loan.customer_id, new_loan.book_id) {
            return Ok(None);
        }

        state.last_id += 1;
        let loan = new_loan.into_loan(LoanId::from_i64(state.last_id));
        state.loans.push(loan.clone());
        Ok(Some(loan))
    }
}
