use crate::domain::{self, Loan, commands::AddLoan};

use super::dependencies::ServiceDependencies;
use super::errors::{RecordError, Result};

/// 全貸出を取得する
pub async fn list_loans(deps: &ServiceDependencies) -> Result<Vec<Loan>> {
    deps.loans.list().await.map_err(RecordError::Repository)
}

/// 貸出を作成する
///
/// ビジネスルール：
/// - 同じ(顧客, 書籍)の貸出は1件まで
/// - 顧客と書籍が存在すること
/// - 書籍種別が貸出期間表にあること
/// - 返却期限は貸出日 + 貸出期間（呼び出し側の値は使わない）
///
/// 返却の概念がないため、一度貸し出した(顧客, 書籍)の組は以後ずっと使えない。
///
/// # 一意性保証
///
/// 事前の存在確認は早期に拒否するためだけのもの。
/// 一意性そのものは`LoanRepository::insert`が不可分に保証するため、
/// 同時に同じ組で呼び出されても保存される貸出は1件だけになる。
///
/// # 戻り値
/// 成功時は保存された貸出
pub async fn add_loan(deps: &ServiceDependencies, cmd: AddLoan) -> Result<Loan> {
    // 1. 重複確認
    let already_loaned = deps
        .loans
        .exists_for(cmd.customer_id, cmd.book_id)
        .await
        .map_err(RecordError::Repository)?;

    if already_loaned {
        tracing::warn!(
            customer_id = cmd.customer_id.value(),
            book_id = cmd.book_id.value(),
            "Loan rejected: already exists"
        );
        return Err(RecordError::LoanAlreadyExists);
    }

    // 2. 参照先の存在確認
    let customer = deps
        .customers
        .get(cmd.customer_id)
        .await
        .map_err(RecordError::Repository)?;
    let book = deps
        .books
        .get(cmd.book_id)
        .await
        .map_err(RecordError::Repository)?;

    let book = match (customer, book) {
        (Some(_), Some(book)) => book,
        _ => {
            tracing::warn!(
                customer_id = cmd.customer_id.value(),
                book_id = cmd.book_id.value(),
                "Loan rejected: invalid customer or book"
            );
            return Err(RecordError::InvalidReference);
        }
    };

    // 3. 返却期限の算出
    let new_loan = domain::loan_book(&cmd, book.book_type).inspect_err(|e| {
        tracing::warn!(book_id = cmd.book_id.value(), "Loan rejected: {}", e);
    })?;

    tracing::debug!(
        loan_date = %new_loan.loan_date,
        return_date = %new_loan.return_date,
        "Computed return date"
    );

    // 4. 保存（一意性はここで確定する）
    let loan = deps
        .loans
        .insert(new_loan)
        .await
        .map_err(RecordError::Repository)?
        .ok_or(RecordError::LoanAlreadyExists)?;

    tracing::info!(
        loan_id = loan.id.value(),
        customer_id = loan.customer_id.value(),
        book_id = loan.book_id.value(),
        "Loan created"
    );
    Ok(loan)
}
