use crate::ports::{BookRepository, CustomerRepository, LoanRepository};
use std::sync::Arc;

/// レコードサービスの依存関係
///
/// ストレージはプロセス全体の状態ではなく、構築時に明示的に注入する。
/// 各操作はこの構造体を受け取る関数として定義される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub books: Arc<dyn BookRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub loans: Arc<dyn LoanRepository>,
}
