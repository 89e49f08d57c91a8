use crate::domain::{Customer, CustomerFields, CustomerId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 顧客リポジトリポート
///
/// 契約は`BookRepository`と同じ形。
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>>;

    async fn insert(&self, fields: CustomerFields) -> Result<Customer>;

    async fn get(&self, customer_id: CustomerId) -> Result<Option<Customer>>;

    async fn update(
        &self,
        customer_id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Option<Customer>>;

    async fn delete(&self, customer_id: CustomerId) -> Result<bool>;
}
