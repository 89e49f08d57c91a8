use crate::domain::{Customer, CustomerFields, CustomerId};
use crate::ports::customer_repository::{CustomerRepository as CustomerRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    last_id: i64,
    customers: BTreeMap<CustomerId, Customer>,
}

/// CustomerRepositoryのインメモリ実装
#[derive(Default)]
pub struct CustomerRepository {
    state: Mutex<State>,
}

impl CustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>> {
        let state = self.state.lock().map_err(|_| "customer store lock poisoned")?;
        Ok(state.customers.values().cloned().collect())
    }

    async fn insert(&self, fields: CustomerFields) -> Result<Customer> {
        let mut state = self.state.lock().map_err(|_| "customer store lock poisoned")?;
        state.last_id += 1;
        let customer = Customer::from_fields(CustomerId::from_i64(state.last_id), fields);
        state.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get(&self, customer_id: CustomerId) -> Result<Option<Customer>> {
        let state = self.state.lock().map_err(|_| "customer store lock poisoned")?;
        Ok(state.customers.get(&customer_id).cloned())
    }

    async fn update(
        &self,
        customer_id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Option<Customer>> {
        let mut state = self.state.lock().map_err(|_| "customer store lock poisoned")?;
        Ok(state.customers.get_mut(&customer_id).map(|customer| {
            customer.replace(fields);
            customer.clone()
        }))
    }

    async fn delete(&self, customer_id: CustomerId) -> Result<bool> {
        let mut state = self.state.lock().map_err(|_| "customer store lock poisoned")?;
        Ok(state.customers.remove(&customer_id).is_some())
    }
}
