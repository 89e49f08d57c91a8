use crate::domain::{Customer, CustomerFields, CustomerId};

use super::dependencies::ServiceDependencies;
use super::errors::{RecordError, Result};

pub async fn list_customers(deps: &ServiceDependencies) -> Result<Vec<Customer>> {
    deps.customers.list().await.map_err(RecordError::Repository)
}

pub async fn add_customer(deps: &ServiceDependencies, fields: CustomerFields) -> Result<Customer> {
    let customer = deps
        .customers
        .insert(fields)
        .await
        .map_err(RecordError::Repository)?;

    tracing::info!(customer_id = customer.id.value(), "Customer created");
    Ok(customer)
}

/// IDで顧客を取得する。見つからなければ`CustomerNotFound`
pub async fn get_customer(deps: &ServiceDependencies, customer_id: CustomerId) -> Result<Customer> {
    deps.customers
        .get(customer_id)
        .await
        .map_err(RecordError::Repository)?
        .ok_or(RecordError::CustomerNotFound)
}

pub async fn update_customer(
    deps: &ServiceDependencies,
    customer_id: CustomerId,
    fields: CustomerFields,
) -> Result<Customer> {
    let customer = deps
        .customers
        .update(customer_id, fields)
        .await
        .map_err(RecordError::Repository)?
        .ok_or(RecordError::CustomerNotFound)?;

    tracing::info!(customer_id = customer_id.value(), "Customer updated");
    Ok(customer)
}

pub async fn delete_customer(deps: &ServiceDependencies, customer_id: CustomerId) -> Result<()> {
    let deleted = deps
        .customers
        .delete(customer_id)
        .await
        .map_err(RecordError::Repository)?;

    if !deleted {
        return Err(RecordError::CustomerNotFound);
    }

    tracing::info!(customer_id = customer_id.value(), "Customer deleted");
    Ok(())
}
