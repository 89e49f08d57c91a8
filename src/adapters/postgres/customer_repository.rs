use crate::domain::{Customer, CustomerFields, CustomerId};
use crate::ports::customer_repository::{CustomerRepository as CustomerRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_customer(row: &PgRow) -> Customer {
    Customer {
        id: CustomerId::from_i64(row.get("id")),
        name: row.get("name"),
        city: row.get("city"),
        age: row.get("age"),
    }
}

/// CustomerRepositoryのPostgreSQL実装
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query("SELECT id, name, city, age FROM customers ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(map_row_to_customer).collect())
    }

    async fn insert(&self, fields: CustomerFields) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            INSERT INTO customers (name, city, age)
            VALUES ($1, $2, $3)
            RETURNING id, name, city, age
            "#,
        )
        .bind(fields.name)
        .bind(fields.city)
        .bind(fields.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(map_row_to_customer(&row))
    }

    async fn get(&self, customer_id: CustomerId) -> Result<Option<Customer>> {
        let row = sqlx::query("SELECT id, name, city, age FROM customers WHERE id = $1")
            .bind(customer_id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row_to_customer))
    }

    async fn update(
        &self,
        customer_id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Option<Customer>> {
        let row = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2,
                city = $3,
                age = $4
            WHERE id = $1
            RETURNING id, name, city, age
            "#,
        )
        .bind(customer_id.value())
        .bind(fields.name)
        .bind(fields.city)
        .bind(fields.age)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_customer))
    }

    async fn delete(&self, customer_id: CustomerId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
