use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{Amount, CustomerType, PaymentMethod};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    Order, OrderId, OrderStatus, OrderStoreError, Result,
    store::OrderStore,
};

const ORDER_COLUMNS: &str = "id, amount, product_name, customer_type, delivery_address, payment_method, status, created_at";

/// PostgreSQL-backed order store implementation.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `url` and returns a store over that pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        Ok(Order::restore(
            OrderId::from_uuid(row.try_get::<Uuid, _>("id")?),
            Amount::new(row.try_get::<Decimal, _>("amount")?),
            row.try_get("product_name")?,
            CustomerType::from_code(row.try_get("customer_type")?)?,
            row.try_get("delivery_address")?,
            PaymentMethod::from_code(row.try_get("payment_method")?)?,
            OrderStatus::from_code(row.try_get("status")?)?,
            row.try_get::<DateTime<Utc>, _>("created_at")?,
        ))
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        let row: Option<PgRow> =
            sqlx::query(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn create(&self, order: Order) -> Result<Order> {
        let row: PgRow = sqlx::query(&format!(
            r#"
            INSERT INTO orders (id, amount, product_name, customer_type, delivery_address, payment_method, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(order.id().as_uuid())
        .bind(order.amount().value())
        .bind(order.product_name())
        .bind(order.customer_type().code())
        .bind(order.delivery_address())
        .bind(order.payment_method().code())
        .bind(order.status().code())
        .bind(order.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Primary key violation means the identifier is already taken
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some("orders_pkey")
            {
                return OrderStoreError::AlreadyExists(order.id());
            }
            OrderStoreError::Database(e)
        })?;

        tracing::debug!(order_id = %order.id(), "order row inserted");
        Self::row_to_order(row)
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        let row: Option<PgRow> = sqlx::query(&format!(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(status.code())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Self::row_to_order(row),
            None => Err(OrderStoreError::NotFound(id)),
        }
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }
}
