use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::error::ApiError;

/// A persisted product row. `id` is assigned by the store on creation and
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// Validated product fields, ready for insert or update.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// Single-table repository over `products`.
#[derive(Clone)]
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new row and return the stored entity with its assigned id.
    pub async fn create(&self, product: NewProduct) -> Result<Product, ApiError> {
        let created = sqlx::query_as::<_, Product>(
            "INSERT INTO products (title, description, price)
             VALUES (?, ?, ?)
             RETURNING id, title, description, price",
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Fetch a single row by id, `NotFound` when absent.
    pub async fn fetch(&self, id: i64) -> Result<Product, ApiError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, title, description, price FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

        Ok(product)
    }

    /// Overwrite title/description/price of an existing row in place.
    /// The id and table identity are preserved.
    pub async fn update(&self, id: i64, product: NewProduct) -> Result<Product, ApiError> {
        let updated = sqlx::query_as::<_, Product>(
            "UPDATE products SET title = ?, description = ?, price = ?
             WHERE id = ?
             RETURNING id, title, description, price",
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

        Ok(updated)
    }

    /// Remove a row by id, `NotFound` when absent. A second delete of the
    /// same id is `NotFound`, not a repeated success.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::not_found("Product not found"));
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64, ApiError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Fetch one page window in stable id order. Pages are 1-based; a page
    /// past the end returns an empty vec rather than an error.
    pub async fn page(&self, page: i64, per_page: i64) -> Result<Vec<Product>, ApiError> {
        let offset = (page - 1) * per_page;

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, title, description, price FROM products
             ORDER BY id
             LIMIT ? OFFSET ?",
        )
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
